//! Numeric token parsing for single OCR lines.
//!
//! Only the leftmost number on a line is returned. A bare digit run glued to a
//! preceding ASCII letter belongs to an identifier (`FT3`, `T4`) and is skipped, unless
//! it carries a fractional part (`TSH0.565`). CJK labels written flush against the
//! value (`促甲状腺激素0.565`) and dot leaders (`FT3 ......5.27`) still yield it.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{NumericToken, Qualifier};

/// Optional qualifier (spaces allowed before the digits), then digits with an
/// optional fractional part.
static RE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:([<>])\s*)?(\d+(?:\.\d*)?)").unwrap());

/// How an unqualified digit run reads, given the text in front of it.
#[derive(Debug, PartialEq, Eq)]
enum Reading {
    Value,
    LeadingDecimal,
    Identifier,
}

fn has_fraction(number: &str) -> bool {
    number
        .split_once('.')
        .is_some_and(|(_, fraction)| !fraction.is_empty())
}

fn classify(before: &str, number: &str) -> Reading {
    let mut preceding = before.chars().rev();
    match preceding.next() {
        Some(c) if c.is_ascii_digit() => Reading::Identifier,
        Some(c) if c.is_ascii_alphabetic() => {
            if has_fraction(number) {
                Reading::Value
            } else {
                Reading::Identifier
            }
        }
        Some('.') => match preceding.next() {
            Some(c) if c.is_ascii_digit() => Reading::Identifier,
            Some('.') => Reading::Value,
            _ if number.contains('.') => Reading::Identifier,
            _ => Reading::LeadingDecimal,
        },
        _ => Reading::Value,
    }
}

/// Fold full-width digits and comparison signs that OCR engines emit for CJK reports.
fn fold_numeric_forms(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '．' => '.',
            '＜' | '≤' => '<',
            '＞' | '≥' => '>',
            other => other,
        })
        .collect()
}

/// Parse the first numeric token on a line.
pub fn parse_value(line: &str) -> Option<NumericToken> {
    let folded = fold_numeric_forms(line);

    RE_VALUE.captures_iter(&folded).find_map(|caps| {
        let qualifier = match caps.get(1).map(|m| m.as_str()) {
            Some("<") => Qualifier::LessThan,
            Some(">") => Qualifier::GreaterThan,
            _ => Qualifier::None,
        };
        let number = caps.get(2)?;

        let reading = if qualifier == Qualifier::None {
            classify(&folded[..number.start()], number.as_str())
        } else {
            Reading::Value
        };
        let magnitude = match reading {
            Reading::Value => number.as_str().parse::<f64>().ok()?,
            Reading::LeadingDecimal => format!("0.{}", number.as_str()).parse::<f64>().ok()?,
            Reading::Identifier => return None,
        };

        Some(NumericToken {
            qualifier,
            magnitude,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(line: &str) -> Option<f64> {
        parse_value(line).map(|t| t.magnitude)
    }

    #[test]
    fn plain_number() {
        assert_eq!(
            parse_value("5.27"),
            Some(NumericToken {
                qualifier: Qualifier::None,
                magnitude: 5.27
            })
        );
    }

    #[test]
    fn less_than_is_stripped_from_magnitude() {
        let token = parse_value("<1.3").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
        assert_eq!(magnitude("1.3"), Some(1.3));
    }

    #[test]
    fn greater_than_is_stripped_from_magnitude() {
        let token = parse_value(">81.20").unwrap();
        assert_eq!(token.qualifier, Qualifier::GreaterThan);
        assert_eq!(token.magnitude, 81.20);
    }

    #[test]
    fn returns_leftmost_value() {
        assert_eq!(magnitude("0.565 mIU/L 0.27-4.2"), Some(0.565));
        assert_eq!(magnitude("TSH 0.565 (0.27-4.2)"), Some(0.565));
    }

    #[test]
    fn integer_value() {
        assert_eq!(magnitude("TPO 34 IU/mL"), Some(34.0));
    }

    #[test]
    fn trailing_decimal_point_parses() {
        assert_eq!(magnitude("12."), Some(12.0));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_value("FT3 ..."), None);
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value("pmol/L"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn digits_inside_label_are_not_values() {
        assert_eq!(parse_value("FT3"), None);
        assert_eq!(parse_value("游离T4"), None);
        assert_eq!(magnitude("FT3 5.27"), Some(5.27));
        assert_eq!(magnitude("FT4:21.10"), Some(21.10));
    }

    #[test]
    fn cjk_label_flush_against_value() {
        assert_eq!(magnitude("促甲状腺激素0.565"), Some(0.565));
    }

    #[test]
    fn qualifier_after_label() {
        let token = parse_value("TGAb <1.3 IU/mL").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
    }

    #[test]
    fn full_width_forms_are_folded() {
        let token = parse_value("＜１．３").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
        assert_eq!(parse_value("≥100").unwrap().qualifier, Qualifier::GreaterThan);
    }

    #[test]
    fn qualifier_glued_to_label() {
        let token = parse_value("TGAb<1.3").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
    }

    #[test]
    fn spaced_qualifier_is_kept() {
        let token = parse_value("TG < 1.3").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
        assert_eq!(parse_value("> 100").unwrap().qualifier, Qualifier::GreaterThan);
    }

    #[test]
    fn dot_leader_before_value() {
        assert_eq!(magnitude("FT3 ......5.27"), Some(5.27));
        assert_eq!(magnitude("FT3 ...5.27"), Some(5.27));
        let token = parse_value("TG ......<1.3").unwrap();
        assert_eq!(token.qualifier, Qualifier::LessThan);
        assert_eq!(token.magnitude, 1.3);
    }

    #[test]
    fn decimal_glued_to_label() {
        assert_eq!(magnitude("TSH0.565"), Some(0.565));
        assert_eq!(magnitude("TPOAb81.20"), Some(81.20));
        assert_eq!(parse_value("FT4."), None);
    }

    #[test]
    fn leading_decimal_point() {
        assert_eq!(magnitude(".5"), Some(0.5));
        assert_eq!(magnitude("TSH .565"), Some(0.565));
    }

    #[test]
    fn fraction_digits_are_never_split() {
        assert_eq!(magnitude("0.565"), Some(0.565));
        assert_eq!(classify("0.", "565"), Reading::Identifier);
        assert_eq!(classify("FT", "3"), Reading::Identifier);
        assert_eq!(classify("FT3 ..", "5.27"), Reading::Value);
    }
}
