/// Split raw OCR text into the working line sequence.
/// Strips control characters, trims every line and drops blank ones. Order is kept
/// and duplicates are not removed.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_no_lines() {
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn whitespace_only_returns_no_lines() {
        assert!(normalize_lines("   \n\t\n  \r\n").is_empty());
    }

    #[test]
    fn trims_whitespace_per_line() {
        assert_eq!(
            normalize_lines("  FT3  \n\t5.27 pmol/L  "),
            vec!["FT3", "5.27 pmol/L"]
        );
    }

    #[test]
    fn drops_blank_lines_and_keeps_order() {
        assert_eq!(
            normalize_lines("TSH\n\n\n0.565\n\nFT4"),
            vec!["TSH", "0.565", "FT4"]
        );
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(normalize_lines("1.0\n1.0"), vec!["1.0", "1.0"]);
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(normalize_lines("TSH\r\n0.565\r\n"), vec!["TSH", "0.565"]);
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(normalize_lines("TS\x00H\x01 0.565"), vec!["TSH 0.565"]);
    }

    #[test]
    fn only_control_chars_returns_no_lines() {
        assert!(normalize_lines("\x00\x01\x02").is_empty());
    }

    #[test]
    fn preserves_cjk_labels_and_qualifiers() {
        assert_eq!(
            normalize_lines(" 抗甲状腺球蛋白抗体 <1.3 IU/mL "),
            vec!["抗甲状腺球蛋白抗体 <1.3 IU/mL"]
        );
    }
}
