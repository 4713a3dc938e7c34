//! Pure Discord markdown helpers

/// Characters that change formatting when they appear in a chat message
const MARKDOWN_SPECIAL: [char; 5] = ['\\', '*', '_', '`', '~'];

/// Prefix every markdown control character with a single backslash
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape_markdown("hello world"), "hello world");
        assert_eq!(escape_markdown(""), "");
    }

    #[test]
    fn test_escape_each_special_character() {
        assert_eq!(escape_markdown("*"), "\\*");
        assert_eq!(escape_markdown("_"), "\\_");
        assert_eq!(escape_markdown("`"), "\\`");
        assert_eq!(escape_markdown("~"), "\\~");
        assert_eq!(escape_markdown("\\"), "\\\\");
    }

    #[test]
    fn test_escape_mixed_text() {
        assert_eq!(
            escape_markdown("**bold** __it__ `code` ~~gone~~"),
            "\\*\\*bold\\*\\* \\_\\_it\\_\\_ \\`code\\` \\~\\~gone\\~\\~"
        );
        assert_eq!(escape_markdown("a\\*b"), "a\\\\\\*b");
    }

    #[test]
    fn test_escape_leaves_other_characters() {
        let input = "héllo → 世界 #|>[]()";
        assert_eq!(escape_markdown(input), input);
    }

    #[test]
    fn test_escape_removing_backslashes_restores_input() {
        for input in ["a*b_c", "\\\\", "~`_*", "plain", "x\\y"] {
            let escaped = escape_markdown(input);
            let mut restored = String::new();
            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    let next = chars.next().expect("escape is followed by a character");
                    assert!(MARKDOWN_SPECIAL.contains(&next));
                    restored.push(next);
                } else {
                    assert!(!MARKDOWN_SPECIAL.contains(&c));
                    restored.push(c);
                }
            }
            assert_eq!(restored, input);
        }
    }
}
