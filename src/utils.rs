//! Small text helpers shared by the section builder.

/// Normalizes text content before it is rendered into the document.
///
/// Line endings are converted to `\n`, tabs are expanded to four spaces,
/// runs of consecutive newlines collapse into a single one, and surrounding
/// whitespace is trimmed. Lossy by design; never fails.
pub fn normalize(text: &str) -> String {
    let unified = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ");

    let mut out = String::with_capacity(unified.len());
    let mut at_newline = false;
    for ch in unified.chars() {
        if ch == '\n' {
            if !at_newline {
                out.push('\n');
            }
            at_newline = true;
        } else {
            out.push(ch);
            at_newline = false;
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_consecutive_newlines() {
        assert_eq!(normalize("a\n\n\nb\n"), "a\nb");
    }

    #[test]
    fn test_converts_line_endings() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_expands_tabs() {
        assert_eq!(normalize("\tx"), "x");
        assert_eq!(normalize("a\tb"), "a    b");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("  hello  "), "hello");
        assert_eq!(normalize("\n\nhello\n\n"), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n\n"), "");
    }
}
