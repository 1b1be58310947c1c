//! Paragraph splitting by blank-line heuristics.

/// Splits document text into trimmed, non-empty paragraphs.
///
/// Line endings are normalized first, then the text is cut on blank lines.
/// Runs of blank lines produce no empty paragraphs.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "First paragraph.\n\nSecond paragraph.";
        assert_eq!(
            split_into_paragraphs(text),
            vec!["First paragraph.", "Second paragraph."]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_into_paragraphs("").is_empty());
    }

    #[test]
    fn test_split_whitespace_only_input() {
        assert!(split_into_paragraphs("  \n\n \t \n\n").is_empty());
    }

    #[test]
    fn test_split_normalizes_crlf() {
        let text = "one\r\n\r\ntwo\r\rthree";
        assert_eq!(split_into_paragraphs(text), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_collapses_blank_line_runs() {
        let text = "one\n\n\n\ntwo";
        assert_eq!(split_into_paragraphs(text), vec!["one", "two"]);
    }

    #[test]
    fn test_split_trims_each_paragraph() {
        let text = "  padded  \n\n\tindented\t";
        assert_eq!(split_into_paragraphs(text), vec!["padded", "indented"]);
    }

    #[test]
    fn test_split_keeps_single_newlines_inside_paragraph() {
        let text = "line one\nline two\n\nnext";
        assert_eq!(split_into_paragraphs(text), vec!["line one\nline two", "next"]);
    }

    #[test]
    fn test_split_preserves_order() {
        let text = "a\n\nb\n\nc\n\nd";
        assert_eq!(split_into_paragraphs(text), vec!["a", "b", "c", "d"]);
    }
}
