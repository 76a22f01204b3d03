// src/harvest/extract.rs
// =============================================================================
// This module pulls document links out of raw page text.
//
// We deliberately do NOT parse the HTML. A link is simply the longest run of
// characters with no ASCII whitespace and no quote in it that ends in the
// extension. That finds links in href attributes, inline scripts, JSON blobs
// and broken markup alike.
//
// Example:
//   text      = <a href="docs/SDS-1.pdf">SDS</a>
//   extension = .pdf
//   result    = ["docs/SDS-1.pdf"]
//
// Rust concepts:
// - regex: compiled once per extractor, reused for every page
// - HashSet: O(1) "have we seen this already?" checks
// =============================================================================

use std::collections::HashSet;

use regex::Regex;

#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Builds an extractor for links ending in `extension` (case-sensitive).
    pub fn new(extension: &str) -> Self {
        // Whitespace here is ASCII only (tab, newline, form feed, CR, space):
        // a non-breaking space inside a link does not split it
        let pattern = format!(r#"[^\t\n\x0C\r "']+{}"#, regex::escape(extension));
        // The extension is escaped, so the pattern always compiles
        let pattern = Regex::new(&pattern).expect("link pattern is valid");
        Self { pattern }
    }

    /// Returns every match in order of appearance, repeats included
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Keeps the first occurrence of each string, in the original order.
///
/// Comparison is exact: "a.pdf" and "A.pdf" are different links.
pub fn dedupe(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> LinkExtractor {
        LinkExtractor::new(".pdf")
    }

    #[test]
    fn test_extract_keeps_repeats_until_dedupe() {
        let text = r#"<a href="doc_1.pdf">x</a> "doc_1.pdf""#;
        let links = pdf().extract(text);
        assert_eq!(links, vec!["doc_1.pdf", "doc_1.pdf"]);
        assert_eq!(dedupe(links), vec!["doc_1.pdf"]);
    }

    #[test]
    fn test_extract_stops_at_whitespace_and_quotes() {
        let text = "see files/a b.pdf and 'c/d.pdf' or \"e.pdf\"\tf.pdf";
        let links = pdf().extract(text);
        assert_eq!(links, vec!["b.pdf", "c/d.pdf", "e.pdf", "f.pdf"]);
    }

    #[test]
    fn test_non_breaking_space_stays_inside_the_link() {
        let links = pdf().extract("see media/SDS\u{a0}Outdoor.pdf today");
        assert_eq!(links, vec!["media/SDS\u{a0}Outdoor.pdf"]);
    }

    #[test]
    fn test_form_feed_and_carriage_return_split_links() {
        let links = pdf().extract("a.pdf\x0Cb.pdf\r\nc.pdf");
        assert_eq!(links, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let links = pdf().extract("UPPER.PDF lower.pdf Mixed.Pdf");
        assert_eq!(links, vec!["lower.pdf"]);
    }

    #[test]
    fn test_extract_from_malformed_markup() {
        let text = r#"<div><a href=/sds/one.pdf>one<a href="two.pdf"<p>{"url":"three.pdf"}"#;
        let links = pdf().extract(text);
        assert_eq!(links, vec!["href=/sds/one.pdf", "two.pdf", "three.pdf"]);
    }

    #[test]
    fn test_extract_takes_longest_run() {
        // Greedy: the run swallows the earlier ".pdf" as well
        let links = pdf().extract("x/a.pdf.backup.pdf");
        assert_eq!(links, vec!["x/a.pdf.backup.pdf"]);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(pdf().extract("").is_empty());
        assert!(pdf().extract("<html>no documents here</html>").is_empty());
    }

    #[test]
    fn test_every_match_ends_with_extension_and_has_no_separators() {
        let text = "a.pdf\n'b c.pdf' \"d\".pdf e.pdfx f.pdf";
        for link in pdf().extract(text) {
            assert!(link.ends_with(".pdf"), "{}", link);
            assert!(!link.chars().any(|c| c.is_ascii_whitespace() || c == '"' || c == '\''));
        }
    }

    #[test]
    fn test_extract_other_extension() {
        let links = LinkExtractor::new(".txt").extract("notes.txt report.pdf");
        assert_eq!(links, vec!["notes.txt"]);
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let input = vec!["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let once = dedupe(input);
        assert_eq!(once, vec!["b", "a", "c"]);
        assert_eq!(dedupe(once.clone()), once);
    }

    #[test]
    fn test_dedupe_is_exact() {
        let input = vec!["a.pdf".to_string(), "A.pdf".to_string(), "a.pdf ".to_string()];
        assert_eq!(dedupe(input.clone()), input);
    }
}
