// src/harvest/filename.rs
// =============================================================================
// This module turns a document URL into a filename that is safe on any
// filesystem.
//
// Steps (order matters):
// 1. Lowercase everything
// 2. Keep only the last path segment
// 3. Replace every run of characters outside [a-z0-9] with "_"
// 4. Collapse "__" runs into a single "_"
// 5. Trim "_" from both ends
// 6. Remove noise substrings such as "_pdf"
// 7. Append the extension if the name does not already end with it
//
// Example:
//   https://example.com/files/Manual-Guide_PDF.pdf -> manual_guide.pdf
//
// Step 3 turns the ".pdf" of the original name into "_pdf", which step 6
// then strips, so the extension in the result always comes from step 7.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use crate::config::FilenameRules;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("non-alnum regex is valid"));

static UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore regex is valid"));

/// Derives the local filename for `url`. Same input, same output.
//
// Parameters:
//   url: the document URL (absolute or not, it makes no difference)
//   rules: the extension to enforce and the noise substrings to remove
//
// Returns: the filename, without any directory
pub fn sanitize_filename(url: &str, rules: &FilenameRules) -> String {
    let lower = url.to_lowercase();
    let base = last_segment(&lower);

    let safe = NON_ALNUM.replace_all(base, "_");
    let safe = UNDERSCORES.replace_all(&safe, "_");
    let mut safe = safe.trim_matches('_').to_string();

    for noise in &rules.noise_substrings {
        safe = safe.replace(noise.as_str(), "");
    }

    if extension_of(&safe) != rules.extension {
        safe.push_str(&rules.extension);
    }

    safe
}

// Text after the last '/', ignoring trailing slashes.
// Mirrors a path "base name": "" -> ".", "///" -> "/"
fn last_segment(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

// ".pdf" for "a.pdf", "" when there is no dot
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A value that is built the first time it is used, then shared
//    - Compiling a Regex is slow, so we do it once instead of per call
//    - The expect() can only fire if the pattern itself is wrong
//
// 2. Why does replace_all return a Cow?
//    - Cow = "clone on write": borrowed if nothing changed, owned otherwise
//    - We only call .to_string() once, at the end of the regex steps
//
// 3. Why return &str from last_segment?
//    - The segment is a slice of the lowercased string we already own
//    - Borrowing it avoids another allocation
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(url: &str) -> String {
        sanitize_filename(url, &FilenameRules::default())
    }

    #[test]
    fn test_sanitize_manual_guide() {
        assert_eq!(
            sanitize("https://example.com/files/Manual-Guide_PDF.pdf"),
            "manual_guide.pdf"
        );
    }

    #[test]
    fn test_sanitize_spaces_and_symbols() {
        assert_eq!(
            sanitize("https://wetandforget.com/media/SDS/Wet & Forget (Outdoor) SDS.pdf"),
            "wet_forget_outdoor_sds.pdf"
        );
    }

    #[test]
    fn test_sanitize_query_string_stays_in_name() {
        assert_eq!(
            sanitize("https://example.com/get/report.pdf?download=1"),
            "report_download_1.pdf"
        );
    }

    #[test]
    fn test_sanitize_trailing_slash_uses_previous_segment() {
        assert_eq!(sanitize("https://example.com/docs/"), "docs.pdf");
    }

    #[test]
    fn test_sanitize_removes_every_noise_occurrence() {
        assert_eq!(sanitize("https://example.com/a_pdf_pdf_b.pdf"), "a_b.pdf");
    }

    #[test]
    fn test_sanitize_degenerate_input_is_bare_extension() {
        assert_eq!(sanitize(""), ".pdf");
        assert_eq!(sanitize("/"), ".pdf");
        assert_eq!(sanitize("https://example.com/!!!"), ".pdf");
    }

    #[test]
    fn test_sanitize_other_extension() {
        let rules = FilenameRules {
            extension: ".txt".to_string(),
            noise_substrings: vec!["_txt".to_string()],
        };
        assert_eq!(sanitize_filename("http://h/Read Me.TXT", &rules), "read_me.txt");
    }

    #[test]
    fn test_sanitize_output_shape() {
        let inputs = [
            "https://wetandforget.com/media/Wet-and-Forget_SDS__2023.pdf",
            "https://example.com/__leading/and__trailing__.pdf",
            "https://example.com/ÜBER größe.pdf",
            "relative/path/with.many.dots.pdf",
            "https://example.com/x_p_pdfdf.pdf",
            "plain",
        ];
        for input in inputs {
            let name = sanitize(input);
            let stem = name.strip_suffix(".pdf").expect("ends with .pdf");
            assert!(
                stem.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{} -> {}",
                input,
                name
            );
            assert!(!stem.starts_with('_') && !stem.ends_with('_'), "{}", name);
            assert!(!stem.contains("__"), "{}", name);
            assert_eq!(sanitize(input), name);
        }
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("a/b/c.pdf"), "c.pdf");
        assert_eq!(last_segment("c.pdf"), "c.pdf");
        assert_eq!(last_segment("a/b//"), "b");
        assert_eq!(last_segment(""), ".");
        assert_eq!(last_segment("//"), "/");
    }
}
