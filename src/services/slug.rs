//! Title slugification
//!
//! Derives the filesystem-safe form of a lecture title used in folder and
//! canvas file names.

/// Maximum slug length in characters
const MAX_SLUG_LEN: usize = 64;

/// Turn a human-readable title into a filesystem- and URL-safe slug.
///
/// Lowercases, drops everything outside `[a-z0-9- ]`, collapses whitespace
/// runs and repeated hyphens into a single hyphen, trims hyphens at both
/// ends, and truncates to 64 characters. Total over any input and idempotent
/// on its own output; an empty or all-symbol title yields an empty slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        match ch {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            '-' => pending_hyphen = true,
            c if c.is_whitespace() => pending_hyphen = true,
            _ => {}
        }
    }

    // The alphabet is ASCII at this point, so char count equals byte count
    slug.truncate(MAX_SLUG_LEN);
    // Truncation may land just after a hyphen
    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(slugify("RL Frequency Response"), "rl-frequency-response");
    }

    #[test]
    fn test_slugify_strips_symbols() {
        assert_eq!(slugify("Fourier: Series & Transforms!"), "fourier-series-transforms");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("a   b"), "a-b");
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("a- -b"), "a-b");
    }

    #[test]
    fn test_slugify_no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("  -hello-  "), "hello");
        assert_eq!(slugify("--"), "");
    }

    #[test]
    fn test_slugify_empty_input_is_safe() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_slugify_truncates_to_64() {
        let long = "word ".repeat(40);
        let slug = slugify(&long);
        assert!(slug.len() <= 64);
        // Truncation must not leave a dangling hyphen
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_slugify_alphabet_and_no_double_hyphens() {
        for input in ["Hello, World!", "  §§ weird ±input ++", "ünïcödé tîtlè", "a--b--c"] {
            let slug = slugify(input);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected char in slug {:?}",
                slug
            );
            assert!(!slug.contains("--"), "double hyphen in {:?}", slug);
        }
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in [
            "RL Frequency Response",
            "  spaced   out  ",
            "a--b--c",
            &"x y ".repeat(50),
            "",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }
}
