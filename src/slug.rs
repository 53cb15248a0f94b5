use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not a letter, number, underscore, whitespace or hyphen.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s-]").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Maps a free-text title to a filesystem-safe slug.
///
/// Removes every character that is not a letter, digit, underscore,
/// whitespace or hyphen, trims the result and joins the remaining words
/// with single hyphens. The output never contains path separators and
/// sanitizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use letterboxd_md::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Die Hard: Die Härter!"), "Die-Hard-Die-Härter");
/// assert_eq!(sanitize_filename("  Alien  "), "Alien");
/// ```
#[must_use]
pub fn sanitize_filename(title: &str) -> String {
    let kept = DISALLOWED.replace_all(title, "");
    WHITESPACE.replace_all(kept.trim(), "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(sanitize_filename("Die Hard: Die Härter!"), "Die-Hard-Die-Härter");
        assert_eq!(sanitize_filename("Mission: Impossible – Fallout"), "Mission-Impossible-Fallout");
        assert_eq!(sanitize_filename("What's Up, Doc?"), "Whats-Up-Doc");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_filename("  The   Thing\t(1982) "), "The-Thing-1982");
        assert_eq!(sanitize_filename("Line\nbreak"), "Line-break");
    }

    #[test]
    fn test_hyphens_and_underscores_kept() {
        assert_eq!(sanitize_filename("Spider-Man: No Way Home"), "Spider-Man-No-Way-Home");
        assert_eq!(sanitize_filename("snake_case title"), "snake_case-title");
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(sanitize_filename("Amélie"), "Amélie");
        assert_eq!(sanitize_filename("千と千尋の神隠し"), "千と千尋の神隠し");
    }

    #[test]
    fn test_numeric_characters_kept() {
        assert_eq!(sanitize_filename("Alien³"), "Alien³");
        assert_eq!(sanitize_filename("Ⅻ Monkeys"), "Ⅻ-Monkeys");
    }

    #[test]
    fn test_combining_marks_removed() {
        assert_eq!(sanitize_filename("Ame\u{301}lie"), "Amelie");
    }

    #[test]
    fn test_no_path_separators() {
        let slug = sanitize_filename("../../etc/passwd \\ C:\\Windows");
        assert!(!slug.contains('/'));
        assert!(!slug.contains('\\'));
        assert!(!slug.contains('.'));
        assert_eq!(slug, "etcpasswd-CWindows");
    }

    #[test]
    fn test_only_punctuation_yields_empty() {
        assert_eq!(sanitize_filename("?!:"), "");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_idempotent() {
        let titles = [
            "Die Hard: Die Härter!",
            "  The   Thing\t(1982) ",
            "a - b",
            "Spider-Man: No Way Home",
            "?!:",
            "Amélie",
            "Alien³",
            "Ame\u{301}lie",
        ];

        for title in titles {
            let once = sanitize_filename(title);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {title:?}");
        }
    }
}
