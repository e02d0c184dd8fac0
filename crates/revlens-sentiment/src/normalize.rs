//! Configurable text cleaning applied before scoring.
//!
//! Transforms run in a fixed order so that any combination of toggles yields
//! the same output for the same input: case-fold, strip URLs, strip numeric
//! tokens, strip punctuation, strip emoji, strip remaining non-ASCII symbols,
//! strip stopwords, collapse whitespace. Toggles left off leave that category
//! of content untouched.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid URL pattern"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*\b").expect("valid number pattern"));

/// Common English stopwords removed by the `strip_stopwords` toggle.
///
/// Lowercase only; combine with the `lowercase` toggle for case-insensitive
/// matching.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours",
];

/// Independent cleaning toggles. Immutable by convention; passed by value.
///
/// The default set mirrors the observed dashboard configuration: everything on
/// except stopword removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningConfig {
    pub lowercase: bool,
    pub strip_urls: bool,
    pub strip_numbers: bool,
    pub strip_punctuation: bool,
    pub strip_emoji: bool,
    pub strip_special: bool,
    pub collapse_whitespace: bool,
    pub strip_stopwords: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_urls: true,
            strip_numbers: true,
            strip_punctuation: true,
            strip_emoji: true,
            strip_special: true,
            collapse_whitespace: true,
            strip_stopwords: false,
        }
    }
}

impl CleaningConfig {
    /// Every toggle enabled, stopword removal included.
    #[must_use]
    pub fn all() -> Self {
        Self {
            strip_stopwords: true,
            ..Self::default()
        }
    }

    /// Every toggle disabled; `normalize` becomes the identity.
    #[must_use]
    pub fn none() -> Self {
        Self {
            lowercase: false,
            strip_urls: false,
            strip_numbers: false,
            strip_punctuation: false,
            strip_emoji: false,
            strip_special: false,
            collapse_whitespace: false,
            strip_stopwords: false,
        }
    }
}

/// Apply the configured cleaning transforms to `text`.
///
/// Pure and total: empty strings, pure whitespace, and arbitrary Unicode all
/// produce a valid (possibly empty) string. Idempotent under a fixed config.
///
/// Stopword removal re-tokenizes on whitespace, so it also normalizes the
/// spacing of whatever it keeps.
#[must_use]
pub fn normalize(text: &str, config: CleaningConfig) -> String {
    let mut out = if config.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if config.strip_urls {
        out = URL_RE.replace_all(&out, " ").into_owned();
    }

    if config.strip_numbers {
        out = NUMBER_RE.replace_all(&out, " ").into_owned();
    }

    if config.strip_punctuation {
        out.retain(|c| !c.is_ascii_punctuation());
    }

    if config.strip_emoji {
        out.retain(|c| !is_emoji(c));
    }

    if config.strip_special {
        out.retain(|c| c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation());
    }

    if config.strip_stopwords {
        out = out
            .split_whitespace()
            .filter(|token| !STOPWORDS.contains(token))
            .collect::<Vec<_>>()
            .join(" ");
    }

    if config.collapse_whitespace {
        out = out.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    out
}

/// Characters in the emoji and pictograph blocks, plus the joiners that glue
/// emoji sequences together.
fn is_emoji(c: char) -> bool {
    matches!(u32::from(c),
        0x1F000..=0x1FAFF   // pictographs, emoticons, transport, supplemental
        | 0x2600..=0x27BF   // misc symbols and dingbats
        | 0x2B00..=0x2BFF   // arrows and stars used as emoji
        | 0xFE0E..=0xFE0F   // variation selectors
        | 0x200D            // zero-width joiner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize("", CleaningConfig::default()), "");
        assert_eq!(normalize("", CleaningConfig::all()), "");
        assert_eq!(normalize("", CleaningConfig::none()), "");
    }

    #[test]
    fn whitespace_only_input_collapses_to_empty() {
        assert_eq!(normalize("   \t\n  ", CleaningConfig::default()), "");
    }

    #[test]
    fn none_config_is_identity() {
        let text = "Mixed CASE, 123 https://x.com  \u{1F600}  ©";
        assert_eq!(normalize(text, CleaningConfig::none()), text);
    }

    #[test]
    fn lowercase_folds_case() {
        let config = CleaningConfig {
            lowercase: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("Great MOVIE", config), "great movie");
    }

    #[test]
    fn strip_urls_removes_http_and_www_forms() {
        let config = CleaningConfig {
            strip_urls: true,
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        assert_eq!(
            normalize("see https://example.com/a?b=1 and www.example.org now", config),
            "see and now"
        );
    }

    #[test]
    fn strip_numbers_removes_standalone_tokens_only() {
        let config = CleaningConfig {
            strip_numbers: true,
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("rated 8.5 out of 10", config), "rated out of");
        // Digits embedded in a word are not standalone numeric tokens.
        assert_eq!(normalize("se7en", config), "se7en");
    }

    #[test]
    fn strip_punctuation_removes_ascii_punctuation() {
        let config = CleaningConfig {
            strip_punctuation: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("wow! really?! (yes)", config), "wow really yes");
    }

    #[test]
    fn strip_emoji_removes_pictographs() {
        let config = CleaningConfig {
            strip_emoji: true,
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("loved it \u{1F600}\u{2764}\u{FE0F}", config), "loved it");
    }

    #[test]
    fn strip_special_removes_non_ascii_symbols_but_keeps_letters() {
        let config = CleaningConfig {
            strip_special: true,
            ..CleaningConfig::none()
        };
        // © and ™ are symbols; café's accented letter is alphabetic and stays.
        assert_eq!(normalize("café© brand™", config), "café brand");
    }

    #[test]
    fn strip_stopwords_drops_listed_tokens() {
        let config = CleaningConfig {
            strip_stopwords: true,
            ..CleaningConfig::none()
        };
        assert_eq!(
            normalize("it was the best of times", config),
            "best times"
        );
    }

    #[test]
    fn stopwords_are_matched_lowercase() {
        // Without case folding, capitalized stopwords survive.
        let bare = CleaningConfig {
            strip_stopwords: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("The movie", bare), "The movie");

        let folded = CleaningConfig {
            lowercase: true,
            strip_stopwords: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("The movie", folded), "movie");
    }

    #[test]
    fn collapse_whitespace_joins_runs_and_trims() {
        let config = CleaningConfig {
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        assert_eq!(normalize("  a \t b\n\nc ", config), "a b c");
    }

    #[test]
    fn disabled_toggles_leave_categories_untouched() {
        let config = CleaningConfig {
            lowercase: true,
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        assert_eq!(
            normalize("Visit www.site.com, rated 10!", config),
            "visit www.site.com, rated 10!"
        );
    }

    #[test]
    fn default_config_matches_dashboard_cleaning() {
        let cleaned = normalize(
            "LOVED it!!! 10/10 \u{1F600} see https://review.example.com",
            CleaningConfig::default(),
        );
        assert_eq!(cleaned, "loved it see");
    }

    #[test]
    fn default_config_keeps_stopwords() {
        assert_eq!(
            normalize("it was the best", CleaningConfig::default()),
            "it was the best"
        );
    }

    #[test]
    fn normalize_is_idempotent_under_default_config() {
        let config = CleaningConfig::default();
        let once = normalize("Wow!! SO   good \u{1F600} 10/10 www.a.com", config);
        let twice = normalize(&once, config);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent_under_all_config() {
        let config = CleaningConfig::all();
        let once = normalize("It was the BEST film of 2024, truly!", config);
        let twice = normalize(&once, config);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent_for_fold_and_collapse_alone() {
        let config = CleaningConfig {
            lowercase: true,
            collapse_whitespace: true,
            ..CleaningConfig::none()
        };
        let once = normalize("A  B\tC", config);
        assert_eq!(once, normalize(&once, config));
    }
}
