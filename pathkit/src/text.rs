//! Text helpers used alongside the path engine.
//!
//! Case conversion is delegated to `heck`; the remaining helpers deal with
//! sentence punctuation and indefinite articles for user-facing messages.

use std::fmt;

use clap::ValueEnum;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// Characters accepted as sentence terminators.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Identifier casing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `Title Case`
    Title,
    /// `Sentence case`
    Sentence,
}

impl CaseStyle {
    /// Convert `s` to this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::text::CaseStyle;
    ///
    /// assert_eq!(CaseStyle::Snake.convert("userProfile"), "user_profile");
    /// assert_eq!(CaseStyle::Pascal.convert("user-profile"), "UserProfile");
    /// ```
    #[must_use]
    pub fn convert(self, s: &str) -> String {
        match self {
            Self::Snake => to_snake(s),
            Self::Kebab => to_kebab(s),
            Self::Camel => to_camel(s),
            Self::Pascal => to_pascal(s),
            Self::Title => to_title(s),
            Self::Sentence => to_sentence(s),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Title => "title",
            Self::Sentence => "sentence",
        };
        f.write_str(name)
    }
}

/// Convert to `snake_case`.
#[must_use]
pub fn to_snake(s: &str) -> String {
    s.to_snake_case()
}

/// Convert to `kebab-case`.
#[must_use]
pub fn to_kebab(s: &str) -> String {
    s.to_kebab_case()
}

/// Convert to `camelCase`.
#[must_use]
pub fn to_camel(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert to `PascalCase`.
#[must_use]
pub fn to_pascal(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert to `Title Case`.
#[must_use]
pub fn to_title(s: &str) -> String {
    s.to_title_case()
}

/// Lowercase everything except the first character, which is uppercased.
///
/// ```
/// assert_eq!(pathkit::text::to_sentence("HELLO World"), "Hello world");
/// ```
#[must_use]
pub fn to_sentence(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when `s` is empty or only whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when `s` ends with `.`, `!` or `?`.
#[must_use]
pub fn ends_with_punctuation(s: &str) -> bool {
    s.ends_with(TERMINATORS)
}

/// Append `terminator` unless `s` already ends with punctuation.
///
/// Only `.`, `!` and `?` are accepted; anything else becomes `.`.
///
/// # Examples
///
/// ```
/// use pathkit::text::terminate;
///
/// assert_eq!(terminate("File not found", '!'), "File not found!");
/// assert_eq!(terminate("Done?", '.'), "Done?");
/// assert_eq!(terminate("Saved", ';'), "Saved.");
/// ```
#[must_use]
pub fn terminate(s: &str, terminator: char) -> String {
    if ends_with_punctuation(s) {
        return s.to_string();
    }
    let terminator = if TERMINATORS.contains(&terminator) {
        terminator
    } else {
        '.'
    };
    format!("{s}{terminator}")
}

/// Prefix `word` with `article`, turning `a`/`A` into `an`/`An` before a vowel.
///
/// # Examples
///
/// ```
/// use pathkit::text::with_article;
///
/// assert_eq!(with_article("extension", "a"), "an extension");
/// assert_eq!(with_article("directory", "A"), "A directory");
/// assert_eq!(with_article("  ", "the"), "");
/// ```
#[must_use]
pub fn with_article(word: &str, article: &str) -> String {
    let word = word.trim();
    if word.is_empty() {
        return String::new();
    }
    let starts_with_vowel = word
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    let article = match article {
        "a" if starts_with_vowel => "an",
        "A" if starts_with_vowel => "An",
        other => other,
    };
    if article.is_empty() {
        word.to_string()
    } else {
        format!("{article} {word}")
    }
}
