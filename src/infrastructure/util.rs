// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Unicode whitespace plus U+FEFF (zero-width no-break space), which
/// `char::is_whitespace` does not include.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("whitespace pattern is valid"));
static NON_SLUG_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]").expect("slug character pattern is valid"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Combining Diacritical Marks block.
fn is_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Turn free-form text into a lowercase, hyphen-delimited slug.
///
/// Accents are removed through canonical decomposition, whitespace runs
/// become single hyphens, and anything outside `[a-z0-9-]` is dropped.
/// Underscores survive the character filter and are then folded into
/// hyphens. Hyphens at the edges are kept; callers that need them gone use
/// [`SlugGenerator::slugify_trimmed`].
///
/// ```
/// use teamhub::infrastructure::util::slugify;
///
/// assert_eq!(slugify("Café São Paulo"), "cafe-sao-paulo");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
    let stripped: String = input.nfd().filter(|ch| !is_diacritic(*ch)).collect();
    let lowered = stripped.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(lowered.trim_matches(is_separator), "-");
    let filtered = NON_SLUG_CHAR.replace_all(&hyphenated, "");
    let folded = filtered.replace('_', "-");
    HYPHEN_RUN.replace_all(&folded, "-").into_owned()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSlugGenerator;

impl SlugGenerator for UnicodeSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Transliterates non-Latin scripts to ASCII before slugging, so names such
/// as "Москва" keep a readable slug instead of collapsing to nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
