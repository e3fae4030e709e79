//! Casing normalization for hyphen-separated language tags.
//!
//! See <http://www.iana.org/assignments/language-tags/language-tags.xhtml>
//! for the subtag conventions this approximates. This is not a BCP 47
//! parser: only the casing of up to three subtags is touched.

/// Script subtags that are rendered in title case wherever they appear.
pub const SPECIAL_CASE_SUBTAGS: &[&str] = &["hans", "hant", "latn", "cyrl", "cans", "mong", "arab"];

/// Primary subtag marking a sign language.
///
/// Sign-language tags carry a base language, not a region, in the third
/// position, so that subtag is never uppercased.
pub const SIGN_LANGUAGE: &str = "sgn";

/// Normalize the casing of a language tag.
///
/// - `en-us` -> `en-US`
/// - `zh-hans` -> `zh-Hans`
/// - `zh-hant-tw` -> `zh-Hant-TW`
/// - `sgn-be-fr` -> `sgn-BE-fr`
///
/// A tag without a hyphen is returned unchanged (`EN` stays `EN`), and so is
/// a tag with more than three subtags.
pub fn format_language_code(code: &str) -> String {
    if !code.contains('-') {
        return code.to_string();
    }

    let mut parts: Vec<String> = code.split('-').map(str::to_string).collect();

    match parts.as_mut_slice() {
        [language, second] => {
            *language = language.to_lowercase();
            *second = title_case_special(second).unwrap_or_else(|| second.to_uppercase());
        },
        [language, second, third] => {
            *language = language.to_lowercase();

            // Two characters: guess it's a region.
            if is_region_like(second) {
                *second = second.to_uppercase();
            }
            if language.as_str() != SIGN_LANGUAGE && is_region_like(third) {
                *third = third.to_uppercase();
            }

            if let Some(script) = title_case_special(second) {
                *second = script;
            }
            if let Some(script) = title_case_special(third) {
                *third = script;
            }
        },
        _ => {},
    }

    parts.join("-")
}

/// Extract the language subtag of a tag.
///
/// A tag without a hyphen is returned as-is, without any casing applied.
/// Otherwise the first subtag goes through [`format_language_code`], which
/// leaves a single subtag untouched too, so `EN-us` yields `EN`.
pub fn language_part(code: &str) -> String {
    match code.split_once('-') {
        Some((language, _)) => format_language_code(language),
        None => code.to_string(),
    }
}

/// Returns the title-cased form of `subtag` if it is a special-case script.
fn title_case_special(subtag: &str) -> Option<String> {
    let lower = subtag.to_lowercase();
    if !SPECIAL_CASE_SUBTAGS.contains(&lower.as_str()) {
        return None;
    }

    let mut chars = lower.chars();
    chars.next().map(|first| first.to_uppercase().chain(chars).collect())
}

fn is_region_like(subtag: &str) -> bool {
    subtag.chars().count() == 2
}
