//! Language tag normalization and locale matching.
//!
//! # Usage
//!
//! ```rust
//! use locale_detector::locale::{best_match, format_language_code, LocaleConfig};
//!
//! assert_eq!(format_language_code("zh-hant-tw"), "zh-Hant-TW");
//!
//! let config = LocaleConfig::new(["en", "de-DE"], "en");
//! let candidates = [Some("de-CH"), None];
//! assert_eq!(best_match(&candidates, &config).as_deref(), Some("de-DE"));
//! ```

mod matcher;
mod normalize;

pub use matcher::{best_match, resolve, LocaleConfig, MatchKind, Resolution};
pub use normalize::{format_language_code, language_part, SIGN_LANGUAGE, SPECIAL_CASE_SUBTAGS};
