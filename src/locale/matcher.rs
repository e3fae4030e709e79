//! Best-match resolution of candidate language tags against supported locales.

use serde::{Deserialize, Serialize};

use super::normalize::{format_language_code, language_part};

/// Locale matching configuration.
///
/// `supported_languages` distinguishes "not configured" (`None`) from
/// "configured but empty" (`Some(vec![])`). Both accept any candidate, but
/// only a configured list enables the language-part fallback pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Supported locales in preference order.
    #[serde(default)]
    pub supported_languages: Option<Vec<String>>,

    /// Locale returned when no candidate matches.
    #[serde(default)]
    pub fallback_lng: Option<String>,
}

impl LocaleConfig {
    /// Create a configuration restricted to `supported` with a fallback.
    pub fn new<I, S>(supported: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_languages: Some(supported.into_iter().map(Into::into).collect()),
            fallback_lng: Some(fallback.into()),
        }
    }

    /// Returns true if every code is accepted.
    pub fn is_unrestricted(&self) -> bool {
        self.supported_languages.as_ref().is_none_or(Vec::is_empty)
    }

    /// Check whether `code` is accepted by this configuration.
    pub fn is_supported(&self, code: &str) -> bool {
        match &self.supported_languages {
            Some(supported) if !supported.is_empty() => supported.iter().any(|s| s == code),
            _ => true,
        }
    }
}

/// How a locale was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// A normalized candidate appears verbatim in the supported list.
    Exact,
    /// No supported list restricts the choice; the first candidate won.
    Unrestricted,
    /// The candidate's language subtag is itself supported.
    LanguagePart,
    /// A supported locale starts with the candidate's language subtag.
    Prefix,
    /// Nothing matched; the configured fallback was used.
    Fallback,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exact => "exact",
            Self::Unrestricted => "unrestricted",
            Self::LanguagePart => "language-part",
            Self::Prefix => "prefix",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// A resolved locale together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolved locale.
    pub locale: String,

    /// The rule that selected it.
    pub kind: MatchKind,
}

impl Resolution {
    fn new(locale: String, kind: MatchKind) -> Self {
        Self { locale, kind }
    }
}

/// Pick the best locale for `candidates` (most preferred first).
///
/// Returns `None` if `candidates` is empty, or if nothing matched and no
/// fallback is configured. `None` entries are skipped.
pub fn best_match<S: AsRef<str>>(
    candidates: &[Option<S>],
    config: &LocaleConfig,
) -> Option<String> {
    resolve(candidates, config).map(|resolution| resolution.locale)
}

/// Like [`best_match`], but also reports which rule chose the locale.
///
/// Resolution runs in up to three steps, each scanning the whole candidate
/// list in order and stopping at the first winner:
///
/// 1. The first normalized candidate that is supported (or any candidate if
///    the configuration is unrestricted).
/// 2. Only when a supported list is configured: the first candidate whose
///    language subtag is supported, or for which some supported locale starts
///    with that subtag (`de-CH` -> `de`, then `de-CH` -> `de-DE`).
/// 3. The fallback locale.
pub fn resolve<S: AsRef<str>>(
    candidates: &[Option<S>],
    config: &LocaleConfig,
) -> Option<Resolution> {
    if candidates.is_empty() {
        return None;
    }

    let codes =
        || candidates.iter().filter_map(|code| code.as_ref().map(<S as AsRef<str>>::as_ref));

    let exact_kind =
        if config.is_unrestricted() { MatchKind::Unrestricted } else { MatchKind::Exact };
    let exact = codes()
        .map(format_language_code)
        .find(|cleaned| !cleaned.is_empty() && config.is_supported(cleaned));
    if let Some(locale) = exact {
        tracing::debug!(locale = %locale, kind = %exact_kind, "Matched candidate");
        return Some(Resolution::new(locale, exact_kind));
    }

    if let Some(supported) = &config.supported_languages {
        let similar = codes().find_map(|code| {
            let language = language_part(code);
            if config.is_supported(&language) {
                // An empty subtag is accepted but never wins
                return (!language.is_empty())
                    .then(|| Resolution::new(language, MatchKind::LanguagePart));
            }

            supported
                .iter()
                .find(|supported_lng| {
                    !supported_lng.is_empty() && supported_lng.starts_with(language.as_str())
                })
                .map(|supported_lng| Resolution::new(supported_lng.clone(), MatchKind::Prefix))
        });

        if let Some(resolution) = similar {
            tracing::debug!(
                locale = %resolution.locale,
                kind = %resolution.kind,
                "Matched similar locale"
            );
            return Some(resolution);
        }
    }

    tracing::debug!(fallback = ?config.fallback_lng, "No candidate matched, using fallback");
    config.fallback_lng.clone().map(|locale| Resolution::new(locale, MatchKind::Fallback))
}
