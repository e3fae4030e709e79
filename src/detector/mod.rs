//! Locale detection bound to a live source of language preferences.
//!
//! A [`Detector`] owns a [`LanguageSource`] and a [`LocaleConfig`] captured at
//! construction. Every call to [`Detector::detect`] reads the source afresh
//! and resolves it; nothing is cached.
//!
//! ```rust
//! use locale_detector::detector::{Detector, StaticLanguageSource};
//! use locale_detector::locale::LocaleConfig;
//!
//! let source = StaticLanguageSource::new(["fr-FR", "en-US"]);
//! let detector = Detector::new(source, LocaleConfig::new(["en", "de"], "de"));
//! assert_eq!(detector.detect().as_deref(), Some("en"));
//! ```

mod source;

pub use source::{
    posix_to_tag, EnvLanguageSource, LanguageSource, StaticLanguageSource, LOCALE_VARS,
};

use crate::locale::{self, LocaleConfig, Resolution};

/// Resolves the preferred locale from a [`LanguageSource`].
#[derive(Debug, Clone)]
pub struct Detector<S> {
    source: S,
    config: LocaleConfig,
}

impl<S: LanguageSource> Detector<S> {
    /// Create a detector over `source` with a fixed configuration.
    pub fn new(source: S, config: LocaleConfig) -> Self {
        Self { source, config }
    }

    /// The configuration this detector resolves against.
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    /// The underlying language source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Detect the preferred locale.
    ///
    /// Returns `None` only if the source reports no candidates at all, or if
    /// nothing matched and no fallback is configured.
    pub fn detect(&self) -> Option<String> {
        self.detect_with_details().map(|resolution| resolution.locale)
    }

    /// Detect the preferred locale and report how it was chosen.
    pub fn detect_with_details(&self) -> Option<Resolution> {
        let candidates = self.source.languages();
        tracing::debug!(candidates = ?candidates, "Detecting locale");
        locale::resolve(&candidates, &self.config)
    }
}

impl Detector<EnvLanguageSource> {
    /// Create a detector reading the process locale environment.
    pub fn from_env(config: LocaleConfig) -> Self {
        Self::new(EnvLanguageSource::new(), config)
    }
}
