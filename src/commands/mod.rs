//! Command implementations for the CLI.

use serde::Serialize;

use crate::cli::Commands;
use crate::detector::{Detector, LanguageSource, StaticLanguageSource};
use crate::error::{Error, Result};
use crate::locale::{format_language_code, language_part, LocaleConfig, MatchKind};
use crate::output::{self, Displayable, OutputFormat};

/// Shared state for command execution.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective matching configuration.
    pub config: LocaleConfig,

    /// Output format.
    pub format: OutputFormat,
}

impl Context {
    /// Create a new context.
    pub fn new(config: LocaleConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }
}

/// Result of a detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    /// The resolved locale.
    pub locale: String,

    /// The rule that picked the locale, when explaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<MatchKind>,

    /// The candidates that were considered, when explaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Option<String>>>,
}

impl Displayable for DetectionReport {
    fn lines(&self) -> Vec<String> {
        if self.rule.is_none() && self.candidates.is_none() {
            return vec![self.locale.clone()];
        }

        let mut lines = vec![format!("locale: {}", self.locale)];
        if let Some(rule) = self.rule {
            lines.push(format!("rule: {rule}"));
        }
        if let Some(candidates) = &self.candidates {
            let list: Vec<&str> =
                candidates.iter().map(|c| c.as_deref().unwrap_or("(unset)")).collect();
            lines.push(format!("candidates: {}", list.join(", ")));
        }
        lines
    }
}

/// Normalized form of a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTag {
    /// The tag as given.
    pub input: String,

    /// The tag with canonical casing.
    pub normalized: String,

    /// The language subtag.
    pub language: String,
}

/// Normalized forms of several tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizeReport(pub Vec<NormalizedTag>);

impl Displayable for NormalizeReport {
    fn lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|tag| format!("{} -> {} (language: {})", tag.input, tag.normalized, tag.language))
            .collect()
    }
}

impl Displayable for LocaleConfig {
    fn lines(&self) -> Vec<String> {
        let locales = match &self.supported_languages {
            Some(locales) if !locales.is_empty() => locales.join(", "),
            Some(_) => "(any, configured empty)".to_string(),
            None => "(any)".to_string(),
        };
        let fallback = self.fallback_lng.as_deref().unwrap_or("(none)");
        vec![format!("locales: {locales}"), format!("fallback: {fallback}")]
    }
}

/// Execute a CLI command.
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Detect { explain } => {
            let detector = Detector::from_env(ctx.config.clone());
            let report = detect(&detector, *explain)?;
            output::print(&report, ctx.format)
        },
        Commands::Match { candidates, explain } => {
            let source = StaticLanguageSource::new(candidates.iter().cloned());
            let detector = Detector::new(source, ctx.config.clone());
            let report = detect(&detector, *explain)?;
            output::print(&report, ctx.format)
        },
        Commands::Normalize { tags } => output::print(&normalize(tags), ctx.format),
        Commands::Config => output::print(&ctx.config, ctx.format),
    }
}

/// Run `detector` and build a report.
///
/// Fails with [`Error::Unresolved`] when no locale could be resolved.
pub fn detect<S: LanguageSource>(
    detector: &Detector<S>,
    explain: bool,
) -> Result<DetectionReport> {
    let candidates = detector.source().languages();
    let resolution =
        crate::locale::resolve(&candidates, detector.config()).ok_or(Error::Unresolved)?;

    Ok(DetectionReport {
        locale: resolution.locale,
        rule: explain.then_some(resolution.kind),
        candidates: explain.then_some(candidates),
    })
}

/// Normalize each tag.
pub fn normalize(tags: &[String]) -> NormalizeReport {
    NormalizeReport(
        tags.iter()
            .map(|tag| NormalizedTag {
                input: tag.clone(),
                normalized: format_language_code(tag),
                language: language_part(tag),
            })
            .collect(),
    )
}
