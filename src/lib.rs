//! Locale Detector Library
//!
//! Resolves a visitor's preferred locale to one of a finite set of supported
//! locales, using runtime-reported language preferences and a configured
//! fallback.
//!
//! ## Usage
//!
//! ```rust
//! use locale_detector::{Detector, LocaleConfig, StaticLanguageSource};
//!
//! let config = LocaleConfig::new(["en", "de-DE"], "en");
//! let detector = Detector::new(StaticLanguageSource::new(["de-CH"]), config);
//! assert_eq!(detector.detect().as_deref(), Some("de-DE"));
//! ```
//!
//! The `locale-detect` binary exposes the same logic on the command line:
//!
//! ```bash
//! locale-detect --locales en,de-DE --fallback en detect
//! locale-detect --locales en,de-DE match de-CH en-US --explain
//! locale-detect normalize zh-hant-tw sgn-be-fr
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod locale;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use detector::{Detector, EnvLanguageSource, LanguageSource, StaticLanguageSource};
pub use error::{Error, Result};
pub use locale::{best_match, format_language_code, language_part, LocaleConfig};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments, loading
/// configuration and dispatching to the command handler.
pub fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            // Exit successfully for help/version, otherwise return error
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        },
    };

    if cli_args.debug {
        init_logging();
    }

    let mut settings = match &cli_args.config {
        Some(path) => Config::load_with_file(path)?,
        None => Config::load()?,
    };

    // CLI flags take precedence over files and environment
    if let Some(locales) = &cli_args.locales {
        settings.set_locales(config::parse_locale_list(locales));
    }
    if let Some(fallback) = &cli_args.fallback {
        settings.set_default_locale(fallback.as_str());
    }

    let format = output::OutputFormat::parse(&cli_args.output)?;
    let ctx = commands::Context::new(settings.locale_config(), format);

    commands::execute(&ctx, &cli_args.command)
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("locale_detector=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
