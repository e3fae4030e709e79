//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve a preferred locale against a set of supported locales
#[derive(Parser, Debug)]
#[command(name = "locale-detect")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Config file to use instead of the user and project config files
    #[arg(long, global = true, env = "LOCALE_DETECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Supported locales, comma-separated (empty for unrestricted)
    #[arg(long, global = true, value_name = "LOCALES")]
    pub locales: Option<String>,

    /// Fallback locale when nothing matches
    #[arg(long, global = true, value_name = "LOCALE")]
    pub fallback: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_parser = ["table", "json", "yaml"])]
    pub output: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the locale from the environment (LANGUAGE, LC_ALL, LC_MESSAGES, LANG)
    Detect {
        /// Show the candidates and the rule that picked the locale
        #[arg(long)]
        explain: bool,
    },

    /// Resolve an explicit list of candidate tags, most preferred first
    Match {
        /// Candidate language tags (e.g., de-CH en-US)
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Show the rule that picked the locale
        #[arg(long)]
        explain: bool,
    },

    /// Normalize the casing of language tags
    Normalize {
        /// Language tags (e.g., zh-hant-tw)
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Show the effective locale configuration
    Config,
}
