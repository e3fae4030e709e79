//! Output formatting for the CLI.
//!
//! Supports multiple output formats:
//! - `table` - Human-readable `key: value` lines (default)
//! - `json` - Structured JSON
//! - `yaml` - YAML format

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Unknown output format '{s}'. Use: table, json, yaml"
            ))),
        }
    }
}

/// Trait for values with a human-readable rendering.
pub trait Displayable {
    /// Lines printed in table mode.
    fn lines(&self) -> Vec<String>;
}

/// Write `value` to stdout in the given format.
pub fn print<T: Serialize + Displayable>(value: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(&mut out, value, format)
}

/// Write `value` to `out` in the given format.
pub fn write<W, T>(out: &mut W, value: &T, format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Serialize + Displayable,
{
    match format {
        OutputFormat::Table => {
            for line in value.lines() {
                writeln!(out, "{line}")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        },
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(value)?)?;
        },
    }
    Ok(())
}
