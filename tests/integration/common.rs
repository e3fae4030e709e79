//! Common test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Locale-related variables cleared before every run.
const LOCALE_ENV: &[&str] = &[
    "LANGUAGE",
    "LC_ALL",
    "LC_MESSAGES",
    "LANG",
    "LOCALE_DETECTOR_LOCALES",
    "LOCALE_DETECTOR_DEFAULT_LOCALE",
    "LOCALE_DETECTOR_CONFIG",
    "RUST_LOG",
];

/// Create a command for the `locale-detect` binary, isolated from the host
/// locale environment and config files.
pub fn locale_detect_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("locale-detect"));
    for var in LOCALE_ENV {
        cmd.env_remove(var);
    }
    cmd.current_dir(workdir).env("XDG_CONFIG_HOME", workdir.join("xdg"));
    cmd
}

/// Create a temporary working directory for tests.
pub fn temp_workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write a config file with the given `i18n` block into `dir`.
pub fn write_config(dir: &Path, name: &str, locales: &[&str], default_locale: &str) -> PathBuf {
    let path = dir.join(name);
    let contents = format!(
        "i18n:\n  locales: [{}]\n  default_locale: {}\n",
        locales.join(", "),
        default_locale
    );
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}
