//! Integration tests for the `locale-detect` CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use common::{locale_detect_cmd, temp_workdir, write_config};
use predicates::prelude::*;

/// Test that the CLI shows help.
#[test]
fn test_help() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("normalize"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path()).arg("unknown-command").assert().failure();
}

#[test]
fn test_match_language_part() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .args(["--locales", "en,de", "--fallback", "de", "match", "fr-FR", "en-US"])
        .assert()
        .success()
        .stdout("en\n");
}

#[test]
fn test_match_prefix_with_explain() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .args(["--locales", "de-DE", "--fallback", "en", "match", "de-CH", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale: de-DE"))
        .stdout(predicate::str::contains("rule: prefix"));
}

#[test]
fn test_match_fallback_json() {
    let dir = temp_workdir();
    let output = locale_detect_cmd(dir.path())
        .args(["--locales", "de-DE", "--fallback", "en", "-o", "json", "match", "fr"])
        .args(["--explain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["locale"], "en");
    assert_eq!(value["rule"], "fallback");
    assert_eq!(value["candidates"][0], "fr");
}

#[test]
fn test_match_unrestricted() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .args(["match", "fr-fr", "en"])
        .assert()
        .success()
        .stdout("fr-FR\n");
}

#[test]
fn test_match_unresolved_exit_code() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .args(["--locales", "de", "match", "fr"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No locale could be resolved"));
}

#[test]
fn test_detect_from_environment() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .env("LANG", "de_AT.UTF-8")
        .args(["--locales", "en,de-DE", "--fallback", "en", "detect"])
        .assert()
        .success()
        .stdout("de-DE\n");
}

#[test]
fn test_detect_language_list_takes_priority() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .env("LANGUAGE", "pt_BR:en")
        .env("LANG", "de_DE.UTF-8")
        .args(["--locales", "en,de,pt-BR", "detect"])
        .assert()
        .success()
        .stdout("pt-BR\n");
}

#[test]
fn test_detect_posix_locale_uses_fallback() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .env("LANG", "C")
        .args(["--locales", "en,de", "--fallback", "en", "detect"])
        .assert()
        .success()
        .stdout("en\n");
}

#[test]
fn test_normalize() {
    let dir = temp_workdir();
    locale_detect_cmd(dir.path())
        .args(["normalize", "zh-hant-tw", "sgn-be-fr", "EN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zh-hant-tw -> zh-Hant-TW (language: zh)"))
        .stdout(predicate::str::contains("sgn-be-fr -> sgn-BE-fr (language: sgn)"))
        .stdout(predicate::str::contains("EN -> EN (language: EN)"));
}

#[cfg(test)]
mod config_tests {
    use predicates::prelude::*;

    use super::{locale_detect_cmd, temp_workdir, write_config};

    #[test]
    fn test_project_config_file() {
        let dir = temp_workdir();
        write_config(dir.path(), ".locale-detector.yaml", &["en", "de-DE"], "en");

        locale_detect_cmd(dir.path())
            .args(["match", "de-CH"])
            .assert()
            .success()
            .stdout("de-DE\n");
    }

    #[test]
    fn test_user_config_file() {
        let dir = temp_workdir();
        let user_dir = dir.path().join("xdg").join("locale-detector");
        std::fs::create_dir_all(&user_dir).unwrap();
        write_config(&user_dir, "config.yaml", &["fr"], "fr");

        locale_detect_cmd(dir.path()).args(["match", "ja"]).assert().success().stdout("fr\n");
    }

    #[test]
    fn test_explicit_config_file_and_flag_precedence() {
        let dir = temp_workdir();
        let path = write_config(dir.path(), "custom.yaml", &["en", "es"], "es");

        locale_detect_cmd(dir.path())
            .arg("--config")
            .arg(&path)
            .args(["match", "ja"])
            .assert()
            .success()
            .stdout("es\n");

        locale_detect_cmd(dir.path())
            .arg("--config")
            .arg(&path)
            .args(["--fallback", "en", "match", "ja"])
            .assert()
            .success()
            .stdout("en\n");
    }

    #[test]
    fn test_env_overrides_config_file() {
        let dir = temp_workdir();
        write_config(dir.path(), ".locale-detector.yaml", &["en"], "en");

        locale_detect_cmd(dir.path())
            .env("LOCALE_DETECTOR_LOCALES", "it,en")
            .env("LOCALE_DETECTOR_DEFAULT_LOCALE", "it")
            .args(["-o", "yaml", "config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("- it"))
            .stdout(predicate::str::contains("fallback_lng: it"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = temp_workdir();
        std::fs::write(dir.path().join(".locale-detector.yaml"), "i18n: 42\n").unwrap();

        locale_detect_cmd(dir.path())
            .args(["match", "en"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Configuration error"));
    }
}
