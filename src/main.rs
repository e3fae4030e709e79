//! Locale Detector CLI
//!
//! Command-line front end for resolving preferred locales.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match locale_detector::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (clap already printed it)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {e}");
            }

            let code = e.exit_code();
            ExitCode::from(code as u8)
        },
    }
}
