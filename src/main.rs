//! tix - plain-text todo lists

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tix_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
