//! # Hrdesk CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `hrdesk::api` inward is UI agnostic. The CLI layer owns
//! argument parsing, logging setup, rendering of `CmdResult` messages and exit
//! codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
