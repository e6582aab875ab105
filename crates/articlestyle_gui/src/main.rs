//! Standalone GUI binary. The root `articlestyle` binary adds the CLI flags.

use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // `run` installs the tracing subscriber before anything can fail.
    match articlestyle_gui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "articlestyle-gui exited with an error");
            ExitCode::FAILURE
        }
    }
}
