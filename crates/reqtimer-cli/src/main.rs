use reqtimer_core::logging;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; an unwritable state dir must not stop the run.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("reqtimer error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
