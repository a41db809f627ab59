use clap::Parser;
use dirsort::cli::{Args, run_cli};
use dirsort::logging::{flush_logger, init_logger, level_for_verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let level = level_for_verbosity(args.verbose);

    if let Err(e) = init_logger(level, Some(&args.log_file)) {
        eprintln!("Warning: {}. Logging to the console only.", e);
        if let Err(e) = init_logger(level, None) {
            eprintln!("Warning: {}", e);
        }
    }

    let code = match run_cli(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    };

    flush_logger();
    code
}
