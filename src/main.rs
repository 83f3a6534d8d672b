mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use log::debug;

use std::process::ExitCode;

use fqgrep::*;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // the reader of our output stopped early, like `| head`
        Err(e) if e.is_broken_pipe() => {
            debug!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let config = args.config()?;
    let pattern = Pattern::new(&args.pattern)?;
    // the only place a mismatch path becomes a sink, created before any reads are
    // processed so an unwritable path fails early
    let mismatches = args.mismatches.as_deref().map(Sink::create).transpose()?;

    debug!("Running with {:?}", config);

    grep(
        &config,
        &pattern,
        args.inputs(),
        Sink::stdout(),
        mismatches,
    )?;

    Ok(())
}
