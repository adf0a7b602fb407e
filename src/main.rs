mod calc;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Env, Target};
use log::info;

use calc::error::AppError;

/// Eight-slot RPN calculator for the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Treat empty slots as zero operands and show them as 0
    #[arg(long)]
    legacy: bool,

    /// Show operand depth and raw slot contents
    #[arg(long)]
    debug: bool,

    /// Don't beep on errors
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (the terminal belongs to the calculator)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    init_logging(args.log_file.as_deref())?;
    info!("starting with {:?}", args);

    let options = calc::Options {
        legacy: args.legacy,
        debug: args.debug,
    };
    let beeper = if args.mute {
        None
    } else {
        calc::beeper::Beeper::new()
    };

    let screen = calc::display::Terminal::new()?;
    let calculator = calc::Calculator::new(screen, beeper, options);
    calculator.run(calc::keypad::Keypad::new())?;
    Ok(())
}

// Logs only go to a file by default; stderr shares the calculator's terminal
fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
