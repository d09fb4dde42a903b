use std::process::ExitCode;

use clap::Parser;
use tscat::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    tscat::logging::init(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = tscat::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match tscat::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
