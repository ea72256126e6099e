use clap::Parser;
use hookset::{Cli, Output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose > 0, cli.quiet);

    match cli.run(&output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Was not able to resolve git hooks: {err:#}"));
            ExitCode::FAILURE
        }
    }
}
