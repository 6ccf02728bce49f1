use std::process::ExitCode;

use clap::Parser;

use ucsrename::cli::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit with status 2 from inside `parse`.
    let cli = Cli::parse();

    match ucsrename::app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
