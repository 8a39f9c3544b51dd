use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod command;

#[tracing::instrument]
fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match command::run(&args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        }
    }
}
