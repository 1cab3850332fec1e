use std::process::ExitCode;

use clap::Parser;

mod app;
mod audio;
mod browser;
mod cli;
mod config;
mod input;
mod library;
mod runtime;
mod ui;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    match runtime::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cubeplayer: {e}");
            ExitCode::FAILURE
        }
    }
}
