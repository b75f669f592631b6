//! Daygen - puzzle stub scaffolder
//!
//! A command line tool that writes stub solution files (day01.rs through
//! day25.rs) into a target directory, each holding the same part1/part2
//! skeleton with an embedded self-check.

use clap::Parser;

mod cli;
mod commands;
mod emitter;
mod error;
mod hash;
mod progress;
mod scan;
mod template;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.dir, args),
        Commands::Status(args) => commands::status::run(cli.dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
