//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Daygen - puzzle stub scaffolder
///
/// Generate stub solution files for a 25-day puzzle series.
#[derive(Parser, Debug)]
#[command(
    name = "daygen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold generator for 25-day puzzle solution stubs",
    long_about = "Daygen writes stub solution files (day01.rs through day25.rs) into a \
                  target directory, each holding the same part1/part2 skeleton with an \
                  embedded self-check, ready to be filled in one day at a time.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  daygen generate\n    \
                  daygen generate --dir solutions\n    \
                  daygen status\n    \
                  daygen status --detailed"
)]
pub struct Cli {
    /// Target directory for generated stubs (defaults to ./src)
    #[arg(long, short = 'd', global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write stub files for all 25 days
    Generate(GenerateArgs),

    /// Report which day stubs exist and whether they are still untouched
    Status(StatusArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate stubs into ./src:\n    daygen generate\n\n\
                  Generate stubs into another directory:\n    daygen generate --dir solutions\n\n\
                  Generate without a progress bar:\n    daygen generate --quiet")]
pub struct GenerateArgs {
    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize stub states:\n    daygen status\n\n\
                  Show every day individually:\n    daygen status --detailed")]
pub struct StatusArgs {
    /// Show per-day output instead of a summary
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    daygen completions --shell bash > ~/.bash_completion.d/daygen\n\n\
                  Generate zsh completions:\n    daygen completions --shell zsh > ~/.zfunc/_daygen\n\n\
                  Generate fish completions:\n    daygen completions --shell fish > ~/.config/fish/completions/daygen.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
