use clap::Parser;
use colored::Colorize;
use convit::{Outcome, DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to commit (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Base URL of the local Ollama service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    host: String,

    /// Model used to generate commit messages
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Log level
    #[arg(global = true, short, long, default_value = "error")]
    log: LevelFilter,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive(cli.log.into());

    fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .pretty()
        .init();

    match convit::commit_interactively(&cli.repo, &cli.host, &cli.model) {
        Ok(Outcome::Committed(_) | Outcome::Aborted) => {}
        Err(err) => {
            eprintln!("🚫 {}", err.to_string().red());
            std::process::exit(1);
        }
    }
}
