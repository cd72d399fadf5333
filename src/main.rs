use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use lyric_scope::Hyperparameters;

#[derive(Parser)]
#[command(
    name = "lyric-scope",
    about = "Score song lyrics for complexity, rhyme, flow, energy and structure",
    version
)]
struct Cli {
    /// Lyric files to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// TOML file overriding the default tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print flattened {type, score, confidence, details} rows instead of the full result
    #[arg(long)]
    rows: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Print the effective tunables as TOML and exit
    #[arg(long)]
    show_config: bool,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn report(text: &str, hp: &Hyperparameters, cli: &Cli) -> Result<()> {
    let result = lyric_scope::analyze_with(text, hp);
    if cli.rows {
        print_json(&result.score_rows(), cli.compact)
    } else {
        print_json(&result, cli.compact)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let hp = match &cli.config {
        Some(path) => {
            info!("Loading tunables from {:?}", path);
            Hyperparameters::load(path)?
        }
        None => Hyperparameters::default(),
    };

    if cli.show_config {
        print!("{}", toml::to_string(&hp)?);
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        report(&input, &hp, &cli)?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            info!("Analyzing {:?}", path);
            report(&text, &hp, &cli)?;
        }
    }
    Ok(())
}
