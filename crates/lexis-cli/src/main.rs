use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexis_core::{Lexicon, ResolverConfig};

mod output;
mod repl;

use output::ColorMode;

/// File looked up when `--data` is not given.
const DEFAULT_DATA_FILE: &str = "datadictionary.json";

/// Lexis - Look up word definitions, with suggestions for misspelled words
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Words to look up. Starts an interactive prompt when none are given
    words: Vec<String>,

    /// Path to the dictionary file (JSON object, or TOML table for .toml)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Minimum similarity (0.0 to 1.0) for suggesting a close match
    #[arg(short, long, default_value_t = lexis_core::DEFAULT_CUTOFF)]
    cutoff: f64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ResolverConfig::with_cutoff(args.cutoff)?;

    let data_path = match args.data {
        Some(path) => path,
        None => find_data_file(&default_data_locations()).with_context(|| {
            format!(
                "No dictionary found. Pass --data <PATH> or place {} in the current directory.",
                DEFAULT_DATA_FILE
            )
        })?,
    };
    let lexicon = Lexicon::from_file(&data_path)
        .with_context(|| format!("Failed to load dictionary from {}", data_path.display()))?;
    tracing::info!(path = %data_path.display(), words = lexicon.len(), "dictionary loaded");

    let stdout = io::stdout();
    let color = ColorMode(!args.no_color && stdout.is_terminal());
    let mut writer = stdout.lock();

    if args.words.is_empty() {
        repl::run(io::stdin().lock(), &mut writer, &lexicon, &config, color)?;
    } else {
        for word in &args.words {
            let resolution = lexis_core::resolve(word, &lexicon, &config);
            output::print_resolution(&mut writer, &resolution, color)?;
        }
    }

    Ok(())
}

/// Route `tracing` output to stderr so stdout only carries responses.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Places searched for the dictionary, in order: the working directory,
/// then the per-user data directory.
fn default_data_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_DATA_FILE)];
    if let Some(data_dir) = dirs::data_dir() {
        locations.push(data_dir.join("lexis").join(DEFAULT_DATA_FILE));
    }
    locations
}

fn find_data_file(locations: &[PathBuf]) -> Option<PathBuf> {
    locations.iter().find(|p| p.is_file()).cloned()
}
