use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use number_input_cli::{OutputStyle, Session, WidgetConfig, logging, parse_script};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Replays focus/change/blur events against a comma-grouped number field.
///
/// Mounts one field, applies every event from the script in order, and prints
/// what the field shows after each one along with the callbacks it fired.
#[derive(Debug, Parser)]
#[command(name = "number-input")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Event script to replay. Reads stdin when omitted.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// TOML file with the initial `value`, `id` and `class`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial external value (overrides the config file).
    #[arg(long, allow_negative_numbers = true)]
    value: Option<i64>,

    /// Id forwarded to every callback (overrides the config file).
    #[arg(long)]
    id: Option<String>,

    /// CSS class passed through to markup output (overrides the config file).
    #[arg(long)]
    class: Option<String>,

    /// How the rendered field is printed.
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Plain)]
    output: OutputStyle,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    }
    .with_overrides(cli.value, cli.id.clone(), cli.class.clone());
    debug!("widget config:\n{}", config);

    let events = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            parse_script(BufReader::new(file))
                .with_context(|| format!("Failed to parse script: {}", path.display()))?
        }
        None => parse_script(io::stdin().lock()).context("Failed to parse script from stdin")?,
    };
    info!("replaying {} events", events.len());

    let mut session = Session::new(config, cli.output);
    session
        .write_transcript(&events, &mut io::stdout().lock())
        .context("Failed to write output")?;

    Ok(())
}
