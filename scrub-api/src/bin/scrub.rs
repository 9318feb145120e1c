use anyhow::{Context, Result};
use clap::Parser;
use scrub_api::config::ScrubConfig;
use scrub_api::output::{write_outputs, OutputPaths};
use scrubber::scrub_files;
use shared_types::{DedupeMode, ScrubOptionsOverride};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "scrub", about = "Remove suppressed, invalid and duplicate emails from a client list")]
struct Cli {
    /// Client list to clean (CSV or TSV)
    #[arg(long, value_name = "PATH")]
    client: PathBuf,

    /// Suppression list (unsubscribes, bounces)
    #[arg(long, value_name = "PATH")]
    suppression: PathBuf,

    /// Email column header, used for both files instead of auto-detection
    #[arg(long)]
    email_column: Option<String>,

    #[arg(long, value_name = "BOOL")]
    dedupe: Option<bool>,

    /// `tag` keeps repeats in the removed file, `prune` drops them silently
    #[arg(long, value_name = "MODE")]
    dedupe_mode: Option<DedupeMode>,

    #[arg(long, value_name = "BOOL")]
    collapse_plus: Option<bool>,

    /// Gmail only
    #[arg(long, value_name = "BOOL")]
    collapse_dots: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    drop_invalid: Option<bool>,

    /// Directory for the result files; falls back to the config, then the temp dir
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Config file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ScrubOptionsOverride {
        ScrubOptionsOverride {
            email_column: self.email_column.clone(),
            dedupe: self.dedupe,
            dedupe_mode: self.dedupe_mode,
            collapse_plus: self.collapse_plus,
            collapse_dots: self.collapse_dots,
            drop_invalid: self.drop_invalid,
        }
    }
}

/// How a run ended, once configuration and I/O plumbing succeeded
#[derive(Debug)]
enum Outcome {
    Written { message: String, paths: OutputPaths },
    /// The input was rejected; holds the message shown to the user
    Failed(String),
}

impl Outcome {
    fn is_success(&self) -> bool {
        matches!(self, Outcome::Written { .. })
    }

    fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScrubConfig::load_from(path)
            .with_context(|| format!("Failed to load config at {:?}", path))?,
        None => ScrubConfig::load().context("Failed to load scrub config")?.0,
    };

    let outcome = run(&cli, &config)?;
    match &outcome {
        Outcome::Written { message, paths } => {
            println!("{}", message);
            println!();
            println!("Kept rows:    {}", paths.kept.display());
            println!("Removed rows: {}", paths.removed.display());
        }
        Outcome::Failed(message) => eprintln!("{}", message),
    }

    Ok(outcome.exit_code())
}

fn run(cli: &Cli, config: &ScrubConfig) -> Result<Outcome> {
    let options = config.defaults.merged(&cli.overrides());
    tracing::debug!("Effective options: {:?}", options);

    let report = match scrub_files(Some(&cli.client), Some(&cli.suppression), &options) {
        Ok(report) => report,
        Err(e) => {
            if !e.is_expected() {
                tracing::error!("Scrub failed: {e}");
            }
            return Ok(Outcome::Failed(e.user_message()));
        }
    };

    let out_dir = cli
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_directory());
    let paths = write_outputs(&report, &out_dir)
        .with_context(|| format!("Failed to write results to {:?}", out_dir))?;

    Ok(Outcome::Written {
        message: report.message(),
        paths,
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
