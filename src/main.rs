//! Wiring & DI. Entry point: load config, read inputs, run the validation service, print the report.
//! No business logic here; rules live in the use cases.

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use dotenv::dotenv;
use minutes_check::adapters::input::{FsSource, load_participants};
use minutes_check::adapters::render::{JsonRenderer, TextRenderer};
use minutes_check::domain::{DomainError, Language};
use minutes_check::ports::{ReportRenderer, SourcePort};
use minutes_check::shared::config::AppConfig;
use minutes_check::usecases::{
    CoverageThresholds, ValidationRequest, ValidationService, ValidationSettings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when no report could be produced.
const EXIT_FATAL: u8 = 2;

/// Validate meeting-notes markdown against the minutes template.
#[derive(Parser, Debug)]
#[command(name = "minutes-check")]
#[command(about = "Validate meeting notes: structure, roster cross-reference, transcript coverage")]
#[command(version)]
struct Args {
    /// Meeting-notes markdown file
    notes: PathBuf,

    /// Raw transcript to check fact coverage against
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Glossary markdown (person names and terms with known misspellings)
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Authoritative participant list: a file (one name per line) or `A,B,C`
    #[arg(short, long)]
    participants: Option<String>,

    /// Report language (en, zh_TW); inferred from the notes when omitted
    #[arg(short, long)]
    lang: Option<Language>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Fixed RFC 3339 report timestamp, for reproducible output
    #[arg(long)]
    timestamp: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("minutes-check: config error: {}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    // stdout carries only the report.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_level_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!(cwd = %cwd.display(), "no .env found"),
    }

    match run(args, &cfg) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("minutes-check: {:#}", e);
            let code = e
                .downcast_ref::<DomainError>()
                .map(DomainError::exit_code)
                .unwrap_or(EXIT_FATAL);
            ExitCode::from(code)
        }
    }
}

/// Reads every input in full, validates, prints. Returns the report's exit status.
fn run(args: Args, cfg: &AppConfig) -> anyhow::Result<u8> {
    let settings = ValidationSettings {
        thresholds: CoverageThresholds {
            pass: cfg.pass_threshold_or_default(),
            warn: cfg.warn_threshold_or_default(),
            overlap: cfg.overlap_threshold_or_default(),
        },
        cjk_ratio: cfg.cjk_ratio_or_default(),
    };
    settings.validate().context("invalid configuration")?;

    let language = match args.lang {
        Some(lang) => Some(lang),
        None => cfg.language().context("invalid configuration")?,
    };
    let generated_at = report_timestamp(args.timestamp.as_deref())?;

    // --- Inputs (all read before processing starts) ---
    let source = FsSource::new();
    let notes = source
        .read_text(&args.notes)
        .context("reading meeting notes")?;
    let transcript = args
        .transcript
        .as_deref()
        .map(|p| source.read_text(p))
        .transpose()
        .context("reading transcript")?;
    let glossary = args
        .glossary
        .as_deref()
        .map(|p| source.read_text(p))
        .transpose()
        .context("reading glossary")?;
    let participants = args
        .participants
        .as_deref()
        .map(|p| load_participants(p, &source))
        .transpose()
        .context("reading participant list")?;

    let request = ValidationRequest {
        file: args.notes.display().to_string(),
        notes,
        transcript,
        glossary,
        participants,
        language,
        generated_at,
    };

    // --- Validate ---
    let report = ValidationService::new(settings).run(&request)?;

    // --- Render ---
    let renderer: Box<dyn ReportRenderer> = if args.json || cfg.json_or_default() {
        Box::new(JsonRenderer::new())
    } else {
        Box::new(TextRenderer::new(report.language))
    };
    print!("{}", renderer.render(&report)?);

    info!(exit_code = report.exit_code(), "done");
    Ok(report.exit_code())
}

/// Injected timestamp (normalized) or the current UTC time.
fn report_timestamp(injected: Option<&str>) -> Result<String, DomainError> {
    match injected {
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
            .map_err(|e| DomainError::input("--timestamp", format!("not RFC 3339: {}", e))),
        None => Ok(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    }
}
