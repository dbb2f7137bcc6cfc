//! Docsim - compare two text files
//!
//! # Usage
//!
//! ```bash
//! # Text report on stdout
//! docsim doc1.txt doc2.txt
//!
//! # JSON report written to a file
//! DOCSIM_FORMAT=json docsim doc1.txt doc2.txt report.json
//!
//! # Custom synonym file and stricter token matching
//! DOCSIM_SYNONYMS=conf/synonyms.txt DOCSIM_THRESHOLD=0.85 docsim a.txt b.txt
//! ```

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use docsim_core::config::DEFAULT_SYNONYMS_PATH;
use docsim_core::{DocsimError, EngineConfig, ReportFormat, SimilarityEngine, SimilarityReport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment variable for the synonym file path
const ENV_SYNONYMS: &str = "DOCSIM_SYNONYMS";

/// Environment variable for the report format (`text` or `json`)
const ENV_FORMAT: &str = "DOCSIM_FORMAT";

/// Environment variable for the token match threshold
const ENV_THRESHOLD: &str = "DOCSIM_THRESHOLD";

const USAGE: &str = "usage: docsim <text-file-1> <text-file-2> [output-file]";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!(error = %e, "docsim failed");
        eprintln!("docsim: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Initialize the tracing subscriber on stderr; stdout carries the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("docsim_core=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

/// Parsed command line.
struct Args {
    text_1: PathBuf,
    text_2: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args() -> docsim_core::Result<Args> {
    let mut args = env::args_os().skip(1).map(PathBuf::from);
    let (Some(text_1), Some(text_2)) = (args.next(), args.next()) else {
        return Err(DocsimError::InvalidInput(USAGE.to_string()));
    };
    let output = args.next();
    if args.next().is_some() {
        return Err(DocsimError::InvalidInput(USAGE.to_string()));
    }
    Ok(Args { text_1, text_2, output })
}

/// Build engine configuration from environment.
fn build_config() -> docsim_core::Result<EngineConfig> {
    let synonyms_path = env::var_os(ENV_SYNONYMS)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SYNONYMS_PATH));

    let mut config = EngineConfig {
        synonyms_path: Some(synonyms_path),
        ..Default::default()
    };

    if let Ok(raw) = env::var(ENV_THRESHOLD) {
        config.match_threshold = raw.trim().parse().map_err(|_| {
            DocsimError::InvalidInput(format!("{ENV_THRESHOLD} is not a number: '{raw}'"))
        })?;
    }

    Ok(config)
}

fn report_format() -> docsim_core::Result<ReportFormat> {
    match env::var(ENV_FORMAT) {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(ReportFormat::default()),
    }
}

/// Read a document; empty or whitespace-only documents are refused.
///
/// Bytes that are not UTF-8 cannot be tokenized and fail the whole document.
fn read_document(path: &Path) -> docsim_core::Result<String> {
    let text = String::from_utf8(fs::read(path)?).map_err(|e| {
        DocsimError::Tokenization(format!("{}: {e}", path.display()))
    })?;
    if text.trim().is_empty() {
        return Err(DocsimError::InvalidInput(format!(
            "{} is empty; both documents must contain text",
            path.display()
        )));
    }
    Ok(text)
}

fn run() -> docsim_core::Result<()> {
    let args = parse_args()?;
    let format = report_format()?;
    let engine = SimilarityEngine::new(build_config()?)?;

    let text_1 = read_document(&args.text_1)?;
    let text_2 = read_document(&args.text_2)?;

    let started = Instant::now();
    let report = SimilarityReport::compute(&engine, &text_1, &text_2);

    info!(
        cosine = report.cosine,
        hybrid = report.hybrid,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Similarity computed"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            report.write_to(BufWriter::new(file), format)?;
            info!(path = %path.display(), %format, "Report written");
        }
        None => report.write_to(io::stdout().lock(), format)?,
    }

    Ok(())
}
