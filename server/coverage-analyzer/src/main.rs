//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a FunctionDescription. Every non-blank input line
//! produces exactly one output line, in input order:
//! - The record for the selected `--mode` (a ComprehensiveResult by default)
//! - An ErrorOutput (when the line is malformed or fails validation)
//!
//! Logs go to stderr; stdout carries only the JSON stream.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coverage_analyzer::types::ErrorOutput;
use coverage_analyzer::validate;
use coverage_analyzer::{Analyzer, AnalyzerError, Config};

#[derive(Parser, Debug)]
#[command(name = "coverage-analyzer", version, about = "Explain function complexity, test quality and change risk")]
struct Cli {
  /// Which record to emit per input line
  #[arg(long, value_enum, default_value_t = Mode::Compose)]
  mode: Mode,

  /// TOML file overriding the default thresholds
  #[arg(long)]
  config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
  Compose,
  Classify,
  Philosophy,
  Risk,
}

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => match Config::from_file(path) {
      Ok(c) => c,
      Err(e) => {
        eprintln!("coverage-analyzer: {}", e);
        return ExitCode::FAILURE;
      }
    },
    None => Config::default(),
  };
  let analyzer = Analyzer::new(config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  if let Err(e) = run(&analyzer, cli.mode, stdin.lock(), &mut out, BATCH_SIZE) {
    eprintln!("coverage-analyzer: read error: {}", e);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}

/// Lines evaluated in parallel before their output is written and flushed.
const BATCH_SIZE: usize = 1024;

/// Stream `input` to `out` in batches. Only read errors are returned.
fn run<R: BufRead, W: Write>(
  analyzer: &Analyzer,
  mode: Mode,
  input: R,
  out: &mut W,
  batch_size: usize,
) -> io::Result<()> {
  let mut batch = Vec::with_capacity(batch_size);
  for line in input.lines() {
    let line = line?;
    // Skip blank lines.
    if line.trim().is_empty() {
      continue;
    }
    batch.push(line);
    if batch.len() >= batch_size {
      write_batch(analyzer, mode, &batch, out);
      batch.clear();
    }
  }
  write_batch(analyzer, mode, &batch, out);
  Ok(())
}

fn write_batch<W: Write>(analyzer: &Analyzer, mode: Mode, batch: &[String], out: &mut W) {
  if batch.is_empty() {
    return;
  }
  tracing::debug!(lines = batch.len(), mode = ?mode, "evaluating batch");

  // collect keeps input order
  let rendered: Vec<String> = batch
    .par_iter()
    .map(|line| render_line(analyzer, mode, line.trim()))
    .collect();
  for line in rendered {
    let _ = writeln!(out, "{}", line);
  }
  let _ = out.flush();
}

fn render_line(analyzer: &Analyzer, mode: Mode, line: &str) -> String {
  let result = validate::parse(line).and_then(|input| match mode {
    Mode::Compose => analyzer.compose(&input).map(|r| to_json(&r)),
    Mode::Classify => analyzer.classify_complexity(&input).map(|r| to_json(&r)),
    Mode::Philosophy => analyzer.evaluate_comprehensively(&input).map(|r| to_json(&r)),
    Mode::Risk => analyzer.synthesize_risk(&input).map(|r| to_json(&r)),
  });

  match result {
    Ok(json) => json,
    Err(e) => {
      tracing::warn!(error = %e, "rejected input line");
      to_json(&error_output(e))
    }
  }
}

fn error_output(err: AnalyzerError) -> ErrorOutput {
  match err {
    AnalyzerError::InvalidInput { field, reason } => ErrorOutput::new(reason).with_field(field),
    other => ErrorOutput::new(other.to_string()),
  }
}

fn to_json<T: Serialize>(value: &T) -> String {
  serde_json::to_string(value)
    .unwrap_or_else(|e| format!(r#"{{"error":true,"message":"serialize: {}"}}"#, e))
}
