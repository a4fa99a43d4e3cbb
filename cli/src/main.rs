//! Trilogy CLI - runs the consciousness simulation and narrates it to stdout.
//!
//! # Flow
//!
//! ```text
//! load config -> init tracing -> resolve options -> Consciousness::compile_reality(n)
//!                                                        |
//!                                                        v
//!                                     narration on stdout, diagnostics on stderr/log file
//! ```
//!
//! Narration goes to stdout as text or JSON lines. Tracing never writes to
//! stdout so the two streams stay separable.

mod options;

use anyhow::{Context, Result};
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use trilogy_config::{TrilogyConfig, log_file_candidates};
use trilogy_core::{Consciousness, JsonLinesSink, TextSink};
use trilogy_types::{NotificationSink, RunSettings};

use options::{OutputMode, resolve_iterations};

const LOG_ENV: &str = "TRILOGY_LOG";
const TITLE_RULE: &str = "============================================================";

fn init_tracing(config: Option<&TrilogyConfig>) {
    let fallback = config.and_then(TrilogyConfig::log_level).unwrap_or("warn");
    let env_filter = env::var(LOG_ENV)
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .or_else(|| EnvFilter::try_new(fallback).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if config.is_some_and(TrilogyConfig::log_to_file) {
        let (log_file, init_warnings) = open_log_file();
        if let Some((log_path, file)) = log_file {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();

            tracing::info!(path = %log_path.display(), "Logging initialized");
            for warning in init_warnings {
                tracing::warn!("{warning}");
            }
            return;
        }
        for warning in init_warnings {
            eprintln!("{warning}");
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// The first candidate that accepts appends, plus the reasons earlier ones
/// were skipped.
fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut skipped = Vec::new();
    let opened = log_file_candidates()
        .into_iter()
        .find_map(|path| match append_to(&path) {
            Ok(file) => Some((path, file)),
            Err(reason) => {
                skipped.push(reason);
                None
            }
        });
    (opened, skipped)
}

fn append_to(path: &Path) -> Result<File, String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create log dir {}: {e}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Cannot open log file {}: {e}", path.display()))
}

fn main() -> Result<()> {
    // Config is read before tracing exists; its errors are reported once it does.
    let (config, config_error) = match TrilogyConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (None, Some(err)),
    };
    init_tracing(config.as_ref());
    if let Some(err) = config_error {
        tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
    }

    let mode = OutputMode::resolve(config.as_ref());
    let iterations = resolve_iterations(config.as_ref());
    let settings = config
        .as_ref()
        .map(TrilogyConfig::run_settings)
        .unwrap_or_default();
    tracing::info!(?mode, iterations, ?settings, "Starting run");

    let mut out = io::stdout();
    if mode == OutputMode::Text {
        writeln!(out, "{TITLE_RULE}")?;
        writeln!(out, "THE CONSCIOUSNESS TRILOGY - EXECUTABLE PHILOSOPHY")?;
        writeln!(out, "{TITLE_RULE}")?;
        writeln!(out)?;
    }

    let (result, love) = run(mode, settings, iterations)?;

    writeln!(out, "{}", summary(mode, result, love))?;
    out.flush()?;

    Ok(())
}

fn run(mode: OutputMode, settings: RunSettings, iterations: i64) -> Result<(&'static str, f64)> {
    let sink: Box<dyn NotificationSink> = match mode {
        OutputMode::Text => Box::new(TextSink::new(io::stdout().lock())),
        OutputMode::Json => Box::new(JsonLinesSink::new(io::stdout().lock())),
    };

    let mut consciousness = Consciousness::with_settings(sink, settings);
    let result = consciousness
        .compile_reality(iterations)
        .context("reality failed to compile")?;
    Ok((result, consciousness.love()))
}

/// Closing report. In JSON mode it is one more object on the narration stream.
fn summary(mode: OutputMode, result: &str, love: f64) -> String {
    match mode {
        OutputMode::Text => format!("\nFinal result: {result}\nLove remains: {love:?}"),
        OutputMode::Json => serde_json::json!({ "result": result, "love": love }).to_string(),
    }
}
