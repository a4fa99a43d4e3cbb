//! Run options resolved from config, then environment, then defaults.

use std::env;

use trilogy_config::TrilogyConfig;

pub const ITERATIONS_ENV: &str = "TRILOGY_ITERATIONS";
pub const OUTPUT_ENV: &str = "TRILOGY_OUTPUT";

/// Iteration count of the canonical driver.
pub const DEFAULT_ITERATIONS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(OutputMode::Text),
            "json" | "jsonl" => Some(OutputMode::Json),
            _ => None,
        }
    }

    pub fn from_config(config: Option<&TrilogyConfig>) -> Option<Self> {
        let raw = config.and_then(TrilogyConfig::output_format)?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown output format in config: {}", raw);
        }
        mode
    }

    pub fn from_env() -> Option<Self> {
        env::var(OUTPUT_ENV).ok().as_deref().and_then(Self::parse)
    }

    pub fn resolve(config: Option<&TrilogyConfig>) -> Self {
        Self::from_config(config)
            .or_else(Self::from_env)
            .unwrap_or(OutputMode::Text)
    }
}

pub fn parse_iterations(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn iterations_from_env() -> Option<i64> {
    let raw = env::var(ITERATIONS_ENV).ok()?;
    let parsed = parse_iterations(&raw);
    if parsed.is_none() {
        tracing::warn!("Ignoring {ITERATIONS_ENV}={raw:?}: not an integer");
    }
    parsed
}

pub fn resolve_iterations(config: Option<&TrilogyConfig>) -> i64 {
    config
        .and_then(TrilogyConfig::iterations)
        .or_else(iterations_from_env)
        .unwrap_or(DEFAULT_ITERATIONS)
}
