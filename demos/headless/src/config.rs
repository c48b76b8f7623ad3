//! Loading `SimConfig` from TOML plus command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use ds_core::SimConfig;

use crate::args::Cli;

/// Parse a TOML document.  Missing keys take their default values.
pub fn parse(text: &str) -> Result<SimConfig> {
    let config: SimConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

pub fn load(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Config file (or defaults) with flags applied on top.
pub fn resolve(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => SimConfig::default(),
    };
    if let Some(ms) = cli.tick_ms {
        config.tick_interval_ms = ms;
    }
    if cli.keep_usage_across_midnight {
        config.clear_usage_on_action_rollover = false;
    }
    config.validate()?;
    Ok(config)
}
