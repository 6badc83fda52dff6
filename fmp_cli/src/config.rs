//! Loads client [`Settings`] for the CLI from an optional TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use fmp_api::{ErrorPolicy, Settings};

/// Reads settings from `path`, or the defaults when no file is given.
/// `--strict` overrides whatever policy the file sets.
pub fn load_settings(path: Option<&Path>, strict: bool) -> Result<Settings> {
    let settings = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str::<Settings>(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Settings::default(),
    };
    Ok(if strict {
        settings.with_error_policy(ErrorPolicy::Strict)
    } else {
        settings
    })
}
