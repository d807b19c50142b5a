//! Tracing subscriber setup
//!
//! Always logs to stdout. When `logging.file` is configured, the same events
//! are also appended to that file without ANSI colors.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use songlib_common::config::TomlConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for `level`
pub fn default_directives(level: &str) -> String {
    format!(
        "songlib_server={level},songlib_common={level},tower_http={level}",
        level = level
    )
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &TomlConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(config.log_level()).into());

    let file_layer = match &config.logging.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_both_crates() {
        let directives = default_directives("info");
        assert_eq!(
            directives,
            "songlib_server=info,songlib_common=info,tower_http=info"
        );
        assert!(directives.parse::<EnvFilter>().is_ok());
    }
}
