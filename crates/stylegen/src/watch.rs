//! Regenerate the stylesheet whenever the config file changes.
//!
//! The config file's parent directory is watched (editors often replace the
//! file on save, which a watch on the file itself would lose). Events are
//! debounced so one save triggers one rebuild. A config that fails to load
//! or validate is reported and the previous output is left in place.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer, notify::RecursiveMode};
use tracing::{debug, error, info, warn};

use stylegen_core::Config;

use crate::generate::{GenerateOptions, render, write_output};

/// Debounce interval (in ms) for file change events.
const FILE_CHANGE_DEBOUNCE_MS: u64 = 300;

/// Outcome of one rebuild attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Rebuild {
    Written,
    /// Config failed to load or validate; output untouched.
    Rejected(String),
}

/// Load, validate, render and write. Never fails the watch loop.
pub fn rebuild(config_path: &Path, output: Option<&Path>, options: &GenerateOptions) -> Rebuild {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => return Rebuild::Rejected(format!("Failed to reload config: {}", e)),
    };

    if let Err(e) = config.validate() {
        return Rebuild::Rejected(format!("Config validation failed: {}", e));
    }
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    match render(&config, options).and_then(|css| write_output(output, &css)) {
        Ok(()) => Rebuild::Written,
        Err(e) => Rebuild::Rejected(format!("Failed to write stylesheet: {:#}", e)),
    }
}

/// Watch `config_path` and rebuild on every change. Blocks until the watcher
/// channel closes.
pub fn run(config_path: PathBuf, output: Option<PathBuf>, options: GenerateOptions) -> Result<()> {
    let canonical = config_path
        .canonicalize()
        .with_context(|| format!("cannot watch {}", config_path.display()))?;
    let watch_dir = canonical.parent().unwrap_or(&canonical).to_path_buf();

    report(rebuild(&canonical, output.as_deref(), &options));

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(FILE_CHANGE_DEBOUNCE_MS), tx)
        .context("failed to create file watcher")?;
    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", watch_dir.display()))?;

    info!("Watching {} for changes", canonical.display());

    for result in rx {
        match result {
            Ok(events) => {
                if events.iter().any(|e| e.path == canonical) {
                    debug!("Config file change detected");
                    report(rebuild(&canonical, output.as_deref(), &options));
                }
            }
            Err(err) => error!("File watcher error: {}", err),
        }
    }

    debug!("Config file watcher shutting down");
    Ok(())
}

fn report(outcome: Rebuild) {
    match outcome {
        Rebuild::Written => info!("Stylesheet regenerated"),
        // Keep the previous output; the next save gets another try.
        Rebuild::Rejected(msg) => error!("{}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rebuild_writes_output() {
        let dir = temp_dir("stylegen_test_rebuild_ok");
        let config_path = dir.join("config.toml");
        let out_path = dir.join("button.css");
        std::fs::write(&config_path, "[style]\nprefix_cls = \"w-btn\"\nhashed = false\n").unwrap();

        let outcome = rebuild(&config_path, Some(&out_path), &GenerateOptions::default());
        assert_eq!(outcome, Rebuild::Written);
        let css = std::fs::read_to_string(&out_path).unwrap();
        assert!(css.starts_with(".w-btn.w-btn-sm {"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rebuild_rejects_invalid_config_and_keeps_output() {
        let dir = temp_dir("stylegen_test_rebuild_invalid");
        let config_path = dir.join("config.toml");
        let out_path = dir.join("button.css");
        std::fs::write(&out_path, "previous").unwrap();
        std::fs::write(&config_path, "[theme]\nmode = \"neon\"\n").unwrap();

        let outcome = rebuild(&config_path, Some(&out_path), &GenerateOptions::default());
        assert!(matches!(outcome, Rebuild::Rejected(ref msg) if msg.contains("theme.mode")));
        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "previous");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rebuild_rejects_unparseable_config() {
        let dir = temp_dir("stylegen_test_rebuild_broken");
        let config_path = dir.join("config.toml");
        std::fs::write(&config_path, "not toml {{").unwrap();

        let outcome = rebuild(&config_path, None, &GenerateOptions::default());
        assert!(matches!(outcome, Rebuild::Rejected(ref msg) if msg.starts_with("Failed to reload")));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
