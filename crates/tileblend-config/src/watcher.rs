//! Configuration Hot-Reload
//!
//! Watches config.toml for changes, sending reload events through a channel
//! for the viewer to pick up between frames.

use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::{Config, ConfigError};

/// Default debounce window between two reloads
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the configuration watcher
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// Configuration file changed, contains new config
    Reloaded(Config),
    /// Error occurred during reload
    ReloadError(String),
}

/// Watches a configuration file for changes
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<ConfigEvent>,
    path: PathBuf,
}

impl ConfigWatcher {
    /// Watch the default config file (see [`Config::config_file_path`])
    pub fn new() -> Result<Self, ConfigError> {
        Self::watch_file(&Config::config_file_path()?, DEFAULT_DEBOUNCE)
    }

    /// Watch a specific config file
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors which save by renaming still trigger a reload.
    pub fn watch_file(config_file: &Path, debounce: Duration) -> Result<Self, ConfigError> {
        let (tx, rx) = mpsc::channel();

        let config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let watched_file = config_file.to_path_buf();
        let mut last_event: Option<Instant> = None;

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !is_reload_event(&event.kind) {
                        return;
                    }
                    if !event.paths.iter().any(|p| same_file(p, &watched_file)) {
                        return;
                    }

                    let now = Instant::now();
                    if let Some(last) = last_event
                        && now.duration_since(last) < debounce
                    {
                        return;
                    }
                    last_event = Some(now);

                    log::info!("Config file changed, reloading...");
                    let reloaded = match Config::load_from(&watched_file) {
                        Ok(config) => ConfigEvent::Reloaded(config),
                        Err(e) => {
                            log::error!("Failed to reload config: {}", e);
                            ConfigEvent::ReloadError(e.to_string())
                        }
                    };
                    let _ = tx.send(reloaded);
                }
                Err(e) => {
                    log::error!("Watch error: {:?}", e);
                }
            },
            NotifyConfig::default().with_poll_interval(Duration::from_secs(1)),
        )
        .map_err(|e| ConfigError::Watch(e.to_string()))?;

        watcher
            .watch(&config_dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::Watch(e.to_string()))?;
        log::info!("Watching config directory: {:?}", config_dir);

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            path: config_file.to_path_buf(),
        })
    }

    /// File this watcher reloads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Try to receive a config event without blocking
    pub fn try_recv(&self) -> Option<ConfigEvent> {
        self.receiver.try_recv().ok()
    }

    /// Get all pending events
    pub fn drain_events(&self) -> Vec<ConfigEvent> {
        self.receiver.try_iter().collect()
    }
}

/// Writes, creations and renames can all leave new contents behind
fn is_reload_event(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}

fn same_file(a: &Path, b: &Path) -> bool {
    a == b || (a.file_name() == b.file_name() && a.parent().map(canonical) == b.parent().map(canonical))
}

fn canonical(p: &Path) -> PathBuf {
    p.canonicalize().unwrap_or_else(|_| p.to_path_buf())
}
