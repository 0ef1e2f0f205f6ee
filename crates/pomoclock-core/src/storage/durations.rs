//! JSON-persisted phase durations.
//!
//! The store is the single source of truth for how long each phase runs.
//! It persists the full config to `durations.json` under the data directory
//! on every mutation and falls back to defaults when the file is missing or
//! malformed. Collaborator state (tasks, sessions, theme) lives in separate
//! files and never collides with this one.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::StoreError;
use crate::timer::Phase;

const DURATIONS_FILE: &str = "durations.json";

/// Configured length, in seconds, for each of the three phases.
///
/// Serialized as `{"focus": int, "short": int, "long": int}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationConfig {
    #[serde(default = "default_focus_secs")]
    pub focus: u64,
    #[serde(default = "default_short_secs")]
    pub short: u64,
    #[serde(default = "default_long_secs")]
    pub long: u64,
}

fn default_focus_secs() -> u64 {
    25 * 60
}
fn default_short_secs() -> u64 {
    5 * 60
}
fn default_long_secs() -> u64 {
    15 * 60
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            focus: default_focus_secs(),
            short: default_short_secs(),
            long: default_long_secs(),
        }
    }
}

impl DurationConfig {
    pub fn get(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.focus,
            Phase::ShortBreak => self.short,
            Phase::LongBreak => self.long,
        }
    }

    fn set_secs(&mut self, phase: Phase, secs: u64) {
        match phase {
            Phase::Focus => self.focus = secs,
            Phase::ShortBreak => self.short = secs,
            Phase::LongBreak => self.long = secs,
        }
    }

    /// Every phase must run for at least one second.
    fn normalized(mut self) -> Self {
        self.focus = self.focus.max(1);
        self.short = self.short.max(1);
        self.long = self.long.max(1);
        self
    }
}

/// Durable store for configurable phase lengths.
///
/// Construction never fails on bad data: a missing or unparseable file
/// yields the defaults. Persistence failures after construction are
/// reported through `log::warn!` and the in-memory config stays
/// authoritative.
#[derive(Debug, Clone)]
pub struct DurationStore {
    config: DurationConfig,
    path: Option<PathBuf>,
}

impl DurationStore {
    /// Open the store backed by `durations.json` in the data directory.
    ///
    /// # Errors
    /// Returns an error only if the data directory cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::open_at(data_dir()?.join(DURATIONS_FILE)))
    }

    /// Open the store backed by an explicit file path.
    ///
    /// Missing or malformed contents fall back to defaults silently.
    pub fn open_at(path: PathBuf) -> Self {
        let config = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<DurationConfig>(&content) {
                Ok(cfg) => cfg.normalized(),
                Err(e) => {
                    log::debug!("malformed durations file, using defaults: {e}");
                    DurationConfig::default()
                }
            },
            Err(_) => DurationConfig::default(),
        };
        Self {
            config,
            path: Some(path),
        }
    }

    /// An unpersisted store (for tests and ephemeral hosts).
    pub fn in_memory() -> Self {
        Self {
            config: DurationConfig::default(),
            path: None,
        }
    }

    /// Configured seconds for a phase. Always succeeds.
    pub fn get(&self, phase: Phase) -> u64 {
        self.config.get(phase)
    }

    /// Snapshot of all three durations.
    pub fn get_all(&self) -> DurationConfig {
        self.config
    }

    /// Set a phase's duration in minutes. Values below 1 are clamped to 1.
    ///
    /// Persists the full config synchronously; a write failure is non-fatal.
    pub fn set(&mut self, phase: Phase, minutes: u64) {
        let secs = minutes.max(1).saturating_mul(60);
        self.config.set_secs(phase, secs);
        self.persist();
    }

    /// Restore and persist the default durations.
    pub fn reset_defaults(&mut self) {
        self.config = DurationConfig::default();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let result = serde_json::to_string_pretty(&self.config)
            .map_err(StoreError::from)
            .and_then(|json| std::fs::write(path, json).map_err(StoreError::from));
        if let Err(e) = result {
            log::warn!("failed to persist durations to {}: {e}", path.display());
        }
    }
}
