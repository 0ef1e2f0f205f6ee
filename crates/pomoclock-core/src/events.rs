use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change in the engine produces an Event.
/// The host UI relays them to its collaborators (chime, progress ring,
/// session tracker); hosts that only need the signal may ignore the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Started {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Reset {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase's countdown reached zero. Emitted exactly once per expiry.
    PhaseCompleted {
        phase: Phase,
        next_phase: Phase,
        pomodoro_count: u32,
        session_count: u32,
        at: DateTime<Utc>,
    },
    /// Manual phase override via `switch_mode`.
    PhaseSwitched {
        from: Phase,
        to: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    DurationChanged {
        phase: Phase,
        secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        pomodoro_count: u32,
        session_count: u32,
        at: DateTime<Utc>,
    },
}
