//! Pomodoro engine implementation.
//!
//! The engine is a phase state machine advanced by the caller invoking
//! `tick()` once per elapsed second while running. It owns no thread and
//! no timer handle -- the host drives it and stops driving it when
//! `running()` turns false, so a stray tick after pause or completion is
//! a no-op by construction.
//!
//! ## Phase sequencing
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ShortBreak -> Focus -> LongBreak -> ...
//! ```
//!
//! Every third completed Focus routes to LongBreak; a completed LongBreak
//! closes the session and starts the next cycle at Focus.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(DurationStore::open()?);
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::PhaseCompleted) on expiry
//! ```

use chrono::Utc;

use crate::events::Event;
use crate::storage::DurationStore;
use crate::timer::Phase;

/// Completed Focus intervals per cycle; the Nth routes to LongBreak.
const POMODOROS_PER_CYCLE: u32 = 3;

/// Core Pomodoro engine.
///
/// Owns the live timer state exclusively; external callers read snapshots
/// or invoke the command surface. Every command is total -- malformed
/// inputs are clamped at the store boundary, never rejected here.
#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    durations: DurationStore,
    phase: Phase,
    remaining_secs: u64,
    running: bool,
    /// Completed Focus intervals since the last LongBreak (1-based).
    pomodoro_count: u32,
    /// Fully completed cycles ending in a LongBreak (1-based).
    session_count: u32,
    /// Fire-once guard for the completion signal. Re-armed on start,
    /// reset, switch, duration change, and after every transition.
    completion_armed: bool,
}

impl PomodoroEngine {
    /// Create an engine seeded from the store's Focus duration.
    ///
    /// Starts paused at Focus with both counters at 1. Live state is
    /// deliberately not restored across restarts.
    pub fn new(durations: DurationStore) -> Self {
        let remaining_secs = durations.get(Phase::Focus);
        Self {
            durations,
            phase: Phase::Focus,
            remaining_secs,
            running: false,
            pomodoro_count: 1,
            session_count: 1,
            completion_armed: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn pomodoro_count(&self) -> u32 {
        self.pomodoro_count
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn durations(&self) -> &DurationStore {
        &self.durations
    }

    /// Configured length of the current phase.
    pub fn total_secs(&self) -> u64 {
        self.durations.get(self.phase)
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            running: self.running,
            pomodoro_count: self.pomodoro_count,
            session_count: self.session_count,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. Always succeeds; re-arms the completion guard
    /// so a freshly started interval can complete again.
    pub fn start(&mut self) -> Option<Event> {
        self.completion_armed = true;
        if self.running {
            return None; // Already running.
        }
        self.running = true;
        Some(Event::Started {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop the countdown. Idempotent.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::Paused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Rewind the current phase to its configured length.
    /// Does not change phase or counters.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.remaining_secs = self.durations.get(self.phase);
        self.completion_armed = true;
        Some(Event::Reset {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Manual phase override. Bypasses the sequencing rule and never
    /// touches the counters.
    pub fn switch_mode(&mut self, phase: Phase) -> Option<Event> {
        let from = self.phase;
        self.phase = phase;
        self.running = false;
        self.remaining_secs = self.durations.get(phase);
        self.completion_armed = true;
        Some(Event::PhaseSwitched {
            from,
            to: phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Change a phase's configured length (minutes, clamped to >= 1).
    ///
    /// Editing the current phase rebases the countdown and forces a pause,
    /// so a silent countdown/duration mismatch can never occur.
    pub fn set_duration(&mut self, phase: Phase, minutes: u64) -> Option<Event> {
        self.durations.set(phase, minutes);
        let secs = self.durations.get(phase);
        if phase == self.phase {
            self.remaining_secs = secs;
            self.running = false;
            self.completion_armed = true;
        }
        Some(Event::DurationChanged {
            phase,
            secs,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second. Call once per elapsed second
    /// while running; a tick while paused is a no-op.
    ///
    /// Returns `Some(Event::PhaseCompleted)` exactly once per expiry. The
    /// transition happens within the same tick, so `remaining_secs` is
    /// never observed at 0 between ticks.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 && self.completion_armed {
            return Some(self.complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Interval expiry: emit the one-shot completion, advance the phase,
    /// update the counters, and rebase the countdown.
    fn complete(&mut self) -> Event {
        self.completion_armed = false;
        self.running = false;

        let finished = self.phase;
        let next = match finished {
            Phase::Focus => {
                if self.pomodoro_count % POMODOROS_PER_CYCLE == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::LongBreak => {
                self.session_count += 1;
                self.pomodoro_count = 1;
                Phase::Focus
            }
            Phase::ShortBreak => {
                self.pomodoro_count += 1;
                Phase::Focus
            }
        };

        self.phase = next;
        self.remaining_secs = self.durations.get(next);
        self.completion_armed = true;

        Event::PhaseCompleted {
            phase: finished,
            next_phase: next,
            pomodoro_count: self.pomodoro_count,
            session_count: self.session_count,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DurationStore;

    fn engine() -> PomodoroEngine {
        PomodoroEngine::new(DurationStore::in_memory())
    }

    #[test]
    fn initial_state_is_paused_focus() {
        let e = engine();
        assert_eq!(e.phase(), Phase::Focus);
        assert_eq!(e.remaining_secs(), 1500);
        assert!(!e.running());
        assert_eq!(e.pomodoro_count(), 1);
        assert_eq!(e.session_count(), 1);
    }

    #[test]
    fn start_pause_round_trip() {
        let mut e = engine();
        assert!(e.start().is_some());
        assert!(e.running());
        assert!(e.start().is_none()); // Already running.
        assert!(e.pause().is_some());
        assert!(!e.running());
        assert!(e.pause().is_none()); // Idempotent.
    }

    #[test]
    fn tick_while_paused_is_a_no_op() {
        let mut e = engine();
        assert!(e.tick().is_none());
        assert_eq!(e.remaining_secs(), 1500);
    }

    #[test]
    fn tick_decrements_while_running() {
        let mut e = engine();
        e.start();
        e.tick();
        e.tick();
        assert_eq!(e.remaining_secs(), 1498);
    }

    #[test]
    fn reset_rewinds_without_touching_phase_or_counters() {
        let mut e = engine();
        e.start();
        e.tick();
        e.tick();
        let event = e.reset().unwrap();
        assert!(matches!(event, Event::Reset { .. }));
        assert_eq!(e.remaining_secs(), 1500);
        assert_eq!(e.phase(), Phase::Focus);
        assert_eq!(e.pomodoro_count(), 1);
        assert!(!e.running());
    }

    #[test]
    fn switch_mode_rebases_and_pauses() {
        let mut e = engine();
        e.start();
        e.switch_mode(Phase::LongBreak);
        assert_eq!(e.phase(), Phase::LongBreak);
        assert_eq!(e.remaining_secs(), 900);
        assert!(!e.running());
        assert_eq!(e.pomodoro_count(), 1);
        assert_eq!(e.session_count(), 1);
    }

    #[test]
    fn set_duration_for_current_phase_rebases_and_pauses() {
        let mut e = engine();
        e.start();
        e.set_duration(Phase::Focus, 10);
        assert_eq!(e.remaining_secs(), 600);
        assert!(!e.running());
    }

    #[test]
    fn set_duration_for_other_phase_leaves_countdown_alone() {
        let mut e = engine();
        e.start();
        e.tick();
        e.set_duration(Phase::LongBreak, 20);
        assert_eq!(e.remaining_secs(), 1499);
        assert_eq!(e.durations().get(Phase::LongBreak), 1200);
    }

    #[test]
    fn focus_completion_routes_to_short_break() {
        let mut e = engine();
        e.set_duration(Phase::Focus, 1);
        e.start();
        let mut completed = None;
        for _ in 0..60 {
            if let Some(ev) = e.tick() {
                completed = Some(ev);
            }
        }
        match completed.expect("expected a completion") {
            Event::PhaseCompleted {
                phase, next_phase, ..
            } => {
                assert_eq!(phase, Phase::Focus);
                assert_eq!(next_phase, Phase::ShortBreak);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(e.phase(), Phase::ShortBreak);
        assert_eq!(e.remaining_secs(), 300);
        assert_eq!(e.pomodoro_count(), 1);
        assert!(!e.running());
    }

    #[test]
    fn completion_fires_exactly_once_per_expiry() {
        let mut e = engine();
        e.set_duration(Phase::Focus, 1);
        e.start();
        let completions: usize = (0..120).filter_map(|_| e.tick()).count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn snapshot_reflects_live_state() {
        let mut e = engine();
        e.start();
        e.tick();
        match e.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_secs,
                total_secs,
                running,
                ..
            } => {
                assert_eq!(phase, Phase::Focus);
                assert_eq!(remaining_secs, 1499);
                assert_eq!(total_secs, 1500);
                assert!(running);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn progress_moves_from_zero_toward_one() {
        let mut e = engine();
        assert_eq!(e.progress(), 0.0);
        e.start();
        for _ in 0..750 {
            e.tick();
        }
        assert!((e.progress() - 0.5).abs() < 1e-9);
    }
}
