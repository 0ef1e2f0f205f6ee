//! # Pomoclock Core Library
//!
//! Core business logic for the Pomoclock Pomodoro timer. The library is
//! front-end agnostic: the CLI binary (and any other host UI) is a thin
//! layer that issues commands and relays events to its own collaborators
//! (rendering, chimes, task lists).
//!
//! ## Architecture
//!
//! - **Pomodoro Engine**: a phase state machine advanced by the caller
//!   invoking `tick()` once per elapsed second -- no internal threads
//! - **Duration Store**: JSON-persisted phase lengths with safe defaults
//! - **Events**: every state change produces a serializable [`Event`]
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: phase sequencing, countdown, completion signaling
//! - [`DurationStore`]: single source of truth for configured phase lengths

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::StoreError;
pub use events::Event;
pub use storage::{DurationConfig, DurationStore};
pub use timer::{Phase, PomodoroEngine};
