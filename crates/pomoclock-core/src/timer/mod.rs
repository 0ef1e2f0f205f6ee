mod engine;
mod phase;

pub use engine::PomodoroEngine;
pub use phase::{ParsePhaseError, Phase};
