use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three phases of a Pomodoro cycle.
///
/// The serde tokens (`focus`, `short`, `long`) match the persisted
/// `durations.json` layout and double as the host-facing phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "short")]
    ShortBreak,
    #[serde(rename = "long")]
    LongBreak,
}

#[derive(Error, Debug)]
#[error("unknown phase '{0}' (expected focus, short, or long)")]
pub struct ParsePhaseError(String);

impl Phase {
    /// Stable token used in persisted state and CLI arguments.
    pub fn token(self) -> &'static str {
        match self {
            Phase::Focus => "focus",
            Phase::ShortBreak => "short",
            Phase::LongBreak => "long",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Pomodoro",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(Phase::Focus),
            "short" => Ok(Phase::ShortBreak),
            "long" => Ok(Phase::LongBreak),
            other => Err(ParsePhaseError(other.to_string())),
        }
    }
}
