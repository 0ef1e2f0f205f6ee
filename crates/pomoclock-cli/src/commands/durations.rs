use clap::Subcommand;
use pomoclock_core::{DurationStore, Phase};

#[derive(Subcommand)]
pub enum DurationsAction {
    /// Show the configured durations as JSON (seconds)
    Show,
    /// Set a phase's duration in minutes (values below 1 are clamped)
    Set {
        /// Phase to configure (focus, short, long)
        phase: Phase,
        /// Duration in minutes
        minutes: u64,
    },
    /// Restore the default durations
    Reset,
}

pub fn run(action: DurationsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = DurationStore::open()?;
    match action {
        DurationsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&store.get_all())?);
        }
        DurationsAction::Set { phase, minutes } => {
            store.set(phase, minutes);
            println!("ok");
        }
        DurationsAction::Reset => {
            store.reset_defaults();
            println!("durations reset to defaults");
        }
    }
    Ok(())
}
