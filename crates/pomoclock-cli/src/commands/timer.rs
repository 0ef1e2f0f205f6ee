use std::io::Write as _;
use std::time::Duration;

use clap::Subcommand;
use pomoclock_core::{DurationStore, Event, Phase, PomodoroEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run one interval to completion in the foreground
    Run {
        /// Phase to run (focus, short, long); defaults to focus
        #[arg(long)]
        phase: Option<Phase>,
    },
    /// Print the initial timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { phase } => run_interval(phase),
        TimerAction::Status => {
            let engine = PomodoroEngine::new(DurationStore::open()?);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
    }
}

/// Drive one interval at 1 Hz until it completes.
///
/// The loop is the engine's single tick driver: it stops as soon as the
/// engine pauses itself, so no tick can fire after completion.
fn run_interval(phase: Option<Phase>) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = PomodoroEngine::new(DurationStore::open()?);
    if let Some(phase) = phase {
        engine.switch_mode(phase);
    }
    engine.start();
    render(&engine)?;

    while engine.running() {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(Event::PhaseCompleted {
            phase, next_phase, ..
        }) = engine.tick()
        {
            // Terminal bell stands in for the chime collaborator.
            println!(
                "\x07\n{} complete -- next up: {}",
                phase.label(),
                next_phase.label()
            );
            break;
        }
        render(&engine)?;
    }
    Ok(())
}

fn render(engine: &PomodoroEngine) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    write!(
        out,
        "\r{} {:>5}",
        engine.phase().label(),
        format_clock(engine.remaining_secs())
    )?;
    out.flush()
}

fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
