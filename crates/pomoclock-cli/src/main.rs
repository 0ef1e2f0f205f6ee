use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pomoclock", version, about = "Pomoclock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Phase duration configuration
    Durations {
        #[command(subcommand)]
        action: commands::durations::DurationsAction,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Durations { action } => commands::durations::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
