use clap::{Parser, Subcommand};

mod app;
mod commands;
mod logging;
mod terminal;
mod ui;

#[derive(Parser)]
#[command(name = "zenbreak", version, about = "ZenBreak: give your brain a break")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive relaxation timer (default)
    Tui(commands::tui::TuiArgs),
    /// Run one session without a UI, printing events as JSON lines
    Run(commands::run::RunArgs),
    /// Print the guidance for a mode as JSON
    Advice {
        /// breathing, eyes or meditation
        mode: String,
    },
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        None => commands::tui::run(commands::tui::TuiArgs::default()),
        Some(Commands::Tui(args)) => commands::tui::run(args),
        Some(Commands::Run(args)) => commands::run::run(args),
        Some(Commands::Advice { mode }) => commands::advice::run(&mode),
        Some(Commands::Config { action }) => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
