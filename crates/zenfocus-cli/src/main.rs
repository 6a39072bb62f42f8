use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zenfocus_core::Config;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "zenfocus", version, about = "ZenFocus focus timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Timer durations
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Task list
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Quick notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Greeting, clock and calendar
    Today {
        /// Show the calendar this many months away from the current one
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        month_offset: i32,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config);

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action, &config),
        Commands::Settings { action } => commands::settings::run(action, &config),
        Commands::Task { action } => commands::task::run(action, &config),
        Commands::Notes { action } => commands::notes::run(action, &config),
        Commands::Today { month_offset } => commands::today::run(month_offset),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
