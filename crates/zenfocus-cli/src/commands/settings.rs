use clap::Subcommand;
use zenfocus_core::error::Result;
use zenfocus_core::sinks::Silent;
use zenfocus_core::storage::open_store;
use zenfocus_core::{Config, DurationRegistry, Event, FocusTimer, ManualScheduler};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the configured durations (minutes) as JSON
    Show,
    /// Change durations in whole minutes; omitted values are kept
    Set {
        #[arg(long)]
        focus: Option<u32>,
        #[arg(long)]
        short: Option<u32>,
        #[arg(long)]
        long: Option<u32>,
    },
}

pub fn run(action: SettingsAction, config: &Config) -> Result<()> {
    let registry = DurationRegistry::load(open_store(config));

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&registry.settings())?);
        }
        SettingsAction::Set { focus, short, long } => {
            let current = registry.settings();
            let mut timer = FocusTimer::new(
                registry,
                Box::new(ManualScheduler::new()),
                Box::new(Silent),
                Box::new(Silent),
                Box::new(Silent),
            );
            let event = timer.update_settings(
                focus.unwrap_or(current.focus),
                short.unwrap_or(current.short),
                long.unwrap_or(current.long),
            )?;
            if let Event::SettingsUpdated {
                persisted: false, ..
            } = event
            {
                eprintln!("warning: storage unavailable, settings not saved");
            }
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
