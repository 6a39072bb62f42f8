use std::str::FromStr;

use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use zenfocus_core::error::Result;
use zenfocus_core::storage::open_store;
use zenfocus_core::{
    Config, DurationRegistry, Event, FocusTimer, IntervalScheduler, Mode, TickHandle,
};

use crate::terminal::{BellNotifier, TerminalDisplay, TerminalPrompt};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a live countdown. Reads commands from stdin:
    /// t(oggle), s(tart), p(ause), r(eset), focus, short, long, status, q(uit)
    Run {
        /// Mode to start in
        #[arg(long, default_value = "focus")]
        mode: Mode,
        /// Wait for a start command instead of starting immediately
        #[arg(long)]
        paused: bool,
        /// Print display frames and events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Toggle,
    Start,
    Pause,
    Reset,
    Switch(Mode),
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "t" | "toggle" => Ok(Command::Toggle),
            "s" | "start" => Ok(Command::Start),
            "p" | "pause" => Ok(Command::Pause),
            "r" | "reset" => Ok(Command::Reset),
            "status" => Ok(Command::Status),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<Mode>()
                .map(Command::Switch)
                .map_err(|_| format!("unknown command '{other}'")),
        }
    }
}

fn print_event(event: &Event, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        tracing::info!(?event, "timer event");
    }
    Ok(())
}

/// Apply one command. Returns false when the user asked to quit.
fn apply(timer: &mut FocusTimer, command: Command, json: bool) -> Result<bool> {
    let event = match command {
        Command::Toggle => timer.toggle(),
        Command::Start => timer.start(),
        Command::Pause => timer.pause(),
        Command::Reset => Some(timer.reset()),
        Command::Switch(mode) => Some(timer.switch_mode(mode)),
        Command::Status => {
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            None
        }
        Command::Quit => return Ok(false),
    };
    if let Some(event) = event {
        print_event(&event, json)?;
    }
    Ok(true)
}

async fn drive(
    mut timer: FocusTimer,
    mut ticks: UnboundedReceiver<TickHandle>,
    json: bool,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            Some(handle) = ticks.recv() => {
                if let Some(event) = timer.handle_tick(handle) {
                    print_event(&event, json)?;
                    if !stdin_open {
                        break;
                    }
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match line.parse::<Command>() {
                        Ok(command) => {
                            if !apply(&mut timer, command, json)? {
                                break;
                            }
                        }
                        Err(e) => eprintln!("{e}"),
                    },
                    None => {
                        // Without input the run ends with the current countdown.
                        stdin_open = false;
                        if !timer.state().is_running {
                            break;
                        }
                    }
                }
            }
        }
    }

    if !json {
        println!();
    }
    Ok(())
}

pub fn run(action: TimerAction, config: &Config) -> Result<()> {
    match action {
        TimerAction::Run { mode, paused, json } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(async {
                let registry = DurationRegistry::load(open_store(config));
                let (scheduler, ticks) = IntervalScheduler::new();
                let mut timer = FocusTimer::new(
                    registry,
                    Box::new(scheduler),
                    Box::new(BellNotifier::new(&config.notifications)),
                    Box::new(TerminalPrompt::new(&config.notifications)),
                    Box::new(TerminalDisplay::new(json)),
                );
                if mode != Mode::Focus {
                    print_event(&timer.switch_mode(mode), json)?;
                }
                if !paused {
                    if let Some(event) = timer.start() {
                        print_event(&event, json)?;
                    }
                }
                drive(timer, ticks, json).await
            })
        }
    }
}
