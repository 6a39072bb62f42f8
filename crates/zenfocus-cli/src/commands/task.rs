use clap::Subcommand;
use zenfocus_core::error::Result;
use zenfocus_core::storage::open_store;
use zenfocus_core::{Config, CoreError, TaskList};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the top of the list
    Add {
        /// Task text
        text: String,
    },
    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task done, or not done again
    Toggle {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
}

pub fn run(action: TaskAction, config: &Config) -> Result<()> {
    let store = open_store(config);
    let mut tasks = TaskList::load(store.as_ref());

    match action {
        TaskAction::Add { text } => {
            let Some(task) = tasks.add(&text) else {
                return Err(CoreError::Custom("task text is empty".into()));
            };
            println!("Task added: {} ({})", task.text, task.id);
            tasks.save(store.as_ref())?;
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tasks.tasks())?);
            } else {
                for task in tasks.tasks() {
                    let mark = if task.completed { "x" } else { " " };
                    println!("[{mark}] {} {}", task.id, task.text);
                }
                println!("{} remaining", tasks.remaining_count());
            }
        }
        TaskAction::Toggle { id } => {
            if !tasks.toggle(id) {
                return Err(CoreError::Custom(format!("no task with id {id}")));
            }
            tasks.save(store.as_ref())?;
            println!("{} remaining", tasks.remaining_count());
        }
        TaskAction::Delete { id } => {
            if !tasks.delete(id) {
                return Err(CoreError::Custom(format!("no task with id {id}")));
            }
            tasks.save(store.as_ref())?;
            println!("{} remaining", tasks.remaining_count());
        }
    }
    Ok(())
}
