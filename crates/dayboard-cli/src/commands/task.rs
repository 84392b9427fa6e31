//! Academic task commands.

use clap::Subcommand;
use dayboard_core::{AcademicTasks, KvStore};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },
    /// List tasks as JSON
    List,
    /// Toggle a task's completed flag
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut tasks = store.load::<AcademicTasks>();

    match action {
        TaskAction::Add { text } => {
            let item = tasks.add(&text)?;
            println!("Task added: {}", item.id);
            store.save(&tasks);
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(tasks.items())?);
        }
        TaskAction::Done { id } => match tasks.toggle(&id) {
            Some(item) => {
                println!(
                    "Task {}: {}",
                    if item.completed { "completed" } else { "reopened" },
                    item.text
                );
                store.save(&tasks);
            }
            None => println!("Task not found: {id}"),
        },
        TaskAction::Rm { id } => {
            if tasks.remove(&id) {
                println!("Task deleted: {id}");
                store.save(&tasks);
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
