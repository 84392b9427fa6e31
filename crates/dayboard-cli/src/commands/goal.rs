//! Goal commands.

use clap::Subcommand;
use dayboard_core::{Goals, KvStore};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a new goal
    Add {
        /// Goal text
        text: String,
    },
    /// List goals as JSON
    List,
    /// Toggle a goal's completed flag
    Done {
        /// Goal ID
        id: String,
    },
    /// Delete a goal
    Rm {
        /// Goal ID
        id: String,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut goals = store.load::<Goals>();

    match action {
        GoalAction::Add { text } => {
            let item = goals.add(&text)?;
            println!("Goal added: {}", item.id);
            store.save(&goals);
        }
        GoalAction::List => {
            println!("{}", serde_json::to_string_pretty(goals.items())?);
        }
        GoalAction::Done { id } => match goals.toggle(&id) {
            Some(item) => {
                println!(
                    "Goal {}: {}",
                    if item.completed { "achieved" } else { "reopened" },
                    item.text
                );
                store.save(&goals);
            }
            None => println!("Goal not found: {id}"),
        },
        GoalAction::Rm { id } => {
            if goals.remove(&id) {
                println!("Goal deleted: {id}");
                store.save(&goals);
            } else {
                println!("Goal not found: {id}");
            }
        }
    }
    Ok(())
}
