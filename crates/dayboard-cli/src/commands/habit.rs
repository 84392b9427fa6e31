//! Habit commands.

use chrono::Local;
use clap::Subcommand;
use dayboard_core::{FlameLevel, Habits, KvStore};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit
    Add {
        /// Habit name
        name: String,
    },
    /// List habits with streaks and flame tiers
    List,
    /// Toggle today's completion (mark, or undo today's mark)
    Mark {
        /// Habit ID
        id: String,
    },
    /// Delete a habit
    Rm {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut habits = store.load::<Habits>();
    let today = Local::now().date_naive();

    match action {
        HabitAction::Add { name } => {
            let habit = habits.add(&name)?;
            println!("Habit added: {}", habit.id);
            store.save(&habits);
        }
        HabitAction::List => {
            for habit in habits.iter() {
                let status = habit.status(today);
                println!(
                    "{}  {:<24} streak {:>3}  {}{}",
                    habit.id,
                    habit.name,
                    status.streak,
                    format!("{:?}", FlameLevel::for_status(&status)).to_lowercase(),
                    if status.completed_today {
                        "  (done today)"
                    } else {
                        ""
                    },
                );
            }
            if habits.is_empty() {
                println!("No habits yet.");
            }
        }
        HabitAction::Mark { id } => match habits.toggle_today(&id, today) {
            Some(status) => {
                if status.completed_today {
                    println!("Marked done for today. Streak: {}", status.streak);
                } else {
                    println!("Undid today's mark. Streak: {}", status.streak);
                }
                store.save(&habits);
            }
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Rm { id } => {
            if habits.remove(&id) {
                println!("Habit deleted: {id}");
                store.save(&habits);
            } else {
                println!("Habit not found: {id}");
            }
        }
    }
    Ok(())
}
