//! Weekly planner commands.

use chrono::{Datelike, Local};
use clap::Subcommand;
use dayboard_core::{Day, KvStore, WeeklyPlan};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Add an entry to a day
    Add {
        /// Day name (sunday..saturday) or "today"
        day: String,
        /// Entry text
        text: String,
    },
    /// List the week's plan (or one day)
    List {
        /// Restrict to one day
        #[arg(long)]
        day: Option<String>,
    },
    /// Delete an entry from a day
    Rm {
        /// Day name (sunday..saturday) or "today"
        day: String,
        /// Entry ID
        id: String,
    },
}

fn parse_day(raw: &str) -> Result<Day, String> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(Day::from_weekday(Local::now().weekday()));
    }
    Day::parse(raw).ok_or_else(|| format!("unknown day: {raw}"))
}

fn print_day(plan: &WeeklyPlan, day: Day) {
    println!("{} ({})", day.label(), plan.entries(day).len());
    for entry in plan.entries(day) {
        println!("  {}  {}", entry.id, entry.text);
    }
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut plan = store.load::<WeeklyPlan>();

    match action {
        PlanAction::Add { day, text } => {
            let day = parse_day(&day)?;
            let entry = plan.add(day, &text)?;
            println!("Added to {}: {}", day.label(), entry.id);
            store.save(&plan);
        }
        PlanAction::List { day } => match day {
            Some(raw) => print_day(&plan, parse_day(&raw)?),
            None => {
                for (day, _) in plan.days() {
                    print_day(&plan, day);
                }
            }
        },
        PlanAction::Rm { day, id } => {
            let day = parse_day(&day)?;
            if plan.remove(day, &id) {
                println!("Removed from {}: {id}", day.label());
                store.save(&plan);
            } else {
                println!("Entry not found on {}: {id}", day.label());
            }
        }
    }
    Ok(())
}
