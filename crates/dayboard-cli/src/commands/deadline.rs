//! Deadline commands, including the live countdown watch.

use std::io::Write as _;

use chrono::Utc;
use clap::Subcommand;
use dayboard_core::{
    parse_instant, Config, CountdownEngine, DeadlineBook, DeadlineKind, KvStore, Urgency,
};

#[derive(Subcommand)]
pub enum DeadlineAction {
    /// Add a deadline
    Add {
        /// Subject name
        subject: String,
        /// Due instant: RFC 3339 or YYYY-MM-DD (local midnight)
        due: String,
        /// Kind: exam, assignment, project, or other (default: assignment)
        #[arg(long, default_value = "assignment")]
        kind: String,
    },
    /// List deadlines with their countdowns
    List,
    /// Delete a deadline
    Rm {
        /// Deadline ID
        id: String,
    },
    /// Tick a live countdown until the deadline passes
    Watch {
        /// Deadline ID
        id: String,
        /// Stop after this many ticks (default: run until past)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn parse_kind(raw: &str) -> DeadlineKind {
    match raw.to_lowercase().as_str() {
        "exam" => DeadlineKind::Exam,
        "project" => DeadlineKind::Project,
        "other" => DeadlineKind::Other,
        _ => DeadlineKind::Assignment,
    }
}

fn format_countdown(countdown: &dayboard_core::Countdown) -> String {
    if countdown.is_past {
        "past".to_string()
    } else {
        format!(
            "{}d {:02}:{:02}:{:02}",
            countdown.days, countdown.hours, countdown.minutes, countdown.seconds
        )
    }
}

pub fn run(action: DeadlineAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut book = store.load::<DeadlineBook>();

    match action {
        DeadlineAction::Add { subject, due, kind } => {
            let due_at = parse_instant(&due)
                .ok_or_else(|| format!("cannot parse due instant: {due}"))?;
            let deadline = book.add(&subject, parse_kind(&kind), due_at)?;
            println!("Deadline added: {}", deadline.id);
            println!("{}", serde_json::to_string_pretty(deadline)?);
            store.save(&book);
        }
        DeadlineAction::List => {
            let now = Utc::now();
            for deadline in book.iter() {
                let countdown = deadline.countdown_at(now);
                println!(
                    "{}  {:<12} {:<24} {:<12} {}",
                    deadline.id,
                    deadline.kind.label(),
                    deadline.subject,
                    format!("{:?}", Urgency::of(&countdown)).to_lowercase(),
                    format_countdown(&countdown),
                );
            }
            if book.is_empty() {
                println!("No deadlines. All clear!");
            }
        }
        DeadlineAction::Rm { id } => {
            if book.remove(&id) {
                println!("Deadline deleted: {id}");
                store.save(&book);
            } else {
                println!("Deadline not found: {id}");
            }
        }
        DeadlineAction::Watch { id, ticks } => {
            let deadline = book
                .get(&id)
                .ok_or_else(|| format!("Deadline not found: {id}"))?;
            let tick_secs = Config::load_or_default().countdown.tick_secs.max(1);

            let mut engine = CountdownEngine::new(deadline.due_at);
            let mut remaining_ticks = ticks;
            loop {
                let countdown = engine.tick();
                print!("\r{}: {}    ", deadline.subject, format_countdown(&countdown));
                std::io::stdout().flush()?;

                if engine.is_done() {
                    println!();
                    println!("Time's up!");
                    break;
                }
                if let Some(left) = remaining_ticks.as_mut() {
                    if *left <= 1 {
                        println!();
                        break;
                    }
                    *left -= 1;
                }
                std::thread::sleep(std::time::Duration::from_secs(tick_secs));
            }
        }
    }
    Ok(())
}
