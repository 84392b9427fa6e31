//! Health tracking commands.

use chrono::Utc;
use clap::Subcommand;
use dayboard_core::{HealthProfile, KvStore};

#[derive(Subcommand)]
pub enum HealthAction {
    /// Set height and target weight (and optionally re-base the initial weight)
    Info {
        /// Height in centimeters
        #[arg(long)]
        height: f64,
        /// Target weight in kilograms
        #[arg(long)]
        target: f64,
        /// Explicitly override the initial weight
        #[arg(long)]
        initial: Option<f64>,
    },
    /// Record today's weight in kilograms
    Weigh {
        /// Weight in kilograms
        kg: f64,
    },
    /// Show current weight, BMI, and progress toward the target
    Show,
    /// Print the weight series as JSON
    History,
}

pub fn run(action: HealthAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KvStore::open()?;
    let mut profile = store.load::<HealthProfile>();

    match action {
        HealthAction::Info {
            height,
            target,
            initial,
        } => {
            profile.set_info(height, target)?;
            if let Some(kg) = initial {
                profile.set_initial_weight(kg)?;
            }
            println!("Health info updated");
            store.save(&profile);
        }
        HealthAction::Weigh { kg } => {
            profile.record_weight(kg, Utc::now())?;
            println!("Recorded {kg:.1} kg");
            store.save(&profile);
        }
        HealthAction::Show => {
            let current = profile.current_weight();
            if current > 0.0 {
                println!("Current weight: {current:.1} kg");
            } else {
                println!("Current weight: -");
            }
            match (profile.bmi(), profile.bmi_category()) {
                (Some(bmi), Some(category)) => {
                    println!("BMI: {bmi:.1} ({})", category.label())
                }
                _ => println!("BMI: N/A"),
            }
            println!(
                "Progress: {:.0}% (start {:.1} kg, target {:.1} kg)",
                profile.progress_pct(),
                profile.initial_weight_kg,
                profile.target_weight_kg,
            );
        }
        HealthAction::History => {
            println!("{}", serde_json::to_string_pretty(&profile.entries)?);
        }
    }
    Ok(())
}
