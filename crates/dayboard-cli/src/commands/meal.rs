//! AI calorie estimation commands.

use std::path::Path;

use clap::Subcommand;
use dayboard_core::{
    CalorieEstimator, Config, GenerativeClient, ImagePayload, VisionCalorieEstimator,
};

#[derive(Subcommand)]
pub enum MealAction {
    /// Estimate calories from a meal photo
    Estimate {
        /// Path to the image file (jpeg, png, webp, or gif)
        image: String,
    },
}

fn mime_for(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_lowercase()
        .as_str()
    {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub fn run(action: MealAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MealAction::Estimate { image } => {
            let path = Path::new(&image);
            let mime =
                mime_for(path).ok_or_else(|| format!("not a supported image file: {image}"))?;
            let bytes = std::fs::read(path)?;
            let payload = ImagePayload::new(mime, bytes)?;

            let config = Config::load_or_default();
            let client = GenerativeClient::from_config(&config.ai)?;
            let estimator = VisionCalorieEstimator::new(client);

            match estimator.estimate(&payload) {
                Ok(estimate) => {
                    println!("{}", estimate.description);
                    println!("Estimated calories: {:.0} kcal", estimate.calories);
                }
                Err(e) => {
                    // Estimation failures are retryable, not fatal.
                    eprintln!("Could not estimate this photo ({e}). Please try again.");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
