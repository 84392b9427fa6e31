//! Next-match lookup commands.

use chrono::Utc;
use clap::Subcommand;
use dayboard_core::{
    AiMatchProvider, Config, FixtureMatchProvider, GenerativeClient, MatchProvider, UpcomingMatch,
};

#[derive(Subcommand)]
pub enum MatchAction {
    /// Look up the configured team's next match
    Next {
        /// Read fixtures from a JSON file instead of asking the AI
        #[arg(long)]
        fixtures: Option<String>,
    },
}

pub fn run(action: MatchAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MatchAction::Next { fixtures } => {
            let result = match fixtures {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)?;
                    let list: Vec<UpcomingMatch> = serde_json::from_str(&text)?;
                    FixtureMatchProvider::new(list).next_match(Utc::now())
                }
                None => {
                    let config = Config::load_or_default();
                    let client = GenerativeClient::from_config(&config.ai)?;
                    AiMatchProvider::new(client, config.ai.team).next_match(Utc::now())
                }
            };

            match result {
                Ok(Some(upcoming)) => {
                    println!("{}", serde_json::to_string_pretty(&upcoming)?);
                }
                Ok(None) => {
                    println!("No confirmed upcoming match.");
                }
                Err(e) => {
                    eprintln!("Could not fetch the next match ({e}). Please try again.");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
