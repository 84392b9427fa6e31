//! Next-match lookup for the configured club.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::GenerativeClient;
use crate::error::AiError;

/// One confirmed upcoming fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingMatch {
    pub id: String,
    pub opponent: String,
    pub competition: String,
    pub kickoff: DateTime<Utc>,
}

/// Next-match seam. `Ok(None)` means "no confirmed upcoming match" and is
/// a normal answer, not an error.
pub trait MatchProvider {
    fn next_match(&self, after: DateTime<Utc>) -> Result<Option<UpcomingMatch>, AiError>;
}

/// Provider backed by the generative endpoint.
pub struct AiMatchProvider {
    client: GenerativeClient,
    team: String,
}

impl AiMatchProvider {
    pub fn new(client: GenerativeClient, team: impl Into<String>) -> Self {
        Self {
            client,
            team: team.into(),
        }
    }

    fn prompt(&self, after: DateTime<Utc>) -> String {
        format!(
            "You are a sports data expert. Provide the details of the very next official \
match of {team} scheduled after {after} (league, cup, or friendly -- whichever comes \
first, even if weeks or months away). Respond with strict JSON of the shape \
{{\"id\": string, \"opponent\": string, \"competition\": string, \"kickoff\": string}} \
where kickoff is a UTC ISO 8601 instant, or the JSON literal null if no future match \
is known from reliable sources.",
            team = self.team,
            after = after.to_rfc3339(),
        )
    }
}

impl MatchProvider for AiMatchProvider {
    fn next_match(&self, after: DateTime<Utc>) -> Result<Option<UpcomingMatch>, AiError> {
        let text = self
            .client
            .generate(vec![GenerativeClient::text_part(&self.prompt(after))])?;

        let trimmed = text.trim();
        if trimmed == "null" {
            return Ok(None);
        }

        // Structured-but-empty answers count as "no match", as the widget
        // would rather show its empty state than a blank opponent.
        #[derive(Deserialize)]
        struct RawMatch {
            #[serde(default)]
            id: String,
            #[serde(default)]
            opponent: String,
            #[serde(default)]
            competition: String,
            kickoff: Option<DateTime<Utc>>,
        }

        let raw: RawMatch = serde_json::from_str(trimmed)
            .map_err(|e| AiError::Malformed(format!("match payload: {e}")))?;

        let Some(kickoff) = raw.kickoff else {
            eprintln!("Warning: next-match answer had no kickoff instant, treating as none");
            return Ok(None);
        };
        if raw.opponent.trim().is_empty() || raw.competition.trim().is_empty() {
            eprintln!("Warning: next-match answer was incomplete, treating as none");
            return Ok(None);
        }

        Ok(Some(UpcomingMatch {
            id: if raw.id.is_empty() {
                format!("match-{}", kickoff.timestamp())
            } else {
                raw.id
            },
            opponent: raw.opponent,
            competition: raw.competition,
            kickoff,
        }))
    }
}

/// Deterministic provider over a fixed fixture list (tests, offline use).
#[derive(Debug, Clone, Default)]
pub struct FixtureMatchProvider {
    fixtures: Vec<UpcomingMatch>,
}

impl FixtureMatchProvider {
    pub fn new(mut fixtures: Vec<UpcomingMatch>) -> Self {
        fixtures.sort_by_key(|fixture| fixture.kickoff);
        Self { fixtures }
    }
}

impl MatchProvider for FixtureMatchProvider {
    fn next_match(&self, after: DateTime<Utc>) -> Result<Option<UpcomingMatch>, AiError> {
        Ok(self
            .fixtures
            .iter()
            .find(|fixture| fixture.kickoff > after)
            .cloned())
    }
}
