//! AI collaborator interfaces.
//!
//! Two opaque external services back the dashboard's AI widgets: a vision
//! model that estimates meal calories from a photo, and a text model that
//! looks up the configured club's next match. The core only depends on
//! the trait seams; the generative client is one implementation.

mod calories;
mod client;
mod next_match;

pub use calories::{CalorieEstimator, ImagePayload, MealEstimate, VisionCalorieEstimator};
pub use client::GenerativeClient;
pub use next_match::{AiMatchProvider, FixtureMatchProvider, MatchProvider, UpcomingMatch};
