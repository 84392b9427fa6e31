//! Meal calorie estimation from a photo.

use serde::{Deserialize, Serialize};

use super::client::GenerativeClient;
use crate::error::{AiError, ValidationError};

/// Largest accepted image payload, matching the upload form's cap.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// An image ready to be sent to the vision model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    mime: String,
    bytes: Vec<u8>,
}

impl ImagePayload {
    /// # Errors
    /// Rejects non-image MIME types and payloads over [`MAX_IMAGE_BYTES`].
    pub fn new(mime: &str, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        if !mime.starts_with("image/") {
            return Err(ValidationError::NotAnImage { mime: mime.into() });
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ValidationError::ImageTooLarge {
                bytes: bytes.len(),
                max: MAX_IMAGE_BYTES,
            });
        }
        Ok(Self {
            mime: mime.into(),
            bytes,
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// What the model saw and how many calories it thinks that is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEstimate {
    pub description: String,
    pub calories: f64,
}

/// Calorie estimation seam. A failure means "try again", nothing more.
pub trait CalorieEstimator {
    fn estimate(&self, image: &ImagePayload) -> Result<MealEstimate, AiError>;
}

const PROMPT: &str = "You are an expert nutritionist. Analyze the image of the meal provided \
and identify all the food items. Based on the food items and their estimated portion sizes, \
provide an accurate approximation of the total calorie count. Respond with a strict JSON \
object of the shape {\"description\": string, \"calories\": number} and nothing else.";

/// Estimator backed by the generative vision endpoint.
pub struct VisionCalorieEstimator {
    client: GenerativeClient,
}

impl VisionCalorieEstimator {
    pub fn new(client: GenerativeClient) -> Self {
        Self { client }
    }
}

impl CalorieEstimator for VisionCalorieEstimator {
    fn estimate(&self, image: &ImagePayload) -> Result<MealEstimate, AiError> {
        let text = self.client.generate(vec![
            GenerativeClient::text_part(PROMPT),
            GenerativeClient::image_part(image.mime(), image.bytes()),
        ])?;

        let estimate: MealEstimate = serde_json::from_str(&text)
            .map_err(|e| AiError::Malformed(format!("estimate payload: {e}")))?;

        if estimate.description.trim().is_empty() || !estimate.calories.is_finite() {
            return Err(AiError::Malformed("incomplete estimate".into()));
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_rejects_non_images() {
        assert!(matches!(
            ImagePayload::new("application/pdf", vec![1]),
            Err(ValidationError::NotAnImage { .. })
        ));
    }

    #[test]
    fn payload_rejects_oversize_images() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(matches!(
            ImagePayload::new("image/jpeg", big),
            Err(ValidationError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn payload_accepts_a_small_image() {
        let payload = ImagePayload::new("image/png", vec![1, 2, 3]).unwrap();
        assert_eq!(payload.mime(), "image/png");
        assert_eq!(payload.bytes(), &[1, 2, 3]);
    }
}
