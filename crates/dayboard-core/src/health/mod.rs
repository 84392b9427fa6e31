//! Health metrics: weight history, BMI banding, goal progress.
//!
//! All derived values (current weight, BMI, progress) are recomputed from
//! the raw history on demand; nothing derived is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::Persisted;

/// One weight measurement. At most one entry survives per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub at: DateTime<Utc>,
    pub weight_kg: f64,
}

/// Height, weight goal, and the recorded weight series.
///
/// `initial_weight_kg` is set automatically by the very first entry ever
/// recorded; after that, entry insertion never touches it (only the
/// explicit info-edit path can).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub initial_weight_kg: f64,
    #[serde(default)]
    pub target_weight_kg: f64,
    /// Sorted ascending by timestamp.
    #[serde(default)]
    pub entries: Vec<WeightEntry>,
}

impl Persisted for HealthProfile {
    const KEY: &'static str = "health_info";
    const VERSION: u32 = 1;
}

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// <18.5 underweight, [18.5, 25) normal, [25, 30) overweight, >=30 obese.
    pub fn of(bmi: f64) -> BmiCategory {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl HealthProfile {
    /// Weight of the most recent entry, or the initial weight when the
    /// history is empty.
    pub fn current_weight(&self) -> f64 {
        self.entries
            .last()
            .map(|entry| entry.weight_kg)
            .unwrap_or(self.initial_weight_kg)
    }

    /// Body-mass index, or `None` ("N/A") when height or current weight
    /// is unset/non-positive.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.current_weight();
        if self.height_cm <= 0.0 || weight <= 0.0 {
            return None;
        }
        let meters = self.height_cm / 100.0;
        Some(weight / (meters * meters))
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::of)
    }

    /// Progress toward the target weight, clamped to [0, 100].
    ///
    /// Numerator and denominator flip sign together, so both weight-loss
    /// and weight-gain goals land in the same [0, 100] range; overshoot
    /// past the target reports as 100, never more.
    pub fn progress_pct(&self) -> f64 {
        let current = self.current_weight();
        if self.initial_weight_kg <= 0.0 || self.target_weight_kg <= 0.0 || current <= 0.0 {
            return 0.0;
        }
        if self.initial_weight_kg == self.target_weight_kg {
            return if current == self.target_weight_kg {
                100.0
            } else {
                0.0
            };
        }
        let total = self.initial_weight_kg - self.target_weight_kg;
        let travelled = self.initial_weight_kg - current;
        (travelled / total * 100.0).clamp(0.0, 100.0)
    }

    /// Record a weight measurement at `at`.
    ///
    /// An entry on the same calendar day is replaced, so the series keeps
    /// one point per day. The very first entry ever (empty history, unset
    /// initial weight) also becomes the initial weight.
    ///
    /// # Errors
    /// Rejects non-positive weights.
    pub fn record_weight(
        &mut self,
        weight_kg: f64,
        at: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if weight_kg <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "weight_kg",
                value: weight_kg,
            });
        }

        let first_ever = self.entries.is_empty() && self.initial_weight_kg <= 0.0;

        let day = at.date_naive();
        self.entries.retain(|entry| entry.at.date_naive() != day);
        self.entries.push(WeightEntry { at, weight_kg });
        self.entries.sort_by_key(|entry| entry.at);

        if first_ever {
            self.initial_weight_kg = weight_kg;
        }
        Ok(())
    }

    /// Explicit info-edit path: height and target weight.
    ///
    /// # Errors
    /// Rejects non-positive values.
    pub fn set_info(&mut self, height_cm: f64, target_weight_kg: f64) -> Result<(), ValidationError> {
        if height_cm <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "height_cm",
                value: height_cm,
            });
        }
        if target_weight_kg <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "target_weight_kg",
                value: target_weight_kg,
            });
        }
        self.height_cm = height_cm;
        self.target_weight_kg = target_weight_kg;
        Ok(())
    }

    /// Explicit info-edit path for the otherwise-immutable initial weight.
    ///
    /// # Errors
    /// Rejects non-positive values.
    pub fn set_initial_weight(&mut self, weight_kg: f64) -> Result<(), ValidationError> {
        if weight_kg <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "initial_weight_kg",
                value: weight_kg,
            });
        }
        self.initial_weight_kg = weight_kg;
        Ok(())
    }
}
