use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::quantity::Volume;
use crate::water::profile::WaterProfile;
use crate::water::treatment::Treatment;

/// A source water and the treatments to run on it, in order.
///
/// `profile` accepts a partial report and is completed by attribute inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    /// Batch volume (L).
    pub volume: Volume,
    #[serde(default)]
    pub profile: WaterProfile,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
}

impl TreatmentPlan {
    pub fn with_volume(mut self, volume: Option<Volume>) -> Self {
        if let Some(v) = volume {
            self.volume = v;
        }
        self
    }

    /// Runs the plan, rejecting batch volumes the chemistry cannot divide by.
    pub fn execute(&self) -> Result<WaterProfile, AppError> {
        let liters = self.volume.l();
        if !liters.is_finite() || liters <= 0.0 {
            return Err(AppError::InvalidVolume(liters));
        }
        Ok(self.profile.treat(self.volume, &self.treatments))
    }
}
