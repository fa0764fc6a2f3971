use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::chemistry::{
    BICARBONATE, CALCIUM, CALCIUM_CARBONATE, CHLORIDE, MAGNESIUM, ProfileField, SODIUM,
    SULPHATE, round_to,
};
use crate::quantity::Volume;
use crate::water::fragment::{DEFAULT_PH, WaterFragment};
use crate::water::treatment::{Treatment, WaterTreatment};

/// Keeps the sulphate to chloride ratio finite (and 1.0) for mineral-free water.
const RATIO_EPSILON: f64 = 1e-12;

/// Fully populated water profile.
///
/// Concentrations are ppm, alkalinity is ppm as CaCO3. Deserializing runs the input
/// through [`WaterFragment::resolve`], so partial reports are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WaterFragment")]
pub struct WaterProfile {
    pub calcium: f64,
    pub magnesium: f64,
    pub sodium: f64,
    pub chloride: f64,
    pub sulphate: f64,
    pub bicarbonate: f64,
    pub alkalinity: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
}

impl Default for WaterProfile {
    fn default() -> Self {
        Self {
            calcium: 0.0,
            magnesium: 0.0,
            sodium: 0.0,
            chloride: 0.0,
            sulphate: 0.0,
            bicarbonate: 0.0,
            alkalinity: 0.0,
            ph: DEFAULT_PH,
        }
    }
}

impl From<WaterFragment> for WaterProfile {
    fn from(fragment: WaterFragment) -> Self {
        let ft = fragment.resolve();
        let base = WaterProfile::default();
        Self {
            calcium: ft.calcium.unwrap_or(base.calcium),
            magnesium: ft.magnesium.unwrap_or(base.magnesium),
            sodium: ft.sodium.unwrap_or(base.sodium),
            chloride: ft.chloride.unwrap_or(base.chloride),
            sulphate: ft.sulphate.unwrap_or(base.sulphate),
            bicarbonate: ft.bicarbonate.unwrap_or(base.bicarbonate),
            alkalinity: ft.alkalinity.unwrap_or(base.alkalinity),
            ph: ft.ph.unwrap_or(base.ph),
        }
    }
}

/// Profile plus its derived metrics, as reported to callers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    #[serde(flatten)]
    pub profile: WaterProfile,
    pub hardness: f64,
    pub residual_alkalinity: f64,
    pub sulphate_chloride_ratio: f64,
    pub cations_meq_l: f64,
    pub anions_meq_l: f64,
}

impl WaterProfile {
    pub fn new(fragment: WaterFragment) -> Self {
        fragment.into()
    }

    /// Mineral-free reverse-osmosis or distilled water.
    pub fn distilled() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::Calcium => self.calcium,
            ProfileField::Magnesium => self.magnesium,
            ProfileField::Sodium => self.sodium,
            ProfileField::Chloride => self.chloride,
            ProfileField::Sulphate => self.sulphate,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut f64 {
        match field {
            ProfileField::Calcium => &mut self.calcium,
            ProfileField::Magnesium => &mut self.magnesium,
            ProfileField::Sodium => &mut self.sodium,
            ProfileField::Chloride => &mut self.chloride,
            ProfileField::Sulphate => &mut self.sulphate,
        }
    }

    /// Rounds every concentration to a whole ppm; pH is kept as is.
    pub fn round(mut self) -> Self {
        for value in [
            &mut self.calcium,
            &mut self.magnesium,
            &mut self.sodium,
            &mut self.chloride,
            &mut self.sulphate,
            &mut self.bicarbonate,
            &mut self.alkalinity,
        ] {
            *value = round_to(*value, 0);
        }
        self
    }

    /// Total hardness as CaCO3 (ppm).
    pub fn hardness(&self) -> f64 {
        let hardness = CALCIUM_CARBONATE.molar_mass
            * (self.calcium / CALCIUM.molar_mass + self.magnesium / MAGNESIUM.molar_mass);
        round_to(hardness, 0)
    }

    /// Sulphate to chloride ratio.
    pub fn ratio(&self) -> f64 {
        round_to(
            (self.sulphate + RATIO_EPSILON) / (self.chloride + RATIO_EPSILON),
            2,
        )
    }

    /// Residual alkalinity as CaCO3 (ppm).
    pub fn ra(&self) -> f64 {
        round_to(
            self.alkalinity - self.calcium / 1.4 - self.magnesium / 1.7,
            0,
        )
    }

    /// Cations (mEq/L).
    pub fn cation(&self) -> f64 {
        round_to(
            self.calcium / CALCIUM.equivalent_weight
                + self.magnesium / MAGNESIUM.equivalent_weight
                + self.sodium / SODIUM.equivalent_weight,
            1,
        )
    }

    /// Anions (mEq/L).
    pub fn anion(&self) -> f64 {
        round_to(
            self.bicarbonate / BICARBONATE.equivalent_weight
                + self.chloride / CHLORIDE.equivalent_weight
                + self.sulphate / SULPHATE.equivalent_weight,
            1,
        )
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            profile: self.clone(),
            hardness: self.hardness(),
            residual_alkalinity: self.ra(),
            sulphate_chloride_ratio: self.ratio(),
            cations_meq_l: self.cation(),
            anions_meq_l: self.anion(),
        }
    }

    /// Simulates `treatments` in order on a copy of this profile.
    ///
    /// Each step sees the cumulative result of the steps before it. The result is rounded;
    /// `self` is left untouched.
    pub fn treat(&self, volume: Volume, treatments: &[Treatment]) -> WaterProfile {
        let mut result = self.clone();
        for (step, treatment) in treatments.iter().enumerate() {
            treatment.transform(&mut result, volume);
            trace!(step, ?treatment, alkalinity = result.alkalinity, "applied treatment");
        }
        result.round()
    }
}
