use serde::{Deserialize, Serialize};

use crate::chemistry::{Acid, AcidBlend, AcidSolution, BICARBONATE, CALCIUM_CARBONATE};
use crate::quantity::{Mass, Volume};
use crate::water::profile::WaterProfile;
use crate::water::treatment::WaterTreatment;

/// A single acid or a commercial blend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidSource {
    Acid(Acid),
    Blend(AcidBlend),
}

/// How much acid is added: pure mass, or a measured volume of solution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidQuantity {
    Mass(Mass),
    Solution(AcidSolution),
}

/// Neutralizes alkalinity with an acid addition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcidTreatment {
    pub acid: AcidSource,
    pub quantity: AcidQuantity,
}

impl AcidTreatment {
    pub fn new(acid: impl Into<AcidSource>, quantity: impl Into<AcidQuantity>) -> Self {
        Self {
            acid: acid.into(),
            quantity: quantity.into(),
        }
    }

    fn apply(profile: &mut WaterProfile, acid: Acid, weight: Mass, volume: Volume) {
        let delta = acid.normality(weight, volume) * 1000.0; // mEq/L
        profile.alkalinity -= delta * CALCIUM_CARBONATE.equivalent_weight;
        profile.bicarbonate =
            (profile.bicarbonate - delta * BICARBONATE.equivalent_weight).max(0.0);
        for ion in acid.contributions() {
            if let Some(field) = ion.field {
                *profile.field_mut(field) += delta * ion.equivalent_weight;
            }
        }
    }
}

impl WaterTreatment for AcidTreatment {
    fn transform(&self, profile: &mut WaterProfile, volume: Volume) {
        match self.acid {
            AcidSource::Acid(acid) => {
                let weight = match &self.quantity {
                    AcidQuantity::Mass(mass) => *mass,
                    AcidQuantity::Solution(sol) => acid.mass(sol),
                };
                Self::apply(profile, acid, weight, volume);
            }
            AcidSource::Blend(blend) => {
                let components = blend.components();
                for &(acid, concentration) in components {
                    // A solution volume is shared between components; an explicit mass
                    // is applied in full to each one.
                    let weight = match &self.quantity {
                        AcidQuantity::Mass(mass) => *mass,
                        AcidQuantity::Solution(sol) => acid.mass(&AcidSolution {
                            volume: Volume::liters(sol.volume.l() / components.len() as f64),
                            concentration,
                        }),
                    };
                    Self::apply(profile, acid, weight, volume);
                }
            }
        }
    }
}

impl From<Acid> for AcidSource {
    fn from(acid: Acid) -> Self {
        AcidSource::Acid(acid)
    }
}

impl From<AcidBlend> for AcidSource {
    fn from(blend: AcidBlend) -> Self {
        AcidSource::Blend(blend)
    }
}

impl From<Mass> for AcidQuantity {
    fn from(mass: Mass) -> Self {
        AcidQuantity::Mass(mass)
    }
}

impl From<AcidSolution> for AcidQuantity {
    fn from(sol: AcidSolution) -> Self {
        AcidQuantity::Solution(sol)
    }
}
