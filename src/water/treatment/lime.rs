//! Lime softening.
//!
//! Slaked lime precipitates carbonic acid and bicarbonate as calcium carbonate:
//!
//! - H2CO3 + Ca(OH)2 -> 2 H2O + CaCO3
//! - 2 HCO3- + Ca(OH)2 + Ca2+ -> 2 H2O + 2 CaCO3
//!
//! The second reaction consumes calcium already in the water, so calcium-poor water cannot
//! be fully softened. Lime dosed beyond what the carbonates consume stays dissolved and is
//! accounted for as a plain calcium hydroxide salt addition.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chemistry::{
    BICARBONATE, CALCIUM, CALCIUM_CARBONATE, CarbonateSpecies, M_CAOH2, Salt,
};
use crate::quantity::{Mass, Volume};
use crate::water::profile::WaterProfile;
use crate::water::treatment::{SaltTreatment, WaterTreatment};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimeTreatment {
    /// Grams of Ca(OH)2 added to the whole batch.
    pub mass: Mass,
}

/// Bicarbonate and carbonic acid in solution (mmol/L).
fn carbonates(profile: &WaterProfile) -> (f64, f64) {
    let fractions = CarbonateSpecies::at_ph(profile.ph);
    let hco3 = profile.bicarbonate / BICARBONATE.molar_mass;
    let h2co3 = (hco3 / fractions.bicarbonate) * fractions.carbonic_acid;
    (hco3, h2co3)
}

impl LimeTreatment {
    pub fn new(mass: Mass) -> Self {
        Self { mass }
    }

    /// Largest useful Ca(OH)2 dose (mg/L) for `profile`.
    ///
    /// With enough calcium this precipitates all carbonic acid and bicarbonate; otherwise
    /// the dose is scaled down to the calcium available.
    pub fn maximum(profile: &WaterProfile) -> f64 {
        let (hco3, h2co3) = carbonates(profile);
        let caoh2 = hco3 / 2.0 + h2co3;
        let ca_required = hco3 / 2.0;
        let ca_available = profile.calcium / CALCIUM.molar_mass;
        if ca_available < ca_required {
            return (caoh2 / ca_required) * ca_available * M_CAOH2;
        }
        caoh2 * M_CAOH2
    }
}

impl WaterTreatment for LimeTreatment {
    fn transform(&self, profile: &mut WaterProfile, volume: Volume) {
        let caoh2 = self.mass.mg() / M_CAOH2 / volume.l(); // mmol/L
        let (hco3, h2co3) = carbonates(profile);
        let excess = caoh2 - (hco3 / 2.0 + h2co3);

        // Bicarbonate that can actually precipitate (mmol/L).
        let mut delta = hco3;
        if excess < 0.0 {
            let h_fraction = hco3 / (hco3 + 2.0 * h2co3);
            delta = 2.0 * caoh2 * h_fraction;
        }
        let ca_available = profile.calcium / CALCIUM.molar_mass;
        if ca_available < delta / 2.0 {
            delta = 2.0 * ca_available;
        }

        profile.calcium -= (delta / 2.0) * CALCIUM.molar_mass;
        profile.bicarbonate -= delta * BICARBONATE.molar_mass;
        profile.alkalinity -= delta * (CALCIUM_CARBONATE.molar_mass / 2.0);

        if excess > 0.0 {
            debug!(excess_mmol_l = excess, "lime dose exceeds carbonate demand");
            SaltTreatment::new(Salt::CalciumHydroxide, Mass::milligrams(excess * M_CAOH2))
                .transform(profile, Volume::liters(1.0));
        }
    }
}
