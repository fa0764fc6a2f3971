use serde::{Deserialize, Serialize};

use crate::chemistry::{BICARBONATE, CALCIUM, CALCIUM_CARBONATE};
use crate::quantity::Volume;
use crate::water::profile::WaterProfile;
use crate::water::treatment::WaterTreatment;

/// Carbonate alkalinity (mmol/L as CaCO3) left in solution after a long boil.
pub const BOIL_FLOOR_MMOL_L: f64 = 0.6;

/// Boiling precipitates calcium carbonate, removing calcium and alkalinity together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilTreatment;

impl WaterTreatment for BoilTreatment {
    fn transform(&self, profile: &mut WaterProfile, _volume: Volume) {
        let ca = profile.calcium / CALCIUM.molar_mass; // mmol/L
        let caco3 = profile.alkalinity / CALCIUM_CARBONATE.molar_mass; // mmol/L
        // Precipitation stops at the floor or when calcium runs out.
        let delta = (caco3 - BOIL_FLOOR_MMOL_L).min(ca);
        if delta < 0.0 {
            return;
        }
        profile.calcium -= delta * CALCIUM.molar_mass;
        profile.bicarbonate -= 2.0 * delta * BICARBONATE.molar_mass;
        profile.alkalinity -= delta * CALCIUM_CARBONATE.molar_mass;
    }
}
