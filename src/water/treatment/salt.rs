use serde::{Deserialize, Serialize};

use crate::chemistry::{BICARBONATE, CALCIUM_CARBONATE, Salt};
use crate::quantity::{Mass, Volume};
use crate::water::profile::WaterProfile;
use crate::water::treatment::WaterTreatment;

/// Dissolves `mass` of a mineral salt into the batch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaltTreatment {
    pub salt: Salt,
    /// Grams added to the whole batch.
    pub mass: Mass,
}

impl SaltTreatment {
    pub fn new(salt: Salt, mass: Mass) -> Self {
        Self { salt, mass }
    }
}

impl WaterTreatment for SaltTreatment {
    fn transform(&self, profile: &mut WaterProfile, volume: Volume) {
        let delta = self.mass.g() / volume.l(); // g/L
        for c in self.salt.contributions() {
            if let Some(field) = c.ion.field {
                *profile.field_mut(field) += c.ppm * delta;
            }
        }
        let bicarbonate = self.salt.bicarbonate();
        profile.bicarbonate += bicarbonate * delta;
        profile.alkalinity += (bicarbonate / BICARBONATE.equivalent_weight)
            * CALCIUM_CARBONATE.equivalent_weight
            * delta;
    }
}
