use serde::{Deserialize, Serialize};

use crate::quantity::{Percent, Volume};
use crate::water::profile::WaterProfile;
use crate::water::treatment::WaterTreatment;

/// Replaces `percentage` of the water with a reference water, distilled by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DilutionTreatment {
    pub percentage: Percent,
    #[serde(default = "WaterProfile::distilled")]
    pub reference: WaterProfile,
}

impl DilutionTreatment {
    pub fn new(percentage: Percent) -> Self {
        Self::with_reference(percentage, WaterProfile::distilled())
    }

    pub fn with_reference(percentage: Percent, reference: WaterProfile) -> Self {
        Self {
            percentage,
            reference,
        }
    }
}

impl WaterTreatment for DilutionTreatment {
    fn transform(&self, profile: &mut WaterProfile, _volume: Volume) {
        let a = self.percentage / 100.0;
        let b = 1.0 - a;
        let r = &self.reference;
        let blend = |reference: f64, current: f64| reference * a + current * b;
        profile.calcium = blend(r.calcium, profile.calcium);
        profile.magnesium = blend(r.magnesium, profile.magnesium);
        profile.sodium = blend(r.sodium, profile.sodium);
        profile.chloride = blend(r.chloride, profile.chloride);
        profile.sulphate = blend(r.sulphate, profile.sulphate);
        profile.bicarbonate = blend(r.bicarbonate, profile.bicarbonate);
        profile.alkalinity = blend(r.alkalinity, profile.alkalinity);
    }
}
