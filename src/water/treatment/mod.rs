//! Water treatments.
//!
//! A treatment mutates a working profile in place for a given batch volume. Treatments are
//! immutable and reusable; they do not commute, so [`WaterProfile::treat`] applies them
//! strictly in the order given.
//!
//! [`WaterProfile::treat`]: crate::water::profile::WaterProfile::treat
pub mod acid;
pub mod boil;
pub mod dilution;
pub mod lime;
pub mod salt;

pub use acid::{AcidQuantity, AcidSource, AcidTreatment};
pub use boil::BoilTreatment;
pub use dilution::DilutionTreatment;
pub use lime::LimeTreatment;
pub use salt::SaltTreatment;

use serde::{Deserialize, Serialize};

use crate::quantity::Volume;
use crate::water::profile::WaterProfile;

pub trait WaterTreatment {
    /// Applies the treatment to `profile`, treating `volume` of water.
    fn transform(&self, profile: &mut WaterProfile, volume: Volume);
}

/// One step of a treatment plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Boil(BoilTreatment),
    Salt(SaltTreatment),
    Acid(AcidTreatment),
    Dilution(DilutionTreatment),
    Lime(LimeTreatment),
}

impl WaterTreatment for Treatment {
    fn transform(&self, profile: &mut WaterProfile, volume: Volume) {
        match self {
            Treatment::Boil(t) => t.transform(profile, volume),
            Treatment::Salt(t) => t.transform(profile, volume),
            Treatment::Acid(t) => t.transform(profile, volume),
            Treatment::Dilution(t) => t.transform(profile, volume),
            Treatment::Lime(t) => t.transform(profile, volume),
        }
    }
}

impl From<BoilTreatment> for Treatment {
    fn from(t: BoilTreatment) -> Self {
        Treatment::Boil(t)
    }
}

impl From<SaltTreatment> for Treatment {
    fn from(t: SaltTreatment) -> Self {
        Treatment::Salt(t)
    }
}

impl From<AcidTreatment> for Treatment {
    fn from(t: AcidTreatment) -> Self {
        Treatment::Acid(t)
    }
}

impl From<DilutionTreatment> for Treatment {
    fn from(t: DilutionTreatment) -> Self {
        Treatment::Dilution(t)
    }
}

impl From<LimeTreatment> for Treatment {
    fn from(t: LimeTreatment) -> Self {
        Treatment::Lime(t)
    }
}
