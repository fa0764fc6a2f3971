#[cfg(feature = "cli")]
pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod quantity;
pub mod water;

pub use crate::chemistry::{Acid, AcidBlend, AcidSolution, CarbonateSpecies, Salt};
pub use crate::error::AppError;
pub use crate::models::TreatmentPlan;
pub use crate::quantity::{Mass, Percent, Volume};
pub use crate::water::fragment::{
    WaterFragment, estimate_alkalinity, estimate_bicarbonate, estimate_ph,
};
pub use crate::water::profile::{ProfileSummary, WaterProfile};
pub use crate::water::treatment::{
    AcidQuantity, AcidSource, AcidTreatment, BoilTreatment, DilutionTreatment, LimeTreatment,
    SaltTreatment, Treatment, WaterTreatment,
};
