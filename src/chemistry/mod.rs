//! Chemistry module: constants and leaf helpers for brewing water ion chemistry.
//!
//! This module provides:
//! - The ion table (molar masses and equivalent weights) shared by every other component
//! - Carbonate system speciation for a given pH ([`carbonate`])
//! - Acid species and acid blends used to reduce alkalinity ([`acid`])
//! - The catalogue of mineral salts used to build up a profile ([`salt`])
//! - A decimal rounding helper matching the precision profiles are reported with
//!
//! Units conventions:
//! - Ion concentrations are ppm (mg/L)
//! - Alkalinity and hardness are ppm as CaCO3
//! - Molar masses are g/mol, equivalent weights g/eq (numerically mg/mEq)
//!
//! # Panics
//! None of the functions panic.
//!
//! # Errors
//! No error types produced; the chemistry is total over finite inputs.
//!
//! # Examples
//! ```rust
//! use brewwater_rs::chemistry::{CALCIUM, CALCIUM_CARBONATE, MAGNESIUM, round_to};
//!
//! // Total hardness of 100 ppm calcium and 5 ppm magnesium, as CaCO3.
//! let hardness = CALCIUM_CARBONATE.molar_mass
//!     * (100.0 / CALCIUM.molar_mass + 5.0 / MAGNESIUM.molar_mass);
//! assert_eq!(round_to(hardness, 0), 270.0);
//! ```
pub mod acid;
pub mod carbonate;
pub mod salt;

pub use acid::{Acid, AcidBlend, AcidSolution};
pub use carbonate::CarbonateSpecies;
pub use salt::{Salt, SaltContribution};

use serde::{Deserialize, Serialize};

/// Profile attribute an ion contributes to when it is added to water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Calcium,
    Magnesium,
    Sodium,
    Chloride,
    Sulphate,
}

/// A dissolved ion species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ion {
    /// Display formula.
    pub formula: &'static str,
    /// Molar mass (g/mol).
    pub molar_mass: f64,
    /// Equivalent weight (g/eq).
    pub equivalent_weight: f64,
    /// Profile attribute fed by this ion; `None` for carbonate-system intermediates.
    pub field: Option<ProfileField>,
}

pub const CALCIUM: Ion = Ion {
    formula: "Ca²⁺",
    molar_mass: 40.078,
    equivalent_weight: 20.039,
    field: Some(ProfileField::Calcium),
};

pub const MAGNESIUM: Ion = Ion {
    formula: "Mg²⁺",
    molar_mass: 24.305,
    equivalent_weight: 12.1525,
    field: Some(ProfileField::Magnesium),
};

pub const SODIUM: Ion = Ion {
    formula: "Na⁺",
    molar_mass: 22.99,
    equivalent_weight: 22.99,
    field: Some(ProfileField::Sodium),
};

pub const SULPHATE: Ion = Ion {
    formula: "SO₄²⁻",
    molar_mass: 96.06,
    equivalent_weight: 48.03,
    field: Some(ProfileField::Sulphate),
};

pub const CHLORIDE: Ion = Ion {
    formula: "Cl⁻",
    molar_mass: 35.453,
    equivalent_weight: 35.453,
    field: Some(ProfileField::Chloride),
};

pub const CALCIUM_CARBONATE: Ion = Ion {
    formula: "CaCO₃",
    molar_mass: 100.087,
    equivalent_weight: 50.0435,
    field: None,
};

pub const BICARBONATE: Ion = Ion {
    formula: "HCO₃⁻",
    molar_mass: 61.017,
    equivalent_weight: 61.017,
    field: None,
};

pub const CARBONIC_ACID: Ion = Ion {
    formula: "H₂CO₃",
    molar_mass: 62.03,
    equivalent_weight: 62.03,
    field: None,
};

pub const CARBONATE: Ion = Ion {
    formula: "CO₃²⁻",
    molar_mass: 60.01,
    equivalent_weight: 60.01,
    field: None,
};

/// Molar mass of calcium hydroxide, Ca(OH)2 (g/mol).
pub const M_CAOH2: f64 = 74.09;

/// Round a floating-point value to a specified number of decimal digits.
///
/// Rounds half away from zero on the shortest decimal representation of `x`
/// rather than on `x * 10^digits`, so `round_to(1.005, 2)` is `1.01`.
/// Non-finite values are returned unchanged.
pub fn round_to(x: f64, digits: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let shifted = format!("{}e{}", x.abs(), digits)
        .parse::<f64>()
        .unwrap_or(x.abs() * 10f64.powi(digits));
    let rounded = shifted.round();
    let back = format!("{}e{}", rounded, -digits)
        .parse::<f64>()
        .unwrap_or(rounded / 10f64.powi(digits));
    back.copysign(x)
}
