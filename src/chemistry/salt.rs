//! Mineral salts added to brewing water.
//!
//! Contribution factors are ppm added per gram of salt dissolved in one liter.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chemistry::{CALCIUM, CHLORIDE, Ion, MAGNESIUM, SODIUM, SULPHATE};
use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Salt {
    #[serde(alias = "gypsum")]
    CalciumSulphate,
    CalciumChloride,
    #[serde(alias = "chalk")]
    CalciumCarbonate,
    #[serde(alias = "slaked_lime")]
    CalciumHydroxide,
    #[serde(alias = "epsom")]
    MagnesiumSulphate,
    MagnesiumChloride,
    #[serde(alias = "baking_soda")]
    SodiumBicarbonate,
    #[serde(alias = "table_salt")]
    SodiumChloride,
}

/// ppm of `ion` added per g/L of salt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaltContribution {
    pub ion: Ion,
    pub ppm: f64,
}

const fn contribution(ion: Ion, ppm: f64) -> SaltContribution {
    SaltContribution { ion, ppm }
}

impl Salt {
    pub const ALL: [Salt; 8] = [
        Salt::CalciumSulphate,
        Salt::CalciumChloride,
        Salt::CalciumCarbonate,
        Salt::CalciumHydroxide,
        Salt::MagnesiumSulphate,
        Salt::MagnesiumChloride,
        Salt::SodiumBicarbonate,
        Salt::SodiumChloride,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Salt::CalciumSulphate => "Calcium sulphate",
            Salt::CalciumChloride => "Calcium chloride",
            Salt::CalciumCarbonate => "Calcium carbonate",
            Salt::CalciumHydroxide => "Calcium hydroxide",
            Salt::MagnesiumSulphate => "Magnesium sulphate",
            Salt::MagnesiumChloride => "Magnesium chloride",
            Salt::SodiumBicarbonate => "Sodium bicarbonate",
            Salt::SodiumChloride => "Sodium chloride",
        }
    }

    pub fn trade_name(&self) -> Option<&'static str> {
        match self {
            Salt::CalciumSulphate => Some("Gypsum"),
            Salt::CalciumCarbonate => Some("Chalk"),
            Salt::CalciumHydroxide => Some("Slaked Lime"),
            Salt::MagnesiumSulphate => Some("Epsom"),
            Salt::SodiumBicarbonate => Some("Baking Soda"),
            Salt::SodiumChloride => Some("Table Salt"),
            Salt::CalciumChloride | Salt::MagnesiumChloride => None,
        }
    }

    /// Short key, also accepted by [`FromStr`].
    pub fn key(&self) -> &'static str {
        match self {
            Salt::CalciumSulphate => "CaSO4",
            Salt::CalciumChloride => "CaCl2",
            Salt::CalciumCarbonate => "CaCO3",
            Salt::CalciumHydroxide => "Ca(OH)2",
            Salt::MagnesiumSulphate => "MgSO4",
            Salt::MagnesiumChloride => "MgCl2",
            Salt::SodiumBicarbonate => "NaHCO3",
            Salt::SodiumChloride => "NaCl",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Salt::CalciumSulphate => "CaSO₄",
            Salt::CalciumChloride => "CaCl₂",
            Salt::CalciumCarbonate => "CaCO₃",
            Salt::CalciumHydroxide => "Ca(OH)₂",
            Salt::MagnesiumSulphate => "MgSO₄",
            Salt::MagnesiumChloride => "MgCl₂",
            Salt::SodiumBicarbonate => "NaHCO₃",
            Salt::SodiumChloride => "NaCl",
        }
    }

    pub fn contributions(&self) -> &'static [SaltContribution] {
        const CASO4: [SaltContribution; 2] =
            [contribution(CALCIUM, 232.8), contribution(SULPHATE, 557.7)];
        const CACL2: [SaltContribution; 2] =
            [contribution(CALCIUM, 272.6), contribution(CHLORIDE, 482.3)];
        const CACO3: [SaltContribution; 1] = [contribution(CALCIUM, 200.0)];
        const CAOH2: [SaltContribution; 1] = [contribution(CALCIUM, 541.0)];
        const MGSO4: [SaltContribution; 2] =
            [contribution(MAGNESIUM, 98.6), contribution(SULPHATE, 389.6)];
        const MGCL2: [SaltContribution; 2] =
            [contribution(MAGNESIUM, 119.5), contribution(CHLORIDE, 348.7)];
        const NAHCO3: [SaltContribution; 1] = [contribution(SODIUM, 274.0)];
        const NACL: [SaltContribution; 2] =
            [contribution(SODIUM, 393.4), contribution(CHLORIDE, 606.6)];
        match self {
            Salt::CalciumSulphate => &CASO4,
            Salt::CalciumChloride => &CACL2,
            Salt::CalciumCarbonate => &CACO3,
            Salt::CalciumHydroxide => &CAOH2,
            Salt::MagnesiumSulphate => &MGSO4,
            Salt::MagnesiumChloride => &MGCL2,
            Salt::SodiumBicarbonate => &NAHCO3,
            Salt::SodiumChloride => &NACL,
        }
    }

    /// Bicarbonate contribution (ppm per g/L).
    pub fn bicarbonate(&self) -> f64 {
        match self {
            Salt::CalciumCarbonate => 600.0,
            Salt::CalciumHydroxide => 1645.0,
            Salt::SodiumBicarbonate => 726.0,
            _ => 0.0,
        }
    }
}

impl FromStr for Salt {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Salt::ALL
            .into_iter()
            .find(|salt| {
                salt.key().eq_ignore_ascii_case(key)
                    || salt.name().eq_ignore_ascii_case(key)
                    || salt
                        .trade_name()
                        .is_some_and(|trade| trade.eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| AppError::UnknownSpecies {
                kind: "salt",
                key: s.to_string(),
            })
    }
}
