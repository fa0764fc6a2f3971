//! Acids used to reduce water alkalinity.
//!
//! Every species carries its molecular weight, one to three dissociation constants and the
//! ions it leaves behind on full dissociation. Solution densities are empirical per-species
//! fits over concentration (% w/w) and are reproduced as given, not derived.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chemistry::{CHLORIDE, Ion, SULPHATE};
use crate::error::AppError;
use crate::quantity::{Mass, Percent, Volume};

/// pH at which acid normality is evaluated unless the caller says otherwise.
pub const DEFAULT_TARGET_PH: f64 = 5.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acid {
    Acetic,
    Ascorbic,
    Citric,
    Hydrochloric,
    Lactic,
    Phosphoric,
    Sulfuric,
    Tartaric,
}

/// A volume of acid solution at a given concentration (% w/w).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcidSolution {
    pub volume: Volume,
    pub concentration: Percent,
}

impl Acid {
    pub const ALL: [Acid; 8] = [
        Acid::Acetic,
        Acid::Ascorbic,
        Acid::Citric,
        Acid::Hydrochloric,
        Acid::Lactic,
        Acid::Phosphoric,
        Acid::Sulfuric,
        Acid::Tartaric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Acid::Acetic => "Acetic",
            Acid::Ascorbic => "Ascorbic",
            Acid::Citric => "Citric",
            Acid::Hydrochloric => "Hydrochloric",
            Acid::Lactic => "Lactic",
            Acid::Phosphoric => "Phosphoric",
            Acid::Sulfuric => "Sulfuric",
            Acid::Tartaric => "Tartaric",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Acid::Acetic => "CH₃COOH",
            Acid::Ascorbic => "C₆H₈O₆",
            Acid::Citric => "C₆H₈O₇",
            Acid::Hydrochloric => "HCl",
            Acid::Lactic => "C₃H₆O₃",
            Acid::Phosphoric => "H₃PO₄",
            Acid::Sulfuric => "H₂SO₄",
            Acid::Tartaric => "C₄H₆O₆",
        }
    }

    /// Molecular weight (g/mol).
    pub fn weight(&self) -> f64 {
        match self {
            Acid::Acetic => 60.05,
            Acid::Ascorbic => 176.12,
            Acid::Citric => 192.12,
            Acid::Hydrochloric => 36.46,
            Acid::Lactic => 90.08,
            Acid::Phosphoric => 97.99,
            Acid::Sulfuric => 98.08,
            Acid::Tartaric => 150.09,
        }
    }

    /// Dissociation constants `(pK1, pK2, pK3)`.
    pub fn pk(&self) -> (f64, Option<f64>, Option<f64>) {
        match self {
            Acid::Acetic => (4.76, None, None),
            Acid::Ascorbic => (4.1, Some(11.6), None),
            Acid::Citric => (3.14, Some(4.77), Some(6.39)),
            Acid::Hydrochloric => (-7.0, None, None),
            Acid::Lactic => (3.86, None, None),
            Acid::Phosphoric => (2.14, Some(7.2), Some(12.37)),
            Acid::Sulfuric => (-3.0, Some(1.99), None),
            Acid::Tartaric => (2.89, Some(4.4), None),
        }
    }

    /// Ions added to the water when the acid fully dissociates.
    pub fn contributions(&self) -> &'static [Ion] {
        match self {
            Acid::Hydrochloric => &[CHLORIDE],
            Acid::Sulfuric => &[SULPHATE],
            _ => &[],
        }
    }

    /// Acid equivalents released per mole at the given pH.
    pub fn strength(&self, ph: f64) -> f64 {
        let (pk1, pk2, pk3) = self.pk();
        let r1 = 10f64.powf(ph - pk1);
        let r2 = pk2.map_or(0.0, |pk| 10f64.powf(ph - pk));
        let r3 = pk3.map_or(0.0, |pk| 10f64.powf(ph - pk));
        let m0 = 1.0 / (1.0 + r1 + r1 * r2 + r1 * r2 * r3);
        let m1 = r1 * m0;
        let m2 = r2 * m1;
        let m3 = r3 * m2;
        m1 + 2.0 * m2 + 3.0 * m3
    }

    /// Solution density (kg/L) at concentration `ct` (% w/w).
    pub fn density(&self, ct: Percent) -> f64 {
        match self {
            Acid::Ascorbic => 1.0 + 0.00694 * ct,
            Acid::Acetic => 1.0 + 0.00049 * ct,
            Acid::Citric => 1.0 + 0.00665 * ct,
            Acid::Hydrochloric => 1.0 + 0.00498 * ct,
            Acid::Lactic => 1.0 + 0.00239 * ct,
            Acid::Phosphoric => {
                let x = 1.36 * (1.0 - 1.6f64.powf(0.01 * ct));
                1.0 - x
            }
            Acid::Sulfuric => {
                let x = 2.2e-4 * ct.powi(2) - 4.5e-6 * ct.powi(3) + 2.5e-8 * ct.powi(4);
                1.0 + 0.011 * ct - x
            }
            Acid::Tartaric => 1.0 + 0.0049 * ct,
        }
    }

    /// Mass of pure acid held in a solution.
    pub fn mass(&self, sol: &AcidSolution) -> Mass {
        let ct = sol.concentration;
        Mass::kilograms(sol.volume.l() * ct * 0.01 * self.density(ct))
    }

    /// Normality (eq/L) of `weight` pure acid dissolved in `volume` water, at the default
    /// target pH.
    pub fn normality(&self, weight: Mass, volume: Volume) -> f64 {
        self.normality_at(weight, volume, DEFAULT_TARGET_PH)
    }

    pub fn normality_at(&self, weight: Mass, volume: Volume, ph: f64) -> f64 {
        (weight.g() * self.strength(ph)) / self.weight() / volume.l()
    }
}

impl FromStr for Acid {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Acid::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(key) || a.formula() == key)
            .or(match key {
                "HCl" | "hcl" => Some(Acid::Hydrochloric),
                "H2SO4" | "h2so4" => Some(Acid::Sulfuric),
                "H3PO4" | "h3po4" => Some(Acid::Phosphoric),
                _ => None,
            })
            .ok_or_else(|| AppError::UnknownSpecies {
                kind: "acid",
                key: s.to_string(),
            })
    }
}

/// A commercial mixture of acids at fixed concentrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidBlend {
    /// Combined Reduction Solution: hydrochloric and sulfuric acid.
    Crs,
}

impl AcidBlend {
    pub fn name(&self) -> &'static str {
        match self {
            AcidBlend::Crs => "CRS",
        }
    }

    /// Component acids with their concentration (% w/w) in the blend.
    pub fn components(&self) -> &'static [(Acid, Percent)] {
        match self {
            AcidBlend::Crs => &[(Acid::Hydrochloric, 12.75), (Acid::Sulfuric, 16.25)],
        }
    }
}

impl FromStr for AcidBlend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crs" => Ok(AcidBlend::Crs),
            _ => Err(AppError::UnknownSpecies {
                kind: "acid blend",
                key: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, digits: i32) {
        let tol = 10f64.powi(-digits) / 2.0;
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} to {digits} digits, got {actual}"
        );
    }

    #[test]
    fn strength_at_mash_ph() {
        close(Acid::Acetic.strength(5.5), 0.846, 3);
        close(Acid::Citric.strength(5.5), 1.955, 3);
        close(Acid::Lactic.strength(5.5), 0.978, 3);
        close(Acid::Hydrochloric.strength(5.5), 1.0, 3);
        close(Acid::Sulfuric.strength(5.5), 2.0, 3);
        close(Acid::Phosphoric.strength(5.5), 1.019, 3);
    }

    #[test]
    fn solution_mass() {
        // 191 ml H2SO4 at 40% is about 100 g.
        let sol = AcidSolution {
            volume: Volume::liters(0.191),
            concentration: 40.0,
        };
        close(Acid::Sulfuric.mass(&sol).g(), 100.2, 1);
        let sol = AcidSolution {
            volume: Volume::liters(0.105),
            concentration: 80.0,
        };
        close(Acid::Lactic.mass(&sol).g(), 100.1, 1);
    }

    #[test]
    fn solution_normality() {
        close(
            Acid::Sulfuric.normality(Mass::kilograms(0.1), Volume::liters(12.0)),
            0.17,
            2,
        );
        close(
            Acid::Lactic.normality(Mass::kilograms(0.1), Volume::liters(100.0)),
            0.01,
            2,
        );
        close(
            Acid::Hydrochloric.normality(Mass::kilograms(0.0365), Volume::liters(1.0)),
            1.0,
            2,
        );
    }

    #[test]
    fn empirical_densities() {
        let table = [
            (Acid::Acetic, 20.0, 1.01),
            (Acid::Acetic, 100.0, 1.049),
            (Acid::Ascorbic, 50.0, 1.347),
            (Acid::Citric, 100.0, 1.665),
            (Acid::Hydrochloric, 36.0, 1.179),
            (Acid::Lactic, 88.0, 1.21),
            (Acid::Phosphoric, 10.0, 1.065),
            (Acid::Phosphoric, 75.0, 1.575),
            (Acid::Sulfuric, 10.0, 1.092),
            (Acid::Sulfuric, 50.0, 1.406),
            (Acid::Sulfuric, 92.0, 1.863),
            (Acid::Tartaric, 40.0, 1.196),
        ];
        for (acid, ct, expected) in table {
            close(acid.density(ct), expected, 3);
        }
    }

    #[test]
    fn contributions_only_for_mineral_acids() {
        assert_eq!(Acid::Hydrochloric.contributions(), &[CHLORIDE]);
        assert_eq!(Acid::Sulfuric.contributions(), &[SULPHATE]);
        assert!(Acid::Lactic.contributions().is_empty());
    }

    #[test]
    fn lookups_by_key() {
        assert_eq!("lactic".parse::<Acid>().ok(), Some(Acid::Lactic));
        assert_eq!("HCl".parse::<Acid>().ok(), Some(Acid::Hydrochloric));
        assert!("vinegar".parse::<Acid>().is_err());
        let crs: AcidBlend = "CRS".parse().unwrap();
        assert_eq!(crs.name(), "CRS");
        assert_eq!(crs.components().len(), 2);
    }
}
