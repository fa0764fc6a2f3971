//! Attribute inference for partially specified water reports.
//!
//! A [`WaterFragment`] holds whatever the caller knows about a water supply. Resolving it
//! runs a fixed, ordered list of fill rules; each rule targets one unset field and only
//! fires when the fields it depends on are present. Caller-supplied values are never
//! overwritten, and a field that no rule can produce simply stays unset.
//!
//! Carbonate inference follows the alkalinity/bicarbonate relation titrated to pH 4.4:
//! alkalinity (mEq/L) = bicarbonate (mEq/L) x proportion + adjustment, scaled by the
//! bicarbonate fraction at the sample pH.
use std::iter;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::chemistry::{
    BICARBONATE, CALCIUM, CALCIUM_CARBONATE, CarbonateSpecies, MAGNESIUM, round_to,
};

/// pH assumed for carbonate inference when none is known.
pub const DEFAULT_PH: f64 = 8.0;
/// Titration end point used to define alkalinity.
pub const ALKALINITY_END_POINT_PH: f64 = 4.4;

/// Carbonate species at the titration end point.
static END_POINT: LazyLock<CarbonateSpecies> =
    LazyLock::new(|| CarbonateSpecies::at_ph(ALKALINITY_END_POINT_PH));

/// Partial water report. Every field is optional; see [`WaterFragment::resolve`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterFragment {
    /// Ca2+ (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Mg2+ (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    /// Na+ (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Cl- (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chloride: Option<f64>,
    /// SO4 2- (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sulphate: Option<f64>,
    /// Total hardness as CaCO3 (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardness: Option<f64>,
    /// Total alkalinity as CaCO3 (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alkalinity: Option<f64>,
    /// HCO3- (ppm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bicarbonate: Option<f64>,
    /// pH
    #[serde(rename = "pH", skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
}

/// Fields a fill rule can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Hardness,
    Calcium,
    Magnesium,
    Ph,
    Alkalinity,
    Bicarbonate,
}

type FillRule = (Target, fn(&WaterFragment) -> Option<f64>);

/// Applied top to bottom; later rules see the values earlier rules produced.
const FILL_RULES: [FillRule; 6] = [
    (Target::Hardness, hardness_from_minerals),
    (Target::Calcium, calcium_from_hardness),
    (Target::Magnesium, magnesium_from_hardness),
    (Target::Ph, ph_from_carbonates),
    (Target::Alkalinity, alkalinity_from_bicarbonate),
    (Target::Bicarbonate, bicarbonate_from_alkalinity),
];

impl WaterFragment {
    /// Fills in every field derivable from the ones present.
    pub fn resolve(mut self) -> Self {
        for (target, rule) in FILL_RULES {
            if self.slot(target).is_some() {
                continue;
            }
            if let Some(value) = rule(&self) {
                debug!(?target, value, "inferred water attribute");
                *self.slot(target) = Some(value);
            }
        }

        if self.hardness.is_some() && (self.calcium.is_none() || self.magnesium.is_none()) {
            warn!(
                hardness = ?self.hardness,
                calcium = ?self.calcium,
                magnesium = ?self.magnesium,
                "hardness needs calcium or magnesium to split into ions; unresolved ions default to 0"
            );
        }
        if self.ph.is_none() && (self.alkalinity.is_some() || self.bicarbonate.is_some()) {
            debug!(ph = DEFAULT_PH, "pH not derivable; carbonate inference assumed default pH");
        }
        self
    }

    fn slot(&mut self, target: Target) -> &mut Option<f64> {
        match target {
            Target::Hardness => &mut self.hardness,
            Target::Calcium => &mut self.calcium,
            Target::Magnesium => &mut self.magnesium,
            Target::Ph => &mut self.ph,
            Target::Alkalinity => &mut self.alkalinity,
            Target::Bicarbonate => &mut self.bicarbonate,
        }
    }
}

fn hardness_from_minerals(f: &WaterFragment) -> Option<f64> {
    let (ca, mg) = (f.calcium?, f.magnesium?);
    let hardness =
        CALCIUM_CARBONATE.molar_mass * (ca / CALCIUM.molar_mass + mg / MAGNESIUM.molar_mass);
    Some(round_to(hardness, 0))
}

fn calcium_from_hardness(f: &WaterFragment) -> Option<f64> {
    let (hardness, mg) = (f.hardness?, f.magnesium?);
    let ca = CALCIUM.molar_mass
        * (hardness / CALCIUM_CARBONATE.molar_mass - mg / MAGNESIUM.molar_mass);
    Some(round_to(ca, 0))
}

fn magnesium_from_hardness(f: &WaterFragment) -> Option<f64> {
    let (hardness, ca) = (f.hardness?, f.calcium?);
    let mg = MAGNESIUM.molar_mass
        * (hardness / CALCIUM_CARBONATE.molar_mass - ca / CALCIUM.molar_mass);
    Some(round_to(mg, 0))
}

fn ph_from_carbonates(f: &WaterFragment) -> Option<f64> {
    Some(estimate_ph(f.alkalinity?, f.bicarbonate?))
}

fn alkalinity_from_bicarbonate(f: &WaterFragment) -> Option<f64> {
    let ph = f.ph.unwrap_or(DEFAULT_PH);
    Some(round_to(estimate_alkalinity(ph, f.bicarbonate?), 0))
}

fn bicarbonate_from_alkalinity(f: &WaterFragment) -> Option<f64> {
    let ph = f.ph.unwrap_or(DEFAULT_PH);
    Some(round_to(estimate_bicarbonate(ph, f.alkalinity?), 0))
}

struct EquilibriumFactors {
    fractions: CarbonateSpecies,
    proportion: f64,
    adjustment: f64,
}

fn factors(ph: f64) -> EquilibriumFactors {
    let end = *END_POINT;
    let x1 = 10f64.powf(-ALKALINITY_END_POINT_PH) - 10f64.powf(-ph);
    let x2 = 10f64.powf(ph - 14.0) - 10f64.powf(-ALKALINITY_END_POINT_PH - 14.0);
    let adjustment = 1000.0 * x1 - 1000.0 * x2;
    let fractions = CarbonateSpecies::at_ph(ph);
    let proportion =
        end.carbonic_acid - fractions.carbonic_acid + fractions.carbonate - end.carbonate;
    EquilibriumFactors {
        fractions,
        proportion,
        adjustment,
    }
}

/// Alkalinity (ppm as CaCO3) of water holding `bicarbonate` ppm HCO3- at `ph`.
pub fn estimate_alkalinity(ph: f64, bicarbonate: f64) -> f64 {
    let EquilibriumFactors {
        fractions,
        proportion,
        adjustment,
    } = factors(ph);
    let bc = bicarbonate / BICARBONATE.equivalent_weight; // mEq/L
    let ac = bc * proportion + adjustment; // mEq/L
    (ac / fractions.bicarbonate) * CALCIUM_CARBONATE.equivalent_weight
}

/// Bicarbonate (ppm HCO3-) of water with `alkalinity` ppm as CaCO3 at `ph`.
pub fn estimate_bicarbonate(ph: f64, alkalinity: f64) -> f64 {
    let EquilibriumFactors {
        fractions,
        proportion,
        adjustment,
    } = factors(ph);
    let ac = alkalinity / CALCIUM_CARBONATE.equivalent_weight; // mEq/L
    let bc = (ac - adjustment) / proportion; // mEq/L
    bc * fractions.bicarbonate * BICARBONATE.equivalent_weight
}

/// pH most consistent with a measured alkalinity/bicarbonate pair, to one decimal.
///
/// Local search on a 0.2 grid: from the pH 7.0 baseline it walks down (6.8 .. 4.2) and,
/// independently, up (7.2 .. 14.0), each walk stopping at the first step whose error
/// does not strictly improve. The lowest error seen wins. The walk can settle on a local
/// optimum when the error curve is not convex.
pub fn estimate_ph(alkalinity: f64, bicarbonate: f64) -> f64 {
    let error = |ph: f64| (estimate_bicarbonate(ph, alkalinity) - bicarbonate).abs();
    let baseline = error(7.0);

    let walk = |candidates: &mut dyn Iterator<Item = f64>| {
        let mut best = (7.0, baseline);
        for ph in candidates {
            let delta = error(ph);
            if delta < best.1 {
                trace!(ph, delta, "pH search step");
                best = (ph, delta);
            } else {
                break;
            }
        }
        best
    };
    // Accumulated steps: the upward walk ends on 13.99999999999998, which rounds to 14.0.
    let down = walk(
        &mut iter::successors(Some(6.8), |ph| Some(ph - 0.2)).take_while(|&ph| ph > 4.0),
    );
    let up = walk(
        &mut iter::successors(Some(7.2), |ph| Some(ph + 0.2)).take_while(|&ph| ph < 14.0),
    );

    let (ph, _) = [down, up]
        .into_iter()
        .fold((7.0, baseline), |acc, c| if c.1 < acc.1 { c } else { acc });
    round_to(ph, 1)
}
