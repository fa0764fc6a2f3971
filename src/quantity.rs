//! Minimal quantity types consumed by the water engine.
//!
//! Only the accessors the chemistry needs are exposed. Both types clamp negative input
//! to zero, deserialized input included, and serialize as a bare number in their canonical
//! unit (liters, grams).
use serde::{Deserialize, Serialize};

const LITERS_PER_US_GALLON: f64 = 1.0 / 0.264172051;
const GRAMS_PER_POUND: f64 = 1000.0 / 2.20462262;

/// Percentage, 0..100.
pub type Percent = f64;

/// A volume of liquid, stored in liters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Volume::liters(value)
    }
}

impl From<Volume> for f64 {
    fn from(value: Volume) -> Self {
        value.0
    }
}

impl Volume {
    pub fn liters(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn milliliters(value: f64) -> Self {
        Self::liters(value / 1000.0)
    }

    pub fn us_gallons(value: f64) -> Self {
        Self::liters(value * LITERS_PER_US_GALLON)
    }

    pub fn us_quarts(value: f64) -> Self {
        Self::liters(value * LITERS_PER_US_GALLON / 4.0)
    }

    pub fn us_ounces(value: f64) -> Self {
        Self::liters(value * LITERS_PER_US_GALLON / 128.0)
    }

    /// Volume in liters.
    pub fn l(&self) -> f64 {
        self.0
    }

    pub fn ml(&self) -> f64 {
        self.0 * 1000.0
    }

    pub fn plus(&self, other: Volume) -> Volume {
        Volume::liters(self.0 + other.0)
    }

    pub fn minus(&self, other: Volume) -> Volume {
        Volume::liters(self.0 - other.0)
    }
}

/// A mass, stored in grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Mass(f64);

impl From<f64> for Mass {
    fn from(value: f64) -> Self {
        Mass::grams(value)
    }
}

impl From<Mass> for f64 {
    fn from(value: Mass) -> Self {
        value.0
    }
}

impl Mass {
    pub fn grams(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn kilograms(value: f64) -> Self {
        Self::grams(value * 1000.0)
    }

    pub fn milligrams(value: f64) -> Self {
        Self::grams(value / 1000.0)
    }

    pub fn pounds(value: f64) -> Self {
        Self::grams(value * GRAMS_PER_POUND)
    }

    pub fn ounces(value: f64) -> Self {
        Self::grams(value * GRAMS_PER_POUND / 16.0)
    }

    pub fn kg(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn g(&self) -> f64 {
        self.0
    }

    pub fn mg(&self) -> f64 {
        self.0 * 1000.0
    }

    pub fn plus(&self, other: Mass) -> Mass {
        Mass::grams(self.0 + other.0)
    }

    pub fn minus(&self, other: Mass) -> Mass {
        Mass::grams(self.0 - other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_negative_quantities() {
        assert_eq!(Volume::liters(-3.0).l(), 0.0);
        assert_eq!(Mass::grams(-1.0).g(), 0.0);
        assert_eq!(Volume::liters(2.0).minus(Volume::liters(5.0)).l(), 0.0);
    }

    #[test]
    fn converts_units() {
        assert!((Volume::us_gallons(1.0).l() - 3.785411784).abs() < 1e-6);
        assert!((Volume::milliliters(250.0).l() - 0.25).abs() < 1e-12);
        assert!((Mass::pounds(1.0).g() - 453.59237).abs() < 1e-4);
        assert_eq!(Mass::kilograms(0.0365).g(), 36.5);
        assert_eq!(Mass::grams(3.2).mg(), 3200.0);
        assert!((Volume::us_quarts(4.0).l() - 3.785411784).abs() < 1e-6);
        assert!((Volume::us_ounces(128.0).ml() - 3785.411784).abs() < 1e-3);
        assert!((Mass::ounces(16.0).kg() - 0.45359237).abs() < 1e-7);
    }

    #[test]
    fn adds_quantities() {
        assert_eq!(Volume::liters(2.0).plus(Volume::milliliters(500.0)).l(), 2.5);
        assert_eq!(Mass::grams(1.5).plus(Mass::milligrams(500.0)).g(), 2.0);
        assert_eq!(Mass::grams(1.0).minus(Mass::grams(4.0)).g(), 0.0);
    }
}
