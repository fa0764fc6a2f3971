/// First dissociation constant of the carbonic acid / bicarbonate system.
pub const PKA1: f64 = 6.38;
/// Second dissociation constant of the bicarbonate / carbonate system.
pub const PKA2: f64 = 10.373;

/// Molar fractions of the carbonate species present in water at a given pH.
///
/// The three fractions sum to 1 by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarbonateSpecies {
    /// Fraction present as carbonic acid (H2CO3).
    pub carbonic_acid: f64,
    /// Fraction present as bicarbonate (HCO3-).
    pub bicarbonate: f64,
    /// Fraction present as carbonate (CO3 2-).
    pub carbonate: f64,
}

impl CarbonateSpecies {
    pub fn at_ph(ph: f64) -> Self {
        let r1 = 10f64.powf(ph - PKA1);
        let r2 = 10f64.powf(ph - PKA2);
        let carbonic_acid = 1.0 / (1.0 + r1 + r1 * r2);
        let bicarbonate = carbonic_acid * r1;
        let carbonate = bicarbonate * r2;
        Self {
            carbonic_acid,
            bicarbonate,
            carbonate,
        }
    }

    pub fn total(&self) -> f64 {
        self.carbonic_acid + self.bicarbonate + self.carbonate
    }
}
