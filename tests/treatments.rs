mod common;

use brewwater_rs::chemistry::CALCIUM_CARBONATE;
use brewwater_rs::{
    Acid, AcidBlend, AcidSolution, AcidTreatment, BoilTreatment, DilutionTreatment,
    LimeTreatment, Mass, Salt, SaltTreatment, Volume, WaterProfile, WaterTreatment,
};
use common::*;

fn treated(mut p: WaterProfile, t: impl WaterTreatment, liters: f64) -> WaterProfile {
    t.transform(&mut p, Volume::liters(liters));
    p.round()
}

/// (alkalinity, bicarbonate, chloride, sulphate, RA)
fn acid_relevant(p: &WaterProfile) -> (f64, f64, f64, f64, f64) {
    (p.alkalinity, p.bicarbonate, p.chloride, p.sulphate, p.ra())
}

fn solution(ml: f64, concentration: f64) -> AcidSolution {
    AcidSolution {
        volume: Volume::milliliters(ml),
        concentration,
    }
}

#[test]
fn boil_reduces_to_alkalinity_floor() {
    let p = treated(muswell_hill(), BoilTreatment, 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (60.0, 74.0, 44.0));
    let p = treated(vienna(), BoilTreatment, 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (60.0, 74.0, 25.0));
}

#[test]
fn boil_is_capped_by_calcium() {
    let source = calcium_poor().round();
    assert_eq!(
        (source.alkalinity, source.bicarbonate, source.calcium),
        (207.0, 250.0, 10.0)
    );
    let p = treated(source, BoilTreatment, 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (182.0, 220.0, 0.0));
}

#[test]
fn boil_below_floor_is_a_no_op() {
    let mut p = pilsen();
    BoilTreatment.transform(&mut p, Volume::liters(20.0));
    assert_eq!(p, pilsen());

    // 0.6 mmol/L as CaCO3 is just above 60 ppm.
    assert!(60.0 < 0.6 * CALCIUM_CARBONATE.molar_mass);
    let mut at_floor = muswell_hill();
    at_floor.alkalinity = 60.0;
    let before = at_floor.clone();
    BoilTreatment.transform(&mut at_floor, Volume::liters(20.0));
    BoilTreatment.transform(&mut at_floor, Volume::liters(20.0));
    assert_eq!(at_floor, before);
}

#[test]
fn salt_updates_concentrations() {
    let p = treated(
        muswell_hill(),
        SaltTreatment::new(Salt::CalciumChloride, Mass::grams(5.0)),
        20.0,
    );
    assert_eq!(p, profile([168.0, 5.0, 30.0, 171.0, 50.0, 245.0, 200.0, 7.7]));
}

#[test]
fn salt_updates_alkalinity() {
    let p = treated(
        muswell_hill(),
        SaltTreatment::new(Salt::SodiumBicarbonate, Mass::grams(5.0)),
        20.0,
    );
    assert_eq!(p, profile([100.0, 5.0, 99.0, 50.0, 50.0, 427.0, 349.0, 7.7]));
}

#[test]
fn salt_accounts_for_volume() {
    let p = treated(
        muswell_hill(),
        SaltTreatment::new(Salt::CalciumChloride, Mass::grams(5.0)),
        40.0,
    );
    assert_eq!(p, profile([134.0, 5.0, 30.0, 110.0, 50.0, 245.0, 200.0, 7.7]));
}

#[test]
fn acid_solutions_reduce_alkalinity() {
    let cases = [
        (Acid::Lactic, solution(5.0, 88.0), (55.0, 69.0, 50.0, 50.0, -19.0)),
        (Acid::Phosphoric, solution(4.0, 75.0), (77.0, 95.0, 50.0, 50.0, 3.0)),
        (Acid::Citric, solution(3.0, 100.0), (73.0, 90.0, 50.0, 50.0, -1.0)),
        (Acid::Sulfuric, solution(10.0, 20.0), (81.0, 100.0, 50.0, 164.0, 7.0)),
        (Acid::Hydrochloric, solution(3.0, 37.0), (110.0, 135.0, 114.0, 50.0, 36.0)),
    ];
    for (acid, sol, expected) in cases {
        let p = treated(muswell_hill(), AcidTreatment::new(acid, sol), 20.0);
        assert_eq!(acid_relevant(&p), expected, "{}", acid.name());
    }
}

#[test]
fn acid_accepts_pure_mass() {
    let p = treated(
        muswell_hill(),
        AcidTreatment::new(Acid::Citric, Mass::grams(5.0)),
        20.0,
    );
    assert_eq!(acid_relevant(&p), (73.0, 90.0, 50.0, 50.0, -1.0));
}

#[test]
fn acid_blend_splits_solution_volume() {
    let p = treated(
        muswell_hill(),
        AcidTreatment::new(AcidBlend::Crs, solution(6.0, 100.0)),
        10.0,
    );
    assert_eq!(acid_relevant(&p), (88.0, 108.0, 90.0, 104.0, 14.0));
}

#[test]
fn acid_blend_applies_full_mass_to_each_component() {
    let volume = Volume::liters(20.0);
    let mut blended = muswell_hill();
    AcidTreatment::new(AcidBlend::Crs, Mass::grams(1.0)).transform(&mut blended, volume);

    let mut separate = muswell_hill();
    AcidTreatment::new(Acid::Hydrochloric, Mass::grams(1.0)).transform(&mut separate, volume);
    AcidTreatment::new(Acid::Sulfuric, Mass::grams(1.0)).transform(&mut separate, volume);

    assert_eq!(blended, separate);
}

#[test]
fn acid_keeps_bicarbonate_non_negative() {
    let p = treated(pilsen(), AcidTreatment::new(Acid::Lactic, solution(3.0, 80.0)), 20.0);
    assert_eq!(acid_relevant(&p), (-65.0, 0.0, 6.0, 8.0, -71.0));
}

#[test]
fn dilution_blends_towards_reference() {
    let p = treated(
        muswell_hill(),
        DilutionTreatment::with_reference(20.0, vienna()),
        20.0,
    );
    assert_eq!(p, profile([95.0, 7.0, 26.0, 43.0, 52.0, 241.0, 197.0, 7.7]));
}

#[test]
fn dilution_defaults_to_distilled_water() {
    let p = treated(muswell_hill(), DilutionTreatment::new(20.0), 20.0);
    assert_eq!(p, profile([80.0, 4.0, 24.0, 40.0, 40.0, 196.0, 160.0, 7.7]));
}

#[test]
fn lime_maximum_dose() {
    // 163 mg/L x 20 L = 3.26 g
    assert!((LimeTreatment::maximum(&muswell_hill()) - 163.0).abs() < 0.05);
    assert!((LimeTreatment::maximum(&calcium_poor()) - 19.4).abs() < 0.05);
}

#[test]
fn lime_reduces_alkalinity() {
    let p = treated(muswell_hill(), LimeTreatment::new(Mass::grams(3.2)), 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (3.0, 4.0, 21.0));
}

#[test]
fn lime_excess_raises_alkalinity() {
    let p = treated(muswell_hill(), LimeTreatment::new(Mass::grams(4.6)), 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (89.0, 110.0, 56.0));
}

#[test]
fn lime_is_capped_by_calcium() {
    let p = treated(calcium_poor(), LimeTreatment::new(Mass::grams(1.0)), 20.0);
    assert_eq!((p.alkalinity, p.bicarbonate, p.calcium), (182.0, 220.0, 0.0));
}
