#![allow(dead_code)]

use brewwater_rs::{WaterFragment, WaterProfile};

/// Builds a profile from a city water report (Ca, Mg, Na, SO4, Cl, HCO3, alkalinity).
fn report(ions: [f64; 7], ph: Option<f64>) -> WaterProfile {
    let [calcium, magnesium, sodium, sulphate, chloride, bicarbonate, alkalinity] = ions;
    WaterProfile::new(WaterFragment {
        calcium: Some(calcium),
        magnesium: Some(magnesium),
        sodium: Some(sodium),
        sulphate: Some(sulphate),
        chloride: Some(chloride),
        bicarbonate: Some(bicarbonate),
        alkalinity: Some(alkalinity),
        ph,
        ..Default::default()
    })
}

pub fn burton() -> WaterProfile {
    report([275.0, 40.0, 25.0, 610.0, 35.0, 270.0, 221.0], None)
}

pub fn dortmund() -> WaterProfile {
    report([230.0, 15.0, 40.0, 330.0, 130.0, 235.0, 193.0], None)
}

pub fn dublin() -> WaterProfile {
    report([120.0, 4.0, 12.0, 55.0, 19.0, 315.0, 258.0], None)
}

pub fn edinburgh() -> WaterProfile {
    report([100.0, 20.0, 55.0, 140.0, 50.0, 285.0, 234.0], None)
}

pub fn london() -> WaterProfile {
    report([70.0, 6.0, 15.0, 40.0, 38.0, 166.0, 136.0], None)
}

pub fn munich() -> WaterProfile {
    report([77.0, 17.0, 4.0, 18.0, 8.0, 295.0, 242.0], None)
}

pub fn pilsen() -> WaterProfile {
    report([7.0, 2.0, 2.0, 8.0, 6.0, 16.0, 13.0], None)
}

pub fn vienna() -> WaterProfile {
    report([75.0, 15.0, 10.0, 60.0, 15.0, 225.0, 184.0], None)
}

pub fn muswell_hill() -> WaterProfile {
    report([100.0, 5.0, 30.0, 50.0, 50.0, 245.0, 200.0], Some(7.7))
}

/// Calcium-poor, high-alkalinity water.
pub fn calcium_poor() -> WaterProfile {
    WaterProfile::new(WaterFragment {
        calcium: Some(10.0),
        magnesium: Some(30.0),
        sodium: Some(40.0),
        sulphate: Some(10.0),
        chloride: Some(15.0),
        bicarbonate: Some(250.0),
        ..Default::default()
    })
}

pub fn profile(values: [f64; 8]) -> WaterProfile {
    let [calcium, magnesium, sodium, chloride, sulphate, bicarbonate, alkalinity, ph] = values;
    WaterProfile {
        calcium,
        magnesium,
        sodium,
        chloride,
        sulphate,
        bicarbonate,
        alkalinity,
        ph,
    }
}
