use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::TreatmentPlan;
use crate::quantity::Volume;
use crate::water::profile::ProfileSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Brewing water calculator: simulate salt, acid, boil, dilution and lime treatments", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON treatment plan (volume, profile, treatments); '-' reads from stdin"
    )]
    plan: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON treatment plan (overrides --plan)"
    )]
    plan_json: Option<String>,
    #[arg(
        long,
        value_name = "LITERS",
        help = "Batch volume in liters (overrides the plan's volume)"
    )]
    volume: Option<f64>,
}

fn parse_plan_doc(doc: &str) -> Result<TreatmentPlan, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParsePlanDocument { source })
}

pub fn parse_plan(args: &Args) -> Result<TreatmentPlan, AppError> {
    let plan = match (&args.plan_json, &args.plan) {
        (Some(inline), _) => serde_json::from_str::<TreatmentPlan>(inline)
            .map_err(|source| AppError::ParsePlanJson { source })?,
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_plan_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_plan_doc(&s)?
        }
        (None, None) => return Err(AppError::MissingInputData),
    };
    Ok(plan.with_volume(args.volume.map(Volume::liters)))
}

pub fn print_output(out: &ProfileSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        let p = &out.profile;
        println!("Calcium: {} ppm", p.calcium);
        println!("Magnesium: {} ppm", p.magnesium);
        println!("Sodium: {} ppm", p.sodium);
        println!("Chloride: {} ppm", p.chloride);
        println!("Sulphate: {} ppm", p.sulphate);
        println!("Bicarbonate: {} ppm", p.bicarbonate);
        println!("Alkalinity: {} ppm as CaCO3", p.alkalinity);
        println!("pH: {:.1}", p.ph);
        println!("Hardness: {} ppm as CaCO3", out.hardness);
        println!("Residual alkalinity: {} ppm as CaCO3", out.residual_alkalinity);
        println!("SO4/Cl ratio: {:.2}", out.sulphate_chloride_ratio);
        println!(
            "Ion balance: {:.1} mEq/L cations, {:.1} mEq/L anions",
            out.cations_meq_l, out.anions_meq_l
        );
    }

    Ok(())
}
