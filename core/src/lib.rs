// I release bygger vi med deny(warnings) på crate-nivå.
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod bmi;
pub mod cli;
pub mod energy;
pub mod error;
pub mod metrics;
pub mod models;
pub mod py;
pub mod report;

pub use bmi::{categorize_bmi, compute_bmi, ideal_weight_range, RoundTo};
pub use energy::{bmr, daily_calories};
pub use error::HealthError;
pub use models::{ActivityLevel, BmiCategory, Gender, Measurement};
pub use report::{advice_for, build_report, HealthReport, CATEGORY_CHART};

use serde_json::{json, Value};

/// Bygg dokumentet UI-et rendrer: rapporten + faste kategorisøyler for grafen.
pub fn health_report_document(report: &HealthReport) -> Value {
    let chart: Vec<Value> = CATEGORY_CHART
        .iter()
        .map(|(category, upper)| json!({ "category": category.label(), "upper_bound": upper }))
        .collect();
    json!({ "report": report, "chart": chart })
}

/// JSON-inngang for UI-et: måling inn, rapport + grafdata ut.
/// Parsefeil rapporteres med JSON-sti.
pub fn compute_health_report_json(measurement_json: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(measurement_json);
    let measurement: Measurement = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| format!("parse error (Measurement) at {}: {}", e.path(), e))?;

    let report = build_report(&measurement).map_err(|e| e.to_string())?;
    serde_json::to_string(&health_report_document(&report)).map_err(|e| e.to_string())
}
