use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::bmi::{categorize_bmi, compute_bmi, ideal_weight_range};
use crate::energy::daily_calories;
use crate::error::HealthError;
use crate::metrics::{reports_rejected_total, reports_total};
use crate::models::{BmiCategory, Measurement};

/// Ferdig beregnet rapport – ren funksjon av målingene.
/// Identisk input gir identisk rapport (ingen klokke, ingen tilstand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Status-fargen UI-et viser kategorien med ("success"/"warning"/"error").
    pub tag: String,
    pub ideal_weight_low: f64,
    pub ideal_weight_high: f64,
    pub daily_calories: f64,
    pub advice: String,
}

/// Fast referansetabell for kategorisøylene i grafen.
/// Kun til visning – inngår aldri i beregningen.
pub const CATEGORY_CHART: [(BmiCategory, f64); 4] = [
    (BmiCategory::Underweight, 18.5),
    (BmiCategory::NormalWeight, 24.9),
    (BmiCategory::Overweight, 29.9),
    (BmiCategory::Obese, 35.0),
];

/// Livsstilsråd per kategori – samme tekster som resultatsiden viser.
pub fn advice_for(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Increase your calorie intake and include more protein in your diet."
        }
        BmiCategory::Overweight | BmiCategory::Obese => {
            "Incorporate more physical activities and a balanced diet into your routine."
        }
        BmiCategory::NormalWeight => "Great job maintaining a healthy weight!",
    }
}

/// Valider målingen og bygg rapporten: BMI → kategori → idealvekt → kalorier.
pub fn build_report(m: &Measurement) -> Result<HealthReport, HealthError> {
    if let Err(e) = m.validate() {
        reports_rejected_total().inc();
        warn!("measurement rejected: {e}");
        return Err(e);
    }

    let bmi = compute_bmi(m.weight_kg, m.height_m);
    let category = categorize_bmi(bmi);
    let (low, high) = ideal_weight_range(m.height_m);
    let kcal = daily_calories(m.weight_kg, m.height_m, m.age, m.gender, m.activity_level);

    reports_total().inc();
    debug!(
        "report: bmi={} category={} kcal={}",
        bmi,
        category.label(),
        kcal
    );

    Ok(HealthReport {
        bmi,
        category,
        tag: category.tag().to_string(),
        ideal_weight_low: low,
        ideal_weight_high: high,
        daily_calories: kcal,
        advice: advice_for(category).to_string(),
    })
}
