// core/src/bmi.rs
use crate::models::BmiCategory;

// --- RoundTo trait (offentlig, brukt av alle formlene) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// BMI = vekt / høyde², avrundet til 2 desimaler.
/// Forutsetter høyde > 0 (valideres av kalleren).
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    (weight_kg / (height_m * height_m)).round_to(2)
}

/// Kategorisering med halvåpne intervaller.
/// NB: [24.9, 25) treffer ingen av de tre første grenene og faller til Obese.
/// Ikke juster grensene uten å endre grensetestene tilsvarende.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Idealvektintervall (kg) for gitt høyde: BMI-grensene 18.5 og 24.9
/// regnet om til vekt. Uavhengig av vekt/alder/kjønn.
pub fn ideal_weight_range(height_m: f64) -> (f64, f64) {
    let h2 = height_m * height_m;
    ((18.5 * h2).round_to(2), (24.9 * h2).round_to(2))
}
