// core/src/energy.rs
use crate::bmi::RoundTo;
use crate::models::{ActivityLevel, Gender};

/// Basalforbrenning (kcal/dag) – lineær modell per kjønn.
/// Høyde går inn i cm, derfor ×100.
pub fn bmr(weight_kg: f64, height_m: f64, age: u32, gender: Gender) -> f64 {
    let height_cm = height_m * 100.0;
    let age = age as f64;
    match gender {
        Gender::Male => 88.36 + 13.4 * weight_kg + 4.8 * height_cm - 5.7 * age,
        Gender::Female => 447.6 + 9.2 * weight_kg + 3.1 * height_cm - 4.3 * age,
    }
}

/// Daglig kaloribehov = BMR × aktivitetsfaktor, avrundet til 2 desimaler.
pub fn daily_calories(
    weight_kg: f64,
    height_m: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
) -> f64 {
    (bmr(weight_kg, height_m, age, gender) * activity.multiplier()).round_to(2)
}
