use healthgraph_core::cli::print_health_report;
use healthgraph_core::{build_report, ActivityLevel, Gender, Measurement};

#[test]
fn test_print_health_report_smoke() {
    // Rendringen skal ikke panikkere for noen kategori
    for (weight, activity) in [
        (45.0, ActivityLevel::Sedentary),        // Underweight
        (70.0, ActivityLevel::ModeratelyActive), // Normal weight
        (82.0, ActivityLevel::LightlyActive),    // Overweight
        (110.0, ActivityLevel::SuperActive),     // Obese
    ] {
        let m = Measurement {
            weight_kg: weight,
            height_m: 1.75,
            age: 30,
            gender: Gender::Female,
            activity_level: activity,
        };
        let report = build_report(&m).unwrap();
        print_health_report(&report);
    }
}
