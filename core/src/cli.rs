use crate::report::{HealthReport, CATEGORY_CHART};

/// Tekstlig gjengivelse av rapporten + enkel søylegraf over kategorigrensene.
pub fn print_health_report(report: &HealthReport) {
    println!("--- Health Report ---");
    println!("BMI: {:.2} ({})", report.bmi, report.category.label());
    println!("Status: {}", report.tag);
    println!(
        "Ideal weight: {:.2}-{:.2} kg",
        report.ideal_weight_low, report.ideal_weight_high
    );
    println!("Daily calories: {:.2} kcal", report.daily_calories);
    println!("Advice: {}", report.advice);
    println!();
    print_category_chart(report);
}

/// En rad per kategori, søylelengde proporsjonal med øvre BMI-grense.
fn print_category_chart(report: &HealthReport) {
    println!("BMI categories:");
    for (category, upper) in CATEGORY_CHART {
        let bar = "#".repeat(bar_len(upper));
        let mark = if category == report.category { "  <-- you" } else { "" };
        println!("{:<14} {:<36} {:>5.1}{}", category.label(), bar, upper, mark);
    }
}

fn bar_len(upper: f64) -> usize {
    upper.round() as usize
}
