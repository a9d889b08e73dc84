use healthgraph_core::{bmr, daily_calories, ActivityLevel, Gender};

#[test]
fn test_bmr_male() {
    // 88.36 + 13.4·70 + 4.8·175 − 5.7·30 = 1695.36
    let b = bmr(70.0, 1.75, 30, Gender::Male);
    assert!((b - 1695.36).abs() < 1e-9);
}

#[test]
fn test_bmr_female() {
    // 447.6 + 9.2·60 + 3.1·165 − 4.3·25 = 1403.6
    let b = bmr(60.0, 1.65, 25, Gender::Female);
    assert!((b - 1403.6).abs() < 1e-9);
}

#[test]
fn test_daily_calories_example() {
    // 1695.36 × 1.55 = 2627.808 → 2627.81
    let kcal = daily_calories(70.0, 1.75, 30, Gender::Male, ActivityLevel::ModeratelyActive);
    assert_eq!(kcal, 2627.81);
}

#[test]
fn test_activity_multipliers() {
    assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
    assert_eq!(ActivityLevel::LightlyActive.multiplier(), 1.375);
    assert_eq!(ActivityLevel::ModeratelyActive.multiplier(), 1.55);
    assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.725);
    assert_eq!(ActivityLevel::SuperActive.multiplier(), 1.9);
}

#[test]
fn test_calories_strictly_increasing_in_weight() {
    for gender in [Gender::Male, Gender::Female] {
        let lighter = daily_calories(70.0, 1.75, 30, gender, ActivityLevel::Sedentary);
        let heavier = daily_calories(71.0, 1.75, 30, gender, ActivityLevel::Sedentary);
        assert!(heavier > lighter, "kcal burde øke med vekt ({gender:?})");
    }
}

#[test]
fn test_calories_strictly_decreasing_in_age() {
    for gender in [Gender::Male, Gender::Female] {
        let younger = daily_calories(70.0, 1.75, 30, gender, ActivityLevel::VeryActive);
        let older = daily_calories(70.0, 1.75, 31, gender, ActivityLevel::VeryActive);
        assert!(older < younger, "kcal burde synke med alder ({gender:?})");
    }
}

#[test]
fn test_more_activity_more_calories() {
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];
    let kcal: Vec<f64> = levels
        .iter()
        .map(|&a| daily_calories(70.0, 1.75, 30, Gender::Female, a))
        .collect();
    for pair in kcal.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}
