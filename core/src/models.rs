use serde::{Deserialize, Serialize};

use crate::error::HealthError;

/// Kjønn slik skjemaet sender det ("Male"/"Female").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Tolerant parsing for UI-strenger (case-insensitiv).
    pub fn parse(s: &str) -> Result<Self, HealthError> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(HealthError::InvalidInput { field: "gender" }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Aktivitetsnivå – de fem verdiene fra nedtrekksmenyen. Ingen default-fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    #[serde(rename = "Lightly active")]
    LightlyActive,
    #[serde(rename = "Moderately active")]
    ModeratelyActive,
    #[serde(rename = "Very active")]
    VeryActive,
    #[serde(rename = "Super active")]
    SuperActive,
}

impl ActivityLevel {
    /// Fast multiplikator mot BMR (TDEE = BMR × faktor).
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    /// Tolerant parsing for UI-strenger ("lightly active", "Lightly_active" osv.).
    /// Ukjente verdier feiler hardt – ingen stille fallback.
    pub fn parse(s: &str) -> Result<Self, HealthError> {
        let key = s.trim().to_lowercase().replace(['_', '-'], " ");
        match key.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly active" => Ok(ActivityLevel::LightlyActive),
            "moderately active" => Ok(ActivityLevel::ModeratelyActive),
            "very active" => Ok(ActivityLevel::VeryActive),
            "super active" => Ok(ActivityLevel::SuperActive),
            _ => Err(HealthError::InvalidActivityLevel(s.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::SuperActive => "Super active",
        }
    }
}

/// BMI-kategori med fast status-tag for UI-et.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Status-fargen resultatsiden bruker per kategori.
    pub fn tag(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "warning",
            BmiCategory::NormalWeight => "success",
            BmiCategory::Overweight => "warning",
            BmiCategory::Obese => "error",
        }
    }
}

/// Målinger fra skjemaet. Opprettes per beregning og kastes etterpå.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: f64, // kg
    pub height_m: f64,  // meter
    pub age: u32,       // år
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Measurement {
    /// Avvis ikke-positive (eller ikke-endelige) verdier før beregning.
    /// Ingen delberegning gjøres ved ugyldig input.
    pub fn validate(&self) -> Result<(), HealthError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(HealthError::InvalidInput { field: "weight_kg" });
        }
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(HealthError::InvalidInput { field: "height_m" });
        }
        if self.age == 0 {
            return Err(HealthError::InvalidInput { field: "age" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_parse_tolerant() {
        assert_eq!(
            ActivityLevel::parse("Moderately active").unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(
            ActivityLevel::parse(" lightly_active ").unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            ActivityLevel::parse("SUPER ACTIVE").unwrap(),
            ActivityLevel::SuperActive
        );
    }

    #[test]
    fn test_activity_parse_unknown_fails() {
        let err = ActivityLevel::parse("couch potato").unwrap_err();
        assert_eq!(err, HealthError::InvalidActivityLevel("couch potato".into()));
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("female").unwrap(), Gender::Female);
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert!(Gender::parse("other").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_age() {
        let m = Measurement {
            weight_kg: 70.0,
            height_m: 1.75,
            age: 0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
        };
        assert_eq!(m.validate().unwrap_err(), HealthError::InvalidInput { field: "age" });
    }
}
