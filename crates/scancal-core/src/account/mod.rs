pub mod cpf;
pub mod phone;

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub use cpf::Cpf;
pub use phone::Phone;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const HEIGHT_RANGE_CM: RangeInclusive<u32> = 100..=250;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported activity level, used by the API to size daily goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

pub fn validate_height(cm: u32) -> Result<(), DomainError> {
    if !HEIGHT_RANGE_CM.contains(&cm) {
        return Err(DomainError::InvalidHeight);
    }
    Ok(())
}

pub fn validate_weight(kg: f64) -> Result<(), DomainError> {
    if !WEIGHT_RANGE_KG.contains(&kg) {
        return Err(DomainError::InvalidWeight);
    }
    Ok(())
}

/// A height of zero counts as not filled in.
pub fn provided_height(cm: Option<u32>) -> Option<u32> {
    cm.filter(|&cm| cm != 0)
}

/// A weight of zero (or NaN) counts as not filled in.
pub fn provided_weight(kg: Option<f64>) -> Option<f64> {
    kg.filter(|kg| *kg != 0.0 && !kg.is_nan())
}

/// Body mass index rounded to one decimal, when both measurements are given.
pub fn bmi(height_cm: Option<u32>, weight_kg: Option<f64>) -> Option<f64> {
    let meters = f64::from(provided_height(height_cm)?) / 100.0;
    let raw = provided_weight(weight_kg)? / (meters * meters);
    Some((raw * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Abaixo do peso",
            Self::Normal => "Peso normal",
            Self::Overweight => "Sobrepeso",
            Self::Obese => "Obesidade",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Loose email shape check: some non-blank text, `@`, then a non-blank
/// domain with a dot that is neither its first nor its last character.
pub fn is_plausible_email(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        word.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &word[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_bounds_are_inclusive() {
        assert!(validate_height(100).is_ok());
        assert!(validate_height(250).is_ok());
        assert_eq!(validate_height(99), Err(DomainError::InvalidHeight));
        assert_eq!(validate_height(251), Err(DomainError::InvalidHeight));
    }

    #[test]
    fn weight_bounds_are_inclusive() {
        assert!(validate_weight(30.0).is_ok());
        assert!(validate_weight(72.5).is_ok());
        assert!(validate_weight(300.0).is_ok());
        assert_eq!(validate_weight(29.9), Err(DomainError::InvalidWeight));
        assert_eq!(validate_weight(f64::NAN), Err(DomainError::InvalidWeight));
    }

    #[test]
    fn zero_measurements_count_as_missing() {
        assert_eq!(provided_height(Some(0)), None);
        assert_eq!(provided_height(Some(170)), Some(170));
        assert_eq!(provided_weight(Some(0.0)), None);
        assert_eq!(provided_weight(Some(f64::NAN)), None);
        assert_eq!(provided_weight(Some(65.0)), Some(65.0));
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        assert_eq!(bmi(Some(170), Some(65.0)), Some(22.5));
        assert_eq!(bmi(Some(200), Some(100.0)), Some(25.0));
        assert_eq!(bmi(Some(160), Some(90.0)), Some(35.2));
    }

    #[test]
    fn bmi_needs_both_measurements() {
        assert_eq!(bmi(None, Some(65.0)), None);
        assert_eq!(bmi(Some(170), None), None);
        assert_eq!(bmi(Some(0), Some(65.0)), None);
        assert_eq!(bmi(Some(170), Some(0.0)), None);
    }

    #[test]
    fn bmi_category_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn bmi_category_labels() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Abaixo do peso");
        assert_eq!(BmiCategory::Normal.to_string(), "Peso normal");
        assert_eq!(BmiCategory::Overweight.to_string(), "Sobrepeso");
        assert_eq!(BmiCategory::Obese.to_string(), "Obesidade");
    }

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("ana@scancal.com.br"));
        assert!(is_plausible_email("  ana@x.io  "));
        assert!(is_plausible_email("a@@b.c"));
        assert!(!is_plausible_email("ana@scancal"));
        assert!(!is_plausible_email("@scancal.com"));
        assert!(!is_plausible_email("ana@.com"));
        assert!(!is_plausible_email("ana@com."));
        assert!(!is_plausible_email("ana @scancal.com"));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn enums_use_api_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very_active\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(ActivityLevel::default(), ActivityLevel::Moderate);
    }
}
