use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digits::digits_only;
use crate::error::DomainError;

/// Area codes (DDD) of the São Paulo numbering region, where mobile numbers
/// keep their leading 9.
pub const NINTH_DIGIT_DDDS: [&str; 9] = ["11", "12", "13", "14", "15", "16", "17", "18", "19"];

/// Fewest digits a complete number can have: DDD plus an 8-digit landline.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Brazilian phone number in the canonical digits-only form the API stores.
///
/// Numbers of 10 or 11 digits are canonical. Longer input is not rejected:
/// it is kept as its digits, the same pass-through `normalize_phone_number`
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::PhoneRequired);
        }
        if digits_only(raw).len() < MIN_PHONE_DIGITS {
            return Err(DomainError::PhoneTooShort);
        }
        Ok(Self(normalize_phone_number(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_phone_for_display(&self.0))
    }
}

/// Reduces a phone number to the canonical form, applying the regional
/// 9th-digit rule.
///
/// Inputs with fewer than 10 digits are not yet complete and are returned
/// untouched, punctuation included. DDDs 11-19 keep every digit; elsewhere an
/// 11-digit mobile number loses the `9` after the area code.
pub fn normalize_phone_number(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let digits = digits_only(raw);
    if digits.len() < MIN_PHONE_DIGITS {
        return raw.to_string();
    }

    if NINTH_DIGIT_DDDS.contains(&&digits[..2]) {
        return digits;
    }

    if digits.len() == 11 && digits.as_bytes()[2] == b'9' {
        return format!("{}{}", &digits[..2], &digits[3..]);
    }
    digits
}

/// Formats a stored number as `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
/// Anything that is not 10 or 11 digits comes back unchanged.
pub fn format_phone_for_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let digits = digits_only(raw);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => raw.to_string(),
    }
}

/// Live-typing mask, recomputed from the digits on every keystroke.
///
/// The digit after the area code is shown on its own, `(62) 9 9844-8536`.
/// Digits past the eleventh are dropped from the mask.
pub fn format_phone_input(raw: &str) -> String {
    let digits = digits_only(raw);
    let len = digits.len();

    match len {
        0..=2 => digits,
        3 => format!("({}) {}", &digits[..2], &digits[2..]),
        4..=7 => format!("({}) {} {}", &digits[..2], &digits[2..3], &digits[3..]),
        _ => format!(
            "({}) {} {}-{}",
            &digits[..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..len.min(11)]
        ),
    }
}
