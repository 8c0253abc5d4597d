use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digits::digits_only;
use crate::error::DomainError;

pub const CPF_LENGTH: usize = 11;

/// Longest text a CPF field accepts, the width of `000.000.000-00`.
pub const CPF_INPUT_MAX_LEN: usize = 14;

/// CPF (Cadastro de Pessoas Físicas) holding its 11 digits, check digits
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::CpfRequired);
        }
        if !validate_cpf(raw) {
            return Err(DomainError::InvalidCpf);
        }
        Ok(Self(digits_only(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cpf_for_display(&self.0))
    }
}

/// Formats a stored CPF as `000.000.000-00`, tolerating partial input.
pub fn format_cpf_for_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    mask(&digits_only(raw))
}

/// Live-typing mask for the CPF field.
pub fn format_cpf_input(raw: &str) -> String {
    mask(&digits_only(raw))
}

fn mask(digits: &str) -> String {
    let digits = &digits[..digits.len().min(CPF_LENGTH)];
    match digits.len() {
        0..=3 => digits.to_string(),
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Modulo-11 check digit over `digits`, weighted from `len + 1` down to 2.
pub fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Both check digits for a 9-digit CPF base.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// Whether `raw` is a structurally valid CPF. Punctuation is ignored.
///
/// Sequences of one repeated digit pass the checksum but are never issued,
/// so they are rejected.
pub fn validate_cpf(raw: &str) -> bool {
    let digits: Vec<u8> = raw
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}
