use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use scancal_core::account::cpf::{format_cpf_for_display, format_cpf_input, CPF_INPUT_MAX_LEN};
use scancal_core::account::phone::{format_phone_for_display, format_phone_input};
use scancal_core::account::{
    bmi, is_plausible_email, provided_height, provided_weight, validate_height, validate_weight,
    ActivityLevel, BmiCategory, Gender, MIN_PASSWORD_LENGTH,
};
use scancal_core::{Cpf, DomainError, Phone};
use scancal_ports::types::{ProfileUpdate, Registration, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Cpf,
    Height,
    Weight,
}

/// Per-field errors of a form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, DomainError>);

impl FormErrors {
    pub fn insert(&mut self, field: Field, error: DomainError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<DomainError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<DomainError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, DomainError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Applies the live mask of `field` to what the user just typed.
fn mask_input(field: Field, value: &str) -> String {
    match field {
        Field::Phone => format_phone_input(value),
        Field::Cpf => {
            let capped: String = value.chars().take(CPF_INPUT_MAX_LEN).collect();
            format_cpf_input(&capped)
        }
        _ => value.to_string(),
    }
}

fn required(value: &str, error: DomainError) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

/// Sign-up form state. Validation stops at the first broken rule.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: String,
    cpf: String,
    error: Option<DomainError>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a keystroke's worth of input, masked for phone and CPF.
    /// Typing anywhere clears the pending error.
    pub fn set(&mut self, field: Field, value: &str) {
        let value = mask_input(field, value);
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Phone => self.phone = value,
            Field::Cpf => self.cpf = value,
            Field::Height | Field::Weight => return,
        }
        self.error = None;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
            Field::Cpf => &self.cpf,
            Field::Height | Field::Weight => "",
        }
    }

    pub fn error(&self) -> Option<DomainError> {
        self.error
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, error: DomainError) {
        self.error = Some(error);
    }

    /// Checks the rules in display order and builds the API payload.
    pub fn validate(&self) -> Result<Registration, DomainError> {
        required(&self.name, DomainError::NameRequired)?;
        required(&self.email, DomainError::EmailRequired)?;
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(DomainError::PasswordMismatch);
        }
        let phone = Phone::parse(&self.phone)?;
        let cpf = Cpf::parse(&self.cpf)?;

        Ok(Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone,
            cpf,
        })
    }
}

/// Profile editor state. Validation reports every broken field at once.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    name: String,
    email: String,
    phone: String,
    cpf: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    height: Option<u32>,
    weight: Option<f64>,
    pub activity_level: ActivityLevel,
    errors: FormErrors,
}

impl ProfileForm {
    /// Pre-fills the editor from the stored record, phone and CPF in display form.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: format_phone_for_display(&profile.phone),
            cpf: format_cpf_for_display(&profile.cpf),
            birth_date: profile.birth_date,
            gender: profile.gender,
            height: profile.height,
            weight: profile.weight,
            activity_level: profile.activity_level.unwrap_or_default(),
            errors: FormErrors::default(),
        }
    }

    /// Stores text input for one of the text fields and drops its error.
    pub fn set(&mut self, field: Field, value: &str) {
        let value = mask_input(field, value);
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Cpf => self.cpf = value,
            _ => return,
        }
        self.errors.remove(field);
    }

    pub fn set_height(&mut self, cm: Option<u32>) {
        self.height = cm;
        self.errors.remove(Field::Height);
    }

    pub fn set_weight(&mut self, kg: Option<f64>) {
        self.weight = kg;
        self.errors.remove(Field::Weight);
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Cpf => &self.cpf,
            _ => "",
        }
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Live BMI preview, present once both measurements are filled in.
    pub fn bmi(&self) -> Option<f64> {
        bmi(self.height, self.weight)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(field);
    }

    /// Re-checks every field, records the errors on the form and, when there
    /// are none, builds the API payload.
    pub fn validate(&mut self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::default();

        if let Err(e) = required(&self.name, DomainError::NameRequired) {
            errors.insert(Field::Name, e);
        }

        if let Err(e) = required(&self.email, DomainError::EmailRequired) {
            errors.insert(Field::Email, e);
        } else if !is_plausible_email(&self.email) {
            errors.insert(Field::Email, DomainError::InvalidEmail);
        }

        let phone = Phone::parse(&self.phone)
            .map_err(|e| errors.insert(Field::Phone, e))
            .ok();
        let cpf = Cpf::parse(&self.cpf)
            .map_err(|e| errors.insert(Field::Cpf, e))
            .ok();

        let height = provided_height(self.height);
        let weight = provided_weight(self.weight);
        if let Some(Err(e)) = height.map(validate_height) {
            errors.insert(Field::Height, e);
        }
        if let Some(Err(e)) = weight.map(validate_weight) {
            errors.insert(Field::Weight, e);
        }

        self.errors = errors.clone();
        match (phone, cpf) {
            (Some(phone), Some(cpf)) if errors.is_empty() => Ok(ProfileUpdate {
                name: self.name.clone(),
                email: self.email.clone(),
                phone,
                cpf,
                birth_date: self.birth_date,
                gender: self.gender,
                height,
                weight,
                activity_level: self.activity_level,
            }),
            _ => Err(errors),
        }
    }
}
