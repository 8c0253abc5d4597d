use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use scancal_core::account::{ActivityLevel, Gender};
use scancal_core::{Cpf, Phone};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Phone,
    pub cpf: Cpf,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `PUT /api/users/profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: Phone,
    pub cpf: Cpf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub activity_level: ActivityLevel,
}

/// User record as the API returns it. Phone and CPF hold canonical digits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height: Option<u32>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserProfile,
    pub token: String,
}
