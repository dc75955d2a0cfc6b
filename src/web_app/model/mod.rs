// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the remote auth/catalog API.
// Fields the API sends but the app never reads are ignored on deserialize.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Email/password pair submitted by both the registration and login forms
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A required form field was left empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty before a request is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok(())
    }
}

/// Catalog item as returned by `GET /api/products`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Identity of the logged-in user (`sub` claim, which is the email)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub sub: String,
}

/// Body of `GET /api/me`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserIdentity,
}

/// Body of `POST /auth/signup`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/login`; a 2xx reply may still lack the token
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Optional error payload carried by non-2xx responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
