use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The two gender values the identity service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity - the registration payload of a synthetic user.
///
/// Serialized as-is as the body of the register endpoint. Fields are private
/// so that `confirm_password` can only ever equal `password`; deserialization
/// goes through [`RegisterBody`] and rejects a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RegisterBody")]
pub struct User {
    email: String,
    password: String,
    confirm_password: String,
    display_name: String,
    gender: Gender,
    preferred_category_keys: Vec<String>,
    country_key: String,
}

impl User {
    /// Build a user; the confirmation password is copied from `password`.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        gender: Gender,
        preferred_category_keys: Vec<String>,
        country_key: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            email: email.into(),
            confirm_password: password.clone(),
            password,
            display_name: display_name.into(),
            gender,
            preferred_category_keys,
            country_key: country_key.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn preferred_category_keys(&self) -> &[String] {
        &self.preferred_category_keys
    }

    pub fn country_key(&self) -> &str {
        &self.country_key
    }
}

/// Register body as it arrives on the wire, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    email: String,
    password: String,
    confirm_password: String,
    display_name: String,
    gender: Gender,
    preferred_category_keys: Vec<String>,
    country_key: String,
}

impl TryFrom<RegisterBody> for User {
    type Error = DomainError;

    fn try_from(body: RegisterBody) -> Result<Self, Self::Error> {
        if body.confirm_password != body.password {
            return Err(DomainError::PasswordMismatch);
        }

        Ok(User::new(
            body.email,
            body.password,
            body.display_name,
            body.gender,
            body.preferred_category_keys,
            body.country_key,
        ))
    }
}
