/*
[INPUT]:  Caller-provided profile fields
[OUTPUT]: Validated partial update payloads for the profile endpoint
[POS]:    Data layer - request types and client-side validation
[UPDATE]: When profile fields or validation rules change
*/

use serde::Serialize;
use url::Url;

use crate::http::{AuthError, Result};

/// Partial profile update.
///
/// `None` fields are omitted from the wire body entirely. An explicit empty
/// string is transmitted as given: clearing a field is the caller's decision,
/// not something the client infers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Include an email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Include an avatar image URL
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Validate the update before any request is sent.
    ///
    /// Rejects an update whose provided fields are all empty after trimming,
    /// a malformed email, and an avatar that is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let has_content = [&self.name, &self.email, &self.avatar]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()));

        if !has_content {
            return Err(AuthError::Validation(
                "profile update contains no non-empty fields".to_string(),
            ));
        }

        if let Some(email) = self.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !is_valid_email(email) {
                return Err(AuthError::Validation(format!(
                    "invalid email address: {email}"
                )));
            }
        }

        if let Some(avatar) = self.avatar.as_deref() {
            let avatar = avatar.trim();
            if !avatar.is_empty() && !is_valid_image_url(avatar) {
                return Err(AuthError::Validation(format!(
                    "avatar must be an http(s) URL: {avatar}"
                )));
            }
        }

        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}

fn is_valid_image_url(avatar: &str) -> bool {
    match Url::parse(avatar) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
