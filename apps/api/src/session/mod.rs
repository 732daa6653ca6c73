//! Session context — the caller's identity, passed explicitly per request.
//!
//! The front-end keeps the signed-in user in client storage and sends it on
//! each call as `X-User-Email` / `X-User-Type`. Handlers that need identity
//! take a `SessionContext` extractor argument; nothing reads ambient state.
//! These headers identify, they do not authenticate.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const USER_TYPE_HEADER: &str = "x-user-type";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Candidate,
    Company,
}

impl UserType {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "candidate" => Some(UserType::Candidate),
            "company" => Some(UserType::Company),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    pub email: String,
    pub user_type: UserType,
}

impl SessionContext {
    pub fn require_candidate(&self) -> Result<&str, AppError> {
        match self.user_type {
            UserType::Candidate => Ok(&self.email),
            UserType::Company => Err(AppError::Forbidden),
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let email = header(USER_EMAIL_HEADER).ok_or(AppError::Unauthorized)?;
        let user_type = header(USER_TYPE_HEADER)
            .map(|v| {
                UserType::parse(v)
                    .ok_or_else(|| AppError::Validation(format!("unknown user type '{v}'")))
            })
            .transpose()?
            .ok_or(AppError::Unauthorized)?;

        Ok(SessionContext {
            email: email.to_string(),
            user_type,
        })
    }
}
