use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {0}")]
    EmailTaken(String),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Auth provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
    pub role: String,
    pub email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub google_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// The authentication provider as the wizard's hosts consume it.
///
/// The wizard itself only ever reads the signed-in user's display name.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError>;

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError>;

    async fn reset_password(
        &self,
        email: &str,
    ) -> Result<(), AuthError>;

    async fn verify_email(
        &self,
        code: &str,
    ) -> Result<(), AuthError>;

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;
}

/// Name shown in the wizard's header.
///
/// Prefers the first name, then the last name, then the part of the email
/// before `@` with its first letter capitalized. Falls back to "Designer".
pub fn display_name(user: Option<&AuthUser>) -> String {
    let Some(user) = user else {
        return "Designer".to_string();
    };

    let non_blank = |name: &Option<String>| {
        name.as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    };

    if let Some(name) = non_blank(&user.first_name).or_else(|| non_blank(&user.last_name)) {
        return name;
    }

    let prefix = user.email.split('@').next().unwrap_or_default();
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Designer".to_string(),
    }
}
