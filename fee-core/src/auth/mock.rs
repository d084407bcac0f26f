use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::service::{AuthError, AuthService, AuthUser};

#[derive(Debug, Default)]
struct MockState {
    accounts: HashMap<String, (String, AuthUser)>,
    current: Option<AuthUser>,
    next_id: i64,
}

/// In-memory stand-in for the auth provider.
///
/// Accounts live only as long as the value. Passwords are compared as plain
/// strings.
#[derive(Debug, Default)]
pub struct MockAuthService {
    state: Mutex<MockState>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service with one registered account that is already signed in.
    pub fn signed_in_as(
        email: &str,
        first_name: Option<&str>,
    ) -> Self {
        let service = Self::new();
        {
            let mut state = service.lock();
            let user = AuthUser {
                first_name: first_name.map(str::to_string),
                email_verified: true,
                ..new_user(&mut state, email)
            };
            state
                .accounts
                .insert(email.to_string(), (String::new(), user.clone()));
            state.current = Some(user);
        }
        service
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // Updates are single statements, so a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn new_user(
    state: &mut MockState,
    email: &str,
) -> AuthUser {
    state.next_id += 1;
    AuthUser {
        user_id: state.next_id,
        email: email.to_string(),
        role: "designer".to_string(),
        email_verified: false,
        first_name: None,
        last_name: None,
        google_id: None,
        created_at: Some(Utc::now()),
        last_login_at: None,
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        debug!(email, "mock sign up");
        let mut state = self.lock();
        if state.accounts.contains_key(email) {
            return Err(AuthError::EmailTaken(email.to_string()));
        }
        let user = new_user(&mut state, email);
        state
            .accounts
            .insert(email.to_string(), (password.to_string(), user.clone()));
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        debug!(email, "mock sign in");
        let mut state = self.lock();
        let user = match state.accounts.get_mut(email) {
            Some((stored, user)) if stored.as_str() == password => {
                user.last_login_at = Some(Utc::now());
                user.clone()
            }
            _ => return Err(AuthError::InvalidCredentials),
        };
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        debug!("mock sign out");
        self.lock().current = None;
        Ok(())
    }

    async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError> {
        debug!("mock google sign in");
        let mut state = self.lock();
        let email = "mock@google.com";
        let user = match state.accounts.get(email) {
            Some((_, user)) => user.clone(),
            None => {
                let user = AuthUser {
                    email_verified: true,
                    google_id: Some("mock-google-id".to_string()),
                    ..new_user(&mut state, email)
                };
                state
                    .accounts
                    .insert(email.to_string(), (String::new(), user.clone()));
                user
            }
        };
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn reset_password(
        &self,
        email: &str,
    ) -> Result<(), AuthError> {
        debug!(email, "mock password reset");
        Ok(())
    }

    async fn verify_email(
        &self,
        code: &str,
    ) -> Result<(), AuthError> {
        if code.trim().is_empty() {
            return Err(AuthError::InvalidVerificationCode);
        }
        let mut state = self.lock();
        let Some(current) = state.current.as_mut() else {
            return Err(AuthError::NotSignedIn);
        };
        current.email_verified = true;
        let verified = current.clone();
        if let Some((_, account)) = state.accounts.get_mut(&verified.email) {
            account.email_verified = true;
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Ok(self.lock().current.clone())
    }
}
