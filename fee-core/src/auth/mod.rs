pub mod mock;
pub mod service;

pub use mock::MockAuthService;
pub use service::{AuthError, AuthService, AuthUser, display_name};
