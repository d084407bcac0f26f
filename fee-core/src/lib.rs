pub mod auth;
pub mod models;
pub mod summary;
pub mod wizard;

pub use auth::{AuthError, AuthService, AuthUser, MockAuthService, display_name};
pub use models::*;
pub use wizard::{Command, EngineConfig, WizardEngine, WizardFlow, WizardScreen};
