//! Terminal host for the fee estimator wizard.

pub mod actions;
pub mod page;
pub mod render;
pub mod session;

pub use actions::{InputError, PageAction};
pub use page::{EstimatorPage, MessageType, PageOutcome, StatusMessage};
pub use render::render_page;
pub use session::{SessionOutcome, run_session};
