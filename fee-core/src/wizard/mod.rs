//! The fee estimator's step/state-transition engine.
//!
//! - `command` - the closed set of transitions and the pure reducer
//! - `engine` - owns the current snapshot and applies commands to it
//! - `flow` - host entry points, screen mapping and back/exit targets
//! - `completeness` - per-screen checks that gate forward navigation
//! - `progress` - the progress sidebar derived from flow and step

pub mod command;
pub mod completeness;
pub mod engine;
pub mod flow;
pub mod progress;

pub use command::{Command, EngineConfig, reduce};
pub use completeness::{can_proceed, missing_requirements};
pub use engine::WizardEngine;
pub use flow::{BackTarget, SummarySection, WizardFlow, WizardScreen};
pub use progress::{ProgressStep, progress_steps};
