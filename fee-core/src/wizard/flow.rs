//! Host entry points into the wizard.
//!
//! Both flows number their screens the same way (project information is
//! step 2, the summary step 5); they differ in where they start, which mode
//! is preset, and where "back" leads from the first screen.
//!
//! | Step | ModeSelectFirst                        | ProjectBasedOnly   |
//! |------|----------------------------------------|--------------------|
//! | 1    | Mode selection                         | Project information|
//! | 2    | Project information (Coming soon if hourly) | Project information|
//! | 3    | Deliverables                           | Deliverables       |
//! | 4    | Time & complexity                      | Time & complexity  |
//! | 5    | Summary                                | Summary            |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::command::EngineConfig;
use crate::models::{CustomLicensingPolicy, EstimationMode, FIRST_STEP, WizardState};

pub const PROJECT_INFO_STEP: u32 = 2;
pub const DELIVERABLES_STEP: u32 = 3;
pub const TIME_COMPLEXITY_STEP: u32 = 4;
pub const SUMMARY_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardFlow {
    /// Starts on the mode selection screen.
    #[default]
    ModeSelectFirst,
    /// Mode is already project-based; starts on project information.
    ProjectBasedOnly,
}

/// The screen a host renders for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardScreen {
    ModeSelection,
    ComingSoon,
    ProjectInformation,
    Deliverables,
    TimeComplexity,
    Summary,
}

impl WizardScreen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ModeSelection => "Fee Estimator",
            Self::ComingSoon => "Coming Soon",
            Self::ProjectInformation => "Project Information",
            Self::Deliverables => "Scope and Deliverable",
            Self::TimeComplexity => "Time and Complexity",
            Self::Summary => "Project Summary",
        }
    }
}

/// Where "back" leads from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    Step(u32),
    /// Leave the wizard and return to the host page.
    Exit,
}

/// Sections of the summary that offer an "edit" link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySection {
    ProjectInformation,
    Deliverables,
    TimeComplexity,
}

impl SummarySection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project" | "project-info" => Some(Self::ProjectInformation),
            "deliverables" | "scope" => Some(Self::Deliverables),
            "time" | "complexity" => Some(Self::TimeComplexity),
            _ => None,
        }
    }
}

impl WizardFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModeSelectFirst => "mode-select-first",
            Self::ProjectBasedOnly => "project-based-only",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mode-select-first" => Some(Self::ModeSelectFirst),
            "project-based-only" => Some(Self::ProjectBasedOnly),
            _ => None,
        }
    }

    pub fn first_step(&self) -> u32 {
        match self {
            Self::ModeSelectFirst => FIRST_STEP,
            Self::ProjectBasedOnly => PROJECT_INFO_STEP,
        }
    }

    pub fn preset_mode(&self) -> Option<EstimationMode> {
        match self {
            Self::ModeSelectFirst => None,
            Self::ProjectBasedOnly => Some(EstimationMode::ProjectBased),
        }
    }

    pub fn engine_config(
        &self,
        custom_licensing: CustomLicensingPolicy,
    ) -> EngineConfig {
        EngineConfig {
            first_step: self.first_step(),
            preset_mode: self.preset_mode(),
            custom_licensing,
        }
    }

    /// Maps the state to the screen this flow renders for it. Steps without
    /// a screen of their own fall back to the flow's entry screen.
    pub fn screen(
        &self,
        state: &WizardState,
    ) -> WizardScreen {
        match (self, state.step) {
            (_, DELIVERABLES_STEP) => WizardScreen::Deliverables,
            (_, TIME_COMPLEXITY_STEP) => WizardScreen::TimeComplexity,
            (_, SUMMARY_STEP) => WizardScreen::Summary,
            (Self::ModeSelectFirst, PROJECT_INFO_STEP) => match state.mode {
                Some(EstimationMode::Hourly) => WizardScreen::ComingSoon,
                _ => WizardScreen::ProjectInformation,
            },
            (Self::ModeSelectFirst, _) => WizardScreen::ModeSelection,
            (Self::ProjectBasedOnly, _) => WizardScreen::ProjectInformation,
        }
    }

    pub fn back_target(
        &self,
        step: u32,
    ) -> BackTarget {
        let exit_at = match self {
            Self::ModeSelectFirst => FIRST_STEP,
            Self::ProjectBasedOnly => PROJECT_INFO_STEP,
        };
        if step <= exit_at {
            BackTarget::Exit
        } else {
            BackTarget::Step(step - 1)
        }
    }

    pub fn edit_target(
        &self,
        section: SummarySection,
    ) -> u32 {
        match section {
            SummarySection::ProjectInformation => PROJECT_INFO_STEP,
            SummarySection::Deliverables => DELIVERABLES_STEP,
            SummarySection::TimeComplexity => TIME_COMPLEXITY_STEP,
        }
    }

    pub fn shows_progress(
        &self,
        step: u32,
    ) -> bool {
        match self {
            Self::ModeSelectFirst => step > FIRST_STEP,
            Self::ProjectBasedOnly => true,
        }
    }
}

impl fmt::Display for WizardFlow {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
