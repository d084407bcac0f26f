//! Transition commands and the reducer that applies them.
//!
//! [`reduce`] never mutates its input: it reads the previous snapshot and
//! returns the next one. None of the transitions can fail and none of them
//! validate; forward navigation is gated by the host using
//! [`can_proceed`](super::completeness::can_proceed).

use serde::{Deserialize, Serialize};

use crate::models::{
    CustomLicensingPolicy, DeliverableItem, EstimationMode, FIRST_STEP, LicensingPatch,
    ProjectInfoPatch, TimeComplexityPatch, WizardState, predefined_deliverables,
};

/// Engine parameters fixed at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Step the wizard starts on and returns to on reset.
    pub first_step: u32,
    /// Mode already decided by the host, if any.
    pub preset_mode: Option<EstimationMode>,
    pub custom_licensing: CustomLicensingPolicy,
}

impl EngineConfig {
    pub fn initial_state(&self) -> WizardState {
        WizardState::initial(self.first_step, self.preset_mode)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_step: FIRST_STEP,
            preset_mode: None,
            custom_licensing: CustomLicensingPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(EstimationMode),
    Next,
    Previous,
    GoTo(u32),
    UpdateProjectInfo(ProjectInfoPatch),
    UpdateDeliverables(Vec<DeliverableItem>),
    UpdateTimeComplexity(TimeComplexityPatch),
    UpdateLicensing(LicensingPatch),
    SeedDeliverables,
    Reset,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetMode(_) => "set_mode",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GoTo(_) => "go_to",
            Self::UpdateProjectInfo(_) => "update_project_info",
            Self::UpdateDeliverables(_) => "update_deliverables",
            Self::UpdateTimeComplexity(_) => "update_time_complexity",
            Self::UpdateLicensing(_) => "update_licensing",
            Self::SeedDeliverables => "seed_deliverables",
            Self::Reset => "reset",
        }
    }
}

/// Applies `command` to `state` and returns the resulting snapshot.
pub fn reduce(
    state: &WizardState,
    command: Command,
    config: &EngineConfig,
) -> WizardState {
    match command {
        Command::SetMode(mode) => WizardState {
            mode: Some(mode),
            ..state.clone()
        },
        Command::Next => WizardState {
            step: state.step.saturating_add(1),
            ..state.clone()
        },
        Command::Previous => WizardState {
            step: state.step.saturating_sub(1).max(FIRST_STEP),
            ..state.clone()
        },
        Command::GoTo(step) => WizardState {
            step: step.max(FIRST_STEP),
            ..state.clone()
        },
        Command::UpdateProjectInfo(patch) => WizardState {
            project_info: state.project_info.merged(patch),
            ..state.clone()
        },
        Command::UpdateDeliverables(deliverables) => WizardState {
            deliverables,
            ..state.clone()
        },
        Command::UpdateTimeComplexity(patch) => {
            let mut next = state.clone();
            next.time_complexity = state
                .time_complexity
                .merged(patch, config.custom_licensing);
            next
        }
        Command::UpdateLicensing(patch) => {
            let mut next = state.clone();
            next.time_complexity.licensing = state
                .time_complexity
                .licensing
                .merged(patch, config.custom_licensing);
            next
        }
        Command::SeedDeliverables => {
            let deliverables = if !state.deliverables_seeded && state.deliverables.is_empty() {
                predefined_deliverables()
            } else {
                state.deliverables.clone()
            };
            WizardState {
                deliverables,
                deliverables_seeded: true,
                ..state.clone()
            }
        }
        Command::Reset => config.initial_state(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{CommercialRights, Difficulty, LicensingInfo};

    #[test]
    fn reduce_leaves_previous_snapshot_untouched() {
        let config = EngineConfig::default();
        let before = WizardState::default();

        let after = reduce(
            &before,
            Command::UpdateProjectInfo(ProjectInfoPatch::name("Rebrand")),
            &config,
        );

        assert_eq!(before, WizardState::default());
        assert_eq!(after.project_info.name, "Rebrand");
    }

    #[test]
    fn previous_floors_at_first_step() {
        let config = EngineConfig::default();
        let state = reduce(&WizardState::default(), Command::Previous, &config);

        assert_eq!(state.step, 1);
    }

    #[test]
    fn go_to_zero_clamps_to_first_step() {
        let config = EngineConfig::default();
        let state = reduce(&WizardState::default(), Command::GoTo(0), &config);

        assert_eq!(state.step, 1);
    }

    #[test]
    fn set_mode_does_not_advance() {
        let config = EngineConfig::default();
        let state = reduce(
            &WizardState::default(),
            Command::SetMode(EstimationMode::Hourly),
            &config,
        );

        assert_eq!(state.mode, Some(EstimationMode::Hourly));
        assert_eq!(state.step, 1);
    }

    #[test]
    fn seed_only_fills_an_empty_list_once() {
        let config = EngineConfig::default();
        let seeded = reduce(&WizardState::default(), Command::SeedDeliverables, &config);
        assert_eq!(seeded.deliverables.len(), 5);
        assert!(seeded.deliverables_seeded);

        let emptied = reduce(&seeded, Command::UpdateDeliverables(Vec::new()), &config);
        let reseeded = reduce(&emptied, Command::SeedDeliverables, &config);

        assert!(reseeded.deliverables.is_empty());
    }

    #[test]
    fn seed_keeps_existing_items() {
        let config = EngineConfig::default();
        let custom = vec![DeliverableItem {
            id: "custom-1".to_string(),
            kind: "Zine".to_string(),
            quantity: 3,
            is_custom: true,
        }];
        let state = reduce(
            &WizardState::default(),
            Command::UpdateDeliverables(custom.clone()),
            &config,
        );

        let state = reduce(&state, Command::SeedDeliverables, &config);

        assert_eq!(state.deliverables, custom);
        assert!(state.deliverables_seeded);
    }

    #[test]
    fn reset_uses_configured_start() {
        let config = EngineConfig {
            first_step: 2,
            preset_mode: Some(EstimationMode::ProjectBased),
            ..Default::default()
        };
        let state = reduce(&WizardState::default(), Command::GoTo(5), &config);

        let state = reduce(&state, Command::Reset, &config);

        assert_eq!(state.step, 2);
        assert_eq!(state.mode, Some(EstimationMode::ProjectBased));
    }

    #[test]
    fn time_complexity_licensing_respects_policy() {
        let config = EngineConfig {
            custom_licensing: CustomLicensingPolicy::ClearWhenNotOther,
            ..Default::default()
        };
        let licensing = LicensingInfo {
            commercial_rights: CommercialRights::Personal,
            custom_licensing: Some("stale".to_string()),
            ..Default::default()
        };

        let state = reduce(
            &WizardState::default(),
            Command::UpdateTimeComplexity(TimeComplexityPatch {
                difficulty: Some(Difficulty::Easy),
                licensing: Some(licensing),
                ..Default::default()
            }),
            &config,
        );

        assert_eq!(state.time_complexity.licensing.custom_licensing, None);
        assert_eq!(state.time_complexity.difficulty, Some(Difficulty::Easy));
    }
}
