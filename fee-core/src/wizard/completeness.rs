//! Per-screen completeness checks.
//!
//! | Screen              | Allows advancing when                                  |
//! |---------------------|--------------------------------------------------------|
//! | Mode selection      | a mode is chosen                                       |
//! | Project information | trimmed name and trimmed description are non-empty     |
//! | Deliverables        | the list is non-empty and some quantity is above zero  |
//! | Time & complexity   | duration is above zero and a difficulty is chosen      |
//! | Summary             | always (completing resets the wizard)                  |
//! | Coming soon         | never                                                  |

use super::flow::{WizardFlow, WizardScreen};
use crate::models::WizardState;

/// Whether the host may call `next_step` (or complete, on the summary).
pub fn can_proceed(
    state: &WizardState,
    flow: WizardFlow,
) -> bool {
    match flow.screen(state) {
        WizardScreen::ComingSoon => false,
        screen => unmet(screen, state).is_empty(),
    }
}

/// Human-readable reasons the current screen is not complete. Empty when the
/// user may advance.
pub fn missing_requirements(
    state: &WizardState,
    flow: WizardFlow,
) -> Vec<&'static str> {
    unmet(flow.screen(state), state)
}

fn unmet(
    screen: WizardScreen,
    state: &WizardState,
) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match screen {
        WizardScreen::ModeSelection => {
            if state.mode.is_none() {
                missing.push("Select an estimation mode.");
            }
        }
        WizardScreen::ComingSoon => {
            missing.push("Base rate estimation is not available yet.");
        }
        WizardScreen::ProjectInformation => {
            if state.project_info.name.trim().is_empty() {
                missing.push("Project name is required.");
            }
            if state.project_info.description.trim().is_empty() {
                missing.push("Project description is required.");
            }
        }
        WizardScreen::Deliverables => {
            if state.deliverables.is_empty() {
                missing.push("Add at least one deliverable.");
            } else if state.requested_deliverables().next().is_none() {
                missing.push("At least one deliverable needs a quantity above zero.");
            }
        }
        WizardScreen::TimeComplexity => {
            if state.time_complexity.duration == 0 {
                missing.push("Project duration must be more than 0 hours.");
            }
            if state.time_complexity.difficulty.is_none() {
                missing.push("Select a project difficulty.");
            }
        }
        WizardScreen::Summary => {}
    }

    missing
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{
        Difficulty, EstimationMode, ProjectInformation, TimeComplexity, predefined_deliverables,
        set_quantity,
    };

    const FLOW: WizardFlow = WizardFlow::ModeSelectFirst;

    fn at_step(step: u32) -> WizardState {
        WizardState::initial(step, Some(EstimationMode::ProjectBased))
    }

    fn with_project(
        name: &str,
        description: &str,
    ) -> WizardState {
        WizardState {
            project_info: ProjectInformation {
                name: name.to_string(),
                description: description.to_string(),
                ..Default::default()
            },
            ..at_step(2)
        }
    }

    #[test]
    fn mode_selection_needs_a_mode() {
        assert!(!can_proceed(&WizardState::default(), FLOW));

        let chosen = WizardState::initial(1, Some(EstimationMode::Hourly));
        assert!(can_proceed(&chosen, FLOW));
    }

    #[test]
    fn project_info_rejects_whitespace_name() {
        let state = with_project(" ", "valid");

        assert!(!can_proceed(&state, FLOW));
        assert_eq!(
            missing_requirements(&state, FLOW),
            vec!["Project name is required."]
        );
    }

    #[test]
    fn project_info_accepts_both_fields() {
        assert!(can_proceed(&with_project("A", "B"), FLOW));
    }

    #[test]
    fn project_info_rejects_blank_description() {
        assert!(!can_proceed(&with_project("A", "\t\n"), FLOW));
    }

    #[test]
    fn deliverables_need_a_positive_quantity() {
        let empty = at_step(3);
        assert!(!can_proceed(&empty, FLOW));

        let mut zeroed = predefined_deliverables();
        for id in ["logo-design", "poster", "brand-guidelines", "website-mockup", "app-screen"] {
            zeroed = set_quantity(&zeroed, id, 0).unwrap();
        }
        let all_zero = WizardState {
            deliverables: zeroed.clone(),
            ..at_step(3)
        };
        assert!(!can_proceed(&all_zero, FLOW));

        let one = WizardState {
            deliverables: set_quantity(&zeroed, "poster", 1).unwrap(),
            ..at_step(3)
        };
        assert!(can_proceed(&one, FLOW));
    }

    #[test]
    fn time_complexity_needs_duration_and_difficulty() {
        let mut state = at_step(4);
        assert_eq!(missing_requirements(&state, FLOW).len(), 2);

        state.time_complexity = TimeComplexity {
            duration: 10,
            ..Default::default()
        };
        assert!(!can_proceed(&state, FLOW));

        state.time_complexity.difficulty = Some(Difficulty::Easy);
        assert!(can_proceed(&state, FLOW));
    }

    #[test]
    fn summary_always_proceeds() {
        assert!(can_proceed(&at_step(5), FLOW));
    }

    #[test]
    fn coming_soon_never_proceeds() {
        let hourly = WizardState::initial(2, Some(EstimationMode::Hourly));

        assert!(!can_proceed(&hourly, FLOW));
    }

    #[test]
    fn predicate_follows_flow_mapping() {
        // Step 1 is project information in the project-based flow.
        let state = WizardState::initial(1, None);

        assert!(!can_proceed(&state, WizardFlow::ProjectBasedOnly));
        assert_eq!(
            missing_requirements(&state, WizardFlow::ProjectBasedOnly).len(),
            2
        );
    }
}
