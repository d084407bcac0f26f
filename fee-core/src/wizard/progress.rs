use serde::Serialize;

use super::flow::{
    DELIVERABLES_STEP, PROJECT_INFO_STEP, SUMMARY_STEP, TIME_COMPLEXITY_STEP, WizardFlow,
};

/// One entry of the progress sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    /// 1-based position shown to the user.
    pub number: u32,
    /// Wizard step this entry stands for.
    pub step: u32,
    pub label: &'static str,
    pub sub_steps: &'static [&'static str],
    pub active: bool,
    pub completed: bool,
}

const ENTRIES: [(u32, &str, &[&str]); 4] = [
    (
        PROJECT_INFO_STEP,
        "Project Info",
        &["Upload PDF or Manual", "Name & Description"],
    ),
    (
        DELIVERABLES_STEP,
        "Scope & Deliverables",
        &["Define Deliverables", "Set Quantities"],
    ),
    (
        TIME_COMPLEXITY_STEP,
        "Time & Complexity",
        &["Duration", "Difficulty", "Licensing"],
    ),
    (SUMMARY_STEP, "Summary", &["Review Details", "Get Estimate"]),
];

pub fn progress_steps(
    flow: WizardFlow,
    current_step: u32,
) -> Vec<ProgressStep> {
    ENTRIES
        .iter()
        .zip(1..)
        .map(|(&(step, label, sub_steps), number)| {
            let active = match flow {
                WizardFlow::ProjectBasedOnly if step == PROJECT_INFO_STEP => {
                    current_step <= PROJECT_INFO_STEP
                }
                _ => current_step == step,
            };
            ProgressStep {
                number,
                step,
                label,
                sub_steps,
                active,
                completed: current_step > step,
            }
        })
        .collect()
}
