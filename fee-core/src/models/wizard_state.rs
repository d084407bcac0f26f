use serde::{Deserialize, Serialize};

use super::{DeliverableItem, EstimationMode, ProjectInformation, TimeComplexity};

/// The lowest step the wizard can be on.
pub const FIRST_STEP: u32 = 1;

/// Everything the wizard has collected so far.
///
/// Owned by the engine and replaced wholesale on every transition; callers
/// only ever see read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub mode: Option<EstimationMode>,
    pub step: u32,
    pub project_info: ProjectInformation,
    pub deliverables: Vec<DeliverableItem>,
    /// Set once the predefined deliverables have been offered, so that items
    /// the user removed are never brought back.
    pub deliverables_seeded: bool,
    pub time_complexity: TimeComplexity,
}

impl WizardState {
    /// A blank state positioned at `step` with an optional preset mode.
    pub fn initial(
        step: u32,
        mode: Option<EstimationMode>,
    ) -> Self {
        Self {
            mode,
            step: step.max(FIRST_STEP),
            project_info: ProjectInformation::default(),
            deliverables: Vec::new(),
            deliverables_seeded: false,
            time_complexity: TimeComplexity::default(),
        }
    }

    /// Deliverables the user actually asked for.
    pub fn requested_deliverables(&self) -> impl Iterator<Item = &DeliverableItem> {
        self.deliverables.iter().filter(|item| item.quantity > 0)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial(FIRST_STEP, None)
    }
}
