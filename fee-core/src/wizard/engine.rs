use tracing::trace;

use super::command::{Command, EngineConfig, reduce};
use crate::models::{
    DeliverableItem, EstimationMode, LicensingPatch, ProjectInfoPatch, TimeComplexityPatch,
    WizardState,
};

/// Owns the wizard's current snapshot.
///
/// Every operation replaces the snapshot with the one [`reduce`] returns.
/// The engine never checks whether a transition is allowed; hosts consult
/// [`can_proceed`](super::completeness::can_proceed) before calling
/// [`next_step`](Self::next_step).
#[derive(Debug, Clone)]
pub struct WizardEngine {
    config: EngineConfig,
    state: WizardState,
}

impl WizardEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: config.initial_state(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> WizardState {
        self.state.clone()
    }

    pub fn dispatch(
        &mut self,
        command: Command,
    ) -> &WizardState {
        let name = command.name();
        self.state = reduce(&self.state, command, &self.config);
        trace!(command = name, step = self.state.step, "wizard transition");
        &self.state
    }

    pub fn set_mode(
        &mut self,
        mode: EstimationMode,
    ) -> &WizardState {
        self.dispatch(Command::SetMode(mode))
    }

    pub fn next_step(&mut self) -> &WizardState {
        self.dispatch(Command::Next)
    }

    pub fn previous_step(&mut self) -> &WizardState {
        self.dispatch(Command::Previous)
    }

    pub fn go_to_step(
        &mut self,
        step: u32,
    ) -> &WizardState {
        self.dispatch(Command::GoTo(step))
    }

    pub fn update_project_info(
        &mut self,
        patch: ProjectInfoPatch,
    ) -> &WizardState {
        self.dispatch(Command::UpdateProjectInfo(patch))
    }

    pub fn update_deliverables(
        &mut self,
        deliverables: Vec<DeliverableItem>,
    ) -> &WizardState {
        self.dispatch(Command::UpdateDeliverables(deliverables))
    }

    pub fn update_time_complexity(
        &mut self,
        patch: TimeComplexityPatch,
    ) -> &WizardState {
        self.dispatch(Command::UpdateTimeComplexity(patch))
    }

    pub fn update_licensing(
        &mut self,
        patch: LicensingPatch,
    ) -> &WizardState {
        self.dispatch(Command::UpdateLicensing(patch))
    }

    pub fn seed_deliverables(&mut self) -> &WizardState {
        self.dispatch(Command::SeedDeliverables)
    }

    pub fn reset(&mut self) -> &WizardState {
        self.dispatch(Command::Reset)
    }
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        CommercialRights, Difficulty, LicensingInfo, ProjectInformation, ProjectLicensing,
        TimeComplexity, remove_deliverable,
    };

    #[test]
    fn starts_at_step_one_with_blank_state() {
        let engine = WizardEngine::default();

        assert_eq!(engine.state(), &WizardState::default());
        assert_eq!(engine.state().step, 1);
    }

    #[test]
    fn next_and_previous_never_drop_below_one() {
        let mut engine = WizardEngine::default();
        let moves = [false, false, true, false, false, false, true, true, false, false];

        for forward in moves {
            if forward {
                engine.next_step();
            } else {
                engine.previous_step();
            }
            assert!(engine.state().step >= 1);
        }
    }

    #[test]
    fn next_increments_without_validation() {
        let mut engine = WizardEngine::default();

        engine.next_step();
        engine.next_step();

        assert_eq!(engine.state().step, 3);
        assert_eq!(engine.state().mode, None);
    }

    #[test]
    fn go_to_then_previous_is_one_back() {
        let mut engine = WizardEngine::default();
        engine.next_step();

        engine.go_to_step(5);
        engine.previous_step();

        assert_eq!(engine.state().step, 4);
    }

    #[test]
    fn reset_restores_every_field() {
        let mut engine = WizardEngine::default();
        engine.set_mode(EstimationMode::ProjectBased);
        engine.next_step();
        engine.update_project_info(ProjectInfoPatch::name("Cafe rebrand"));
        engine.seed_deliverables();
        engine.update_time_complexity(TimeComplexityPatch {
            duration: Some(12),
            difficulty: Some(Difficulty::Complex),
            ..Default::default()
        });
        engine.update_licensing(LicensingPatch {
            commercial_rights: Some(CommercialRights::Other),
            project_licensing: Some(ProjectLicensing::Exclusive),
            custom_licensing: Some("Regional only".to_string()),
        });

        engine.reset();

        let state = engine.state();
        assert_eq!(state.mode, None);
        assert_eq!(state.step, 1);
        assert!(state.deliverables.is_empty());
        assert!(!state.deliverables_seeded);
        assert_eq!(state.project_info, ProjectInformation::default());
        assert_eq!(
            state.time_complexity,
            TimeComplexity {
                duration: 0,
                difficulty: None,
                difficulty_multiplier: dec!(1),
                licensing: LicensingInfo {
                    commercial_rights: CommercialRights::Personal,
                    project_licensing: ProjectLicensing::OneTime,
                    custom_licensing: None,
                },
            }
        );
    }

    #[test]
    fn removed_seed_item_is_not_resurrected() {
        let mut engine = WizardEngine::default();
        engine.seed_deliverables();
        let without_poster = remove_deliverable(&engine.state().deliverables, "poster").unwrap();
        engine.update_deliverables(without_poster);

        engine.seed_deliverables();

        let ids: Vec<_> = engine
            .state()
            .deliverables
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["logo-design", "brand-guidelines", "website-mockup", "app-screen"]
        );
    }

    #[test]
    fn snapshots_are_independent_of_later_transitions() {
        let mut engine = WizardEngine::default();
        let before = engine.snapshot();

        engine.update_time_complexity(TimeComplexityPatch::duration(8));

        assert_eq!(before.time_complexity.duration, 0);
        assert_eq!(engine.state().time_complexity.duration, 8);
    }

    #[test]
    fn update_licensing_keeps_siblings() {
        let mut engine = WizardEngine::default();
        engine.update_licensing(LicensingPatch::project_licensing(ProjectLicensing::Limited));

        engine.update_licensing(LicensingPatch::commercial_rights(
            CommercialRights::SmallBusiness,
        ));

        let licensing = &engine.state().time_complexity.licensing;
        assert_eq!(licensing.project_licensing, ProjectLicensing::Limited);
        assert_eq!(licensing.commercial_rights, CommercialRights::SmallBusiness);
    }
}
