//! The estimator page: owns one wizard engine and enforces the per-screen
//! completeness gate the engine itself does not check.

use fee_core::auth::{AuthService, display_name};
use fee_core::models::{
    CommercialRights, CustomLicensingPolicy, LicensingPatch, PdfFile, ProjectInfoPatch,
    TimeComplexityPatch, UploadMethod, add_custom_deliverable, remove_deliverable, set_quantity,
};
use fee_core::wizard::{
    BackTarget, WizardEngine, WizardFlow, WizardScreen, can_proceed, missing_requirements,
};
use tracing::{debug, error, info, warn};

use super::actions::{InputError, PageAction};
use super::render::hints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageType,
    pub text: String,
}

/// What the session should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Continue,
    /// Back was pressed on the flow's first screen.
    Exit,
    /// The summary was confirmed; the engine has been reset.
    Completed,
    Quit,
}

pub struct EstimatorPage {
    engine: WizardEngine,
    flow: WizardFlow,
    user_name: String,
    status: Option<StatusMessage>,
}

impl EstimatorPage {
    pub fn new(
        flow: WizardFlow,
        custom_licensing: CustomLicensingPolicy,
    ) -> Self {
        Self {
            engine: WizardEngine::new(flow.engine_config(custom_licensing)),
            flow,
            user_name: display_name(None),
            status: None,
        }
    }

    /// Reads the signed-in user for the greeting. Failures keep the default
    /// name and surface as a status message.
    pub async fn load_user(
        &mut self,
        auth: &dyn AuthService,
    ) {
        match auth.current_user().await {
            Ok(user) => {
                self.user_name = display_name(user.as_ref());
                debug!(user = %self.user_name, "loaded current user");
            }
            Err(e) => {
                error!(error = %e, "failed to load current user");
                self.show_message(
                    format!("Could not load your account: {e}"),
                    MessageType::Error,
                );
            }
        }
    }

    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    pub fn flow(&self) -> WizardFlow {
        self.flow
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn screen(&self) -> WizardScreen {
        self.flow.screen(self.engine.state())
    }

    pub fn show_message(
        &mut self,
        text: impl Into<String>,
        kind: MessageType,
    ) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    pub fn clear_message(&mut self) {
        self.status = None;
    }

    /// Shows a parse failure without touching the wizard.
    pub fn reject_input(
        &mut self,
        err: &InputError,
    ) {
        warn!(error = %err, "rejected page input");
        self.show_message(err.to_string(), MessageType::Error);
    }

    pub fn handle(
        &mut self,
        action: PageAction,
    ) -> PageOutcome {
        debug!(
            command = action.command(),
            step = self.engine.state().step,
            "page action"
        );
        self.clear_message();

        let screen = self.screen();
        match action {
            PageAction::Next if screen == WizardScreen::Summary => self.complete(),
            PageAction::Next => {
                self.next();
                PageOutcome::Continue
            }
            PageAction::Back => self.back(),
            PageAction::Complete if screen == WizardScreen::Summary => self.complete(),
            PageAction::Restart => {
                self.engine.reset();
                self.enter_screen();
                self.show_message("Started a new estimate.", MessageType::Info);
                PageOutcome::Continue
            }
            PageAction::Help => {
                self.show_message(hints::help_text(), MessageType::Info);
                PageOutcome::Continue
            }
            PageAction::Quit => PageOutcome::Quit,
            action => {
                self.edit(screen, action);
                PageOutcome::Continue
            }
        }
    }

    fn next(&mut self) {
        let state = self.engine.state();
        if !can_proceed(state, self.flow) {
            let missing = missing_requirements(state, self.flow).join(" ");
            warn!(step = state.step, %missing, "next refused");
            self.show_message(missing, MessageType::Error);
            return;
        }
        self.engine.next_step();
        self.enter_screen();
    }

    fn back(&mut self) -> PageOutcome {
        match self.flow.back_target(self.engine.state().step) {
            BackTarget::Exit => {
                info!(flow = %self.flow, "left the wizard");
                PageOutcome::Exit
            }
            BackTarget::Step(_) => {
                self.engine.previous_step();
                self.enter_screen();
                PageOutcome::Continue
            }
        }
    }

    fn complete(&mut self) -> PageOutcome {
        let state = self.engine.state();
        info!(
            project = %state.project_info.name,
            deliverables = state.requested_deliverables().count(),
            hours = state.time_complexity.duration,
            "estimate completed"
        );
        self.engine.reset();
        PageOutcome::Completed
    }

    fn enter_screen(&mut self) {
        if self.screen() == WizardScreen::Deliverables {
            self.engine.seed_deliverables();
        }
    }

    /// Field edits. Each is only accepted on the screen that shows the field.
    fn edit(
        &mut self,
        screen: WizardScreen,
        action: PageAction,
    ) {
        let command = action.command();
        match (screen, action) {
            (WizardScreen::ModeSelection, PageAction::Mode(mode)) => {
                self.engine.set_mode(mode);
                self.next();
            }

            (WizardScreen::ProjectInformation, PageAction::Name(name)) => {
                self.engine.update_project_info(ProjectInfoPatch::name(name));
            }
            (WizardScreen::ProjectInformation, PageAction::Description(description)) => {
                self.engine
                    .update_project_info(ProjectInfoPatch::description(description));
            }
            (WizardScreen::ProjectInformation, PageAction::Manual) => {
                self.engine
                    .update_project_info(ProjectInfoPatch::upload_method(UploadMethod::Manual));
            }
            (WizardScreen::ProjectInformation, PageAction::Pdf(path)) => {
                match PdfFile::from_path(&path) {
                    Some(file) => {
                        let text = format!("Attached {}.", file.file_name);
                        self.engine.update_project_info(ProjectInfoPatch::pdf(file));
                        self.show_message(text, MessageType::Success);
                    }
                    None => {
                        warn!(path = %path.display(), "rejected non-PDF upload");
                        self.show_message(
                            "Only PDF files can be uploaded.",
                            MessageType::Error,
                        );
                    }
                }
            }

            (WizardScreen::Deliverables, PageAction::Quantity { id, quantity }) => {
                match set_quantity(&self.engine.state().deliverables, &id, quantity) {
                    Some(items) => {
                        self.engine.update_deliverables(items);
                    }
                    None => self.unknown_item(&id),
                }
            }
            (WizardScreen::Deliverables, PageAction::Add(label)) => {
                match add_custom_deliverable(&self.engine.state().deliverables, &label) {
                    Some(items) => {
                        self.engine.update_deliverables(items);
                        self.show_message(
                            format!("Added {}.", label.trim()),
                            MessageType::Success,
                        );
                    }
                    None => {
                        self.show_message("Deliverable name cannot be empty.", MessageType::Error)
                    }
                }
            }
            (WizardScreen::Deliverables, PageAction::Remove(id)) => {
                let items = &self.engine.state().deliverables;
                let is_custom = items.iter().find(|item| item.id == id).map(|item| item.is_custom);
                match is_custom {
                    None => self.unknown_item(&id),
                    Some(false) => {
                        self.show_message(
                            "Only custom deliverables can be removed. Set the quantity to 0 instead.",
                            MessageType::Error,
                        );
                    }
                    Some(true) => {
                        if let Some(items) = remove_deliverable(&self.engine.state().deliverables, &id) {
                            self.engine.update_deliverables(items);
                        }
                    }
                }
            }

            (WizardScreen::TimeComplexity, PageAction::Hours(hours)) => {
                self.engine
                    .update_time_complexity(TimeComplexityPatch::duration(hours));
            }
            (WizardScreen::TimeComplexity, PageAction::Difficulty(difficulty)) => {
                self.engine
                    .update_time_complexity(TimeComplexityPatch::difficulty(difficulty));
            }
            (WizardScreen::TimeComplexity, PageAction::Rights(rights)) => {
                self.engine
                    .update_licensing(LicensingPatch::commercial_rights(rights));
            }
            (WizardScreen::TimeComplexity, PageAction::License(licensing)) => {
                self.engine
                    .update_licensing(LicensingPatch::project_licensing(licensing));
            }
            (WizardScreen::TimeComplexity, PageAction::Custom(text)) => {
                let rights = self.engine.state().time_complexity.licensing.commercial_rights;
                if rights == CommercialRights::Other {
                    self.engine
                        .update_licensing(LicensingPatch::custom_licensing(text));
                } else {
                    self.show_message(
                        "Custom licensing applies only when commercial rights are 'other'.",
                        MessageType::Error,
                    );
                }
            }

            (WizardScreen::Summary, PageAction::Edit(section)) => {
                self.engine.go_to_step(self.flow.edit_target(section));
                self.enter_screen();
            }

            (screen, _) => {
                warn!(command, screen = screen.title(), "command not available here");
                self.show_message(
                    format!("'{command}' is not available on the {} screen.", screen.title()),
                    MessageType::Error,
                );
            }
        }
    }

    fn unknown_item(
        &mut self,
        id: &str,
    ) {
        self.show_message(
            format!("No deliverable with id '{id}'."),
            MessageType::Error,
        );
    }
}
