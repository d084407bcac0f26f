//! Scripted sessions over in-memory input and output.

use std::io::Cursor;

use async_trait::async_trait;
use fee_cli::host::{EstimatorPage, MessageType, SessionOutcome, run_session};
use fee_core::auth::{AuthError, AuthService, AuthUser, MockAuthService};
use fee_core::models::{CustomLicensingPolicy, WizardState};
use fee_core::wizard::{WizardFlow, WizardScreen};
use pretty_assertions::assert_eq;

fn session(
    page: &mut EstimatorPage,
    script: &str,
) -> (SessionOutcome, String) {
    let mut out = Vec::new();
    let outcome = run_session(page, Cursor::new(script.to_string()), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn page(flow: WizardFlow) -> EstimatorPage {
    EstimatorPage::new(flow, CustomLicensingPolicy::Retain)
}

const PROJECT_WALK: &str = "\
name Harbor Cafe
desc Logo and menu redesign
next
qty poster 0
add Menu Board
next
hours 24
difficulty medium
rights other
custom Festival posters only
next
";

#[test]
fn full_walk_completes_and_resets() {
    let mut page = page(WizardFlow::ModeSelectFirst);
    let script = format!("mode project\n{PROJECT_WALK}complete\n");

    let (outcome, out) = session(&mut page, &script);

    assert_eq!(outcome, SessionOutcome::Completed);
    assert!(out.contains("== Project Summary =="));
    assert!(out.contains("Menu Board"));
    assert!(out.contains("Difficulty:          Medium (x1.5)"));
    assert!(out.contains("Custom licensing:    Festival posters only"));
    assert_eq!(page.engine().state(), &WizardState::default());
}

#[test]
fn next_on_summary_also_completes() {
    let mut page = page(WizardFlow::ProjectBasedOnly);
    let script = format!("{PROJECT_WALK}next\n");

    let (outcome, _) = session(&mut page, &script);

    assert_eq!(outcome, SessionOutcome::Completed);
    assert_eq!(page.engine().state().step, 2);
}

#[test]
fn next_is_refused_with_reasons() {
    let mut page = page(WizardFlow::ProjectBasedOnly);

    let (outcome, out) = session(&mut page, "next\n");

    assert_eq!(outcome, SessionOutcome::EndOfInput);
    assert!(out.contains("! Project name is required. Project description is required."));
    assert_eq!(page.screen(), WizardScreen::ProjectInformation);
}

#[test]
fn zeroed_deliverables_block_the_step() {
    let mut page = page(WizardFlow::ProjectBasedOnly);
    let script = "\
name A
desc B
next
qty logo-design 0
qty poster 0
qty brand-guidelines 0
qty website-mockup 0
qty app-screen 0
next
";

    session(&mut page, script);

    assert_eq!(page.screen(), WizardScreen::Deliverables);
    let status = page.status().unwrap();
    assert_eq!(status.kind, MessageType::Error);
    assert_eq!(
        status.text,
        "At least one deliverable needs a quantity above zero."
    );
}

#[test]
fn back_from_first_screen_exits_project_flow() {
    let mut page = page(WizardFlow::ProjectBasedOnly);

    let (outcome, _) = session(&mut page, "back\n");

    assert_eq!(outcome, SessionOutcome::Exited);
}

#[test]
fn back_walks_one_step_until_mode_selection() {
    let mut page = page(WizardFlow::ModeSelectFirst);

    let (outcome, _) = session(&mut page, "mode project\nback\nback\n");

    assert_eq!(outcome, SessionOutcome::Exited);
    assert_eq!(page.engine().state().step, 1);
}

#[test]
fn hourly_mode_shows_coming_soon() {
    let mut page = page(WizardFlow::ModeSelectFirst);

    let (outcome, out) = session(&mut page, "mode hourly\nnext\n");

    assert_eq!(outcome, SessionOutcome::EndOfInput);
    assert!(out.contains("== Coming Soon =="));
    assert!(out.contains("! Base rate estimation is not available yet."));
    assert_eq!(page.screen(), WizardScreen::ComingSoon);
}

#[test]
fn summary_edit_returns_to_section() {
    let mut page = page(WizardFlow::ProjectBasedOnly);
    let script = format!("{PROJECT_WALK}edit deliverables\n");

    let (_, out) = session(&mut page, &script);

    assert_eq!(page.screen(), WizardScreen::Deliverables);
    assert!(out.contains("Menu Board"));
    assert_eq!(page.engine().state().deliverables.len(), 6);
}

#[test]
fn bad_input_keeps_the_session_going() {
    let mut page = page(WizardFlow::ProjectBasedOnly);

    let (outcome, out) = session(&mut page, "estimate now\npdf notes.txt\nquit\n");

    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(out.contains("! Unknown command 'estimate'. Type 'help' to list commands."));
    assert!(out.contains("! Only PDF files can be uploaded."));
}

#[tokio::test]
async fn greets_signed_in_user() {
    let auth = MockAuthService::signed_in_as("mira@studio.io", Some("Mira"));
    let mut page = page(WizardFlow::ProjectBasedOnly);

    page.load_user(&auth).await;
    let (_, out) = session(&mut page, "");

    assert!(out.contains("Hi, Mira"));
}

struct UnavailableAuth;

#[async_trait]
impl AuthService for UnavailableAuth {
    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthUser, AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }

    async fn sign_in(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthUser, AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }

    async fn reset_password(
        &self,
        _email: &str,
    ) -> Result<(), AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }

    async fn verify_email(
        &self,
        _code: &str,
    ) -> Result<(), AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Err(AuthError::Provider("offline".to_string()))
    }
}

#[tokio::test]
async fn auth_failure_falls_back_to_default_name() {
    let mut page = page(WizardFlow::ModeSelectFirst);

    page.load_user(&UnavailableAuth).await;

    assert_eq!(page.user_name(), "Designer");
    let status = page.status().unwrap();
    assert_eq!(status.kind, MessageType::Error);
    assert_eq!(
        status.text,
        "Could not load your account: Auth provider error: offline"
    );

    page.handle("mode project".parse().unwrap());
    assert_eq!(page.status(), None);
}
