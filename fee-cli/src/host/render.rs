//! Plain-text rendering of the estimator page.

use std::io::{self, Write};

use fee_core::models::{CommercialRights, Difficulty, EstimationMode, ProjectLicensing};
use fee_core::summary::{ProjectSummary, difficulty_label};
use fee_core::wizard::{WizardScreen, progress_steps};

use super::page::{EstimatorPage, MessageType};

/// Command hint for the footer.
pub struct CommandHint {
    pub command: &'static str,
    pub action: &'static str,
}

impl CommandHint {
    pub const fn new(
        command: &'static str,
        action: &'static str,
    ) -> Self {
        Self { command, action }
    }
}

/// Joins hints into one footer line.
pub fn build_hint_bar(hints: &[CommandHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.command, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

pub mod hints {
    use fee_core::wizard::WizardScreen;

    use super::{CommandHint, build_hint_bar};

    pub const MODE: CommandHint = CommandHint::new("mode project|hourly", "Choose");
    pub const NAME: CommandHint = CommandHint::new("name <text>", "Name");
    pub const DESC: CommandHint = CommandHint::new("desc <text>", "Description");
    pub const MANUAL: CommandHint = CommandHint::new("manual", "Type it in");
    pub const PDF: CommandHint = CommandHint::new("pdf <path>", "Upload brief");
    pub const QTY: CommandHint = CommandHint::new("qty <id> <n>", "Quantity");
    pub const ADD: CommandHint = CommandHint::new("add <name>", "Custom item");
    pub const REMOVE: CommandHint = CommandHint::new("remove <id>", "Drop custom item");
    pub const HOURS: CommandHint = CommandHint::new("hours <n>", "Duration");
    pub const DIFFICULTY: CommandHint = CommandHint::new("difficulty <level>", "Difficulty");
    pub const RIGHTS: CommandHint = CommandHint::new("rights <value>", "Commercial rights");
    pub const LICENSE: CommandHint = CommandHint::new("license <value>", "Licensing");
    pub const CUSTOM: CommandHint = CommandHint::new("custom <text>", "Custom terms");
    pub const EDIT: CommandHint = CommandHint::new("edit project|deliverables|time", "Edit");
    pub const NEXT: CommandHint = CommandHint::new("next", "Continue");
    pub const BACK: CommandHint = CommandHint::new("back", "Back");
    pub const COMPLETE: CommandHint = CommandHint::new("complete", "Get estimate");
    pub const RESTART: CommandHint = CommandHint::new("restart", "Start over");
    pub const HELP: CommandHint = CommandHint::new("help", "Commands");
    pub const QUIT: CommandHint = CommandHint::new("quit", "Quit");

    pub fn for_screen(screen: WizardScreen) -> &'static [CommandHint] {
        match screen {
            WizardScreen::ModeSelection => &[MODE, BACK, HELP, QUIT],
            WizardScreen::ComingSoon => &[BACK, HELP, QUIT],
            WizardScreen::ProjectInformation => &[NAME, DESC, PDF, NEXT, BACK, HELP],
            WizardScreen::Deliverables => &[QTY, ADD, REMOVE, NEXT, BACK, HELP],
            WizardScreen::TimeComplexity => {
                &[HOURS, DIFFICULTY, RIGHTS, LICENSE, NEXT, BACK, HELP]
            }
            WizardScreen::Summary => &[EDIT, COMPLETE, BACK, HELP],
        }
    }

    /// Every command, one per line.
    pub fn help_text() -> String {
        let all = [
            MODE, NAME, DESC, MANUAL, PDF, QTY, ADD, REMOVE, HOURS, DIFFICULTY, RIGHTS,
            LICENSE, CUSTOM, EDIT, NEXT, BACK, COMPLETE, RESTART, HELP, QUIT,
        ];
        let lines: Vec<String> = all
            .iter()
            .map(|hint| build_hint_bar(std::slice::from_ref(hint)))
            .collect();
        format!("Commands:\n  {}", lines.join("\n  "))
    }
}

fn choices<T>(
    all: &[T],
    as_str: fn(&T) -> &'static str,
) -> String {
    all.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

/// Writes the whole page: greeting, progress, the current screen, the
/// status line and the hint footer.
pub fn render_page(
    page: &EstimatorPage,
    out: &mut impl Write,
) -> io::Result<()> {
    let state = page.engine().state();
    let screen = page.screen();

    writeln!(out)?;
    writeln!(out, "Hi, {}", page.user_name())?;
    writeln!(out, "== {} ==", screen.title())?;

    if page.flow().shows_progress(state.step) {
        for entry in progress_steps(page.flow(), state.step) {
            let mark = match (entry.completed, entry.active) {
                (true, _) => "x",
                (false, true) => ">",
                (false, false) => " ",
            };
            writeln!(out, "  [{mark}] {}. {}", entry.number, entry.label)?;
        }
        writeln!(out)?;
    }

    match screen {
        WizardScreen::ModeSelection => {
            writeln!(out, "How would you like to estimate your fee?")?;
            writeln!(
                out,
                "  project  {}",
                EstimationMode::ProjectBased.label()
            )?;
            writeln!(out, "  hourly   {}", EstimationMode::Hourly.label())?;
        }
        WizardScreen::ComingSoon => {
            writeln!(out, "Base rate estimation is coming soon.")?;
            writeln!(out, "Go back to choose project-based estimation.")?;
        }
        WizardScreen::ProjectInformation => {
            let info = &state.project_info;
            writeln!(out, "Name:        {}", info.name)?;
            writeln!(out, "Description: {}", info.description)?;
            match &info.pdf_file {
                Some(pdf) => writeln!(out, "Brief:       {}", pdf.file_name)?,
                None => writeln!(out, "Brief:       (none, type 'pdf <path>' to upload)")?,
            }
        }
        WizardScreen::Deliverables => {
            for item in &state.deliverables {
                let custom = if item.is_custom { "  (custom)" } else { "" };
                writeln!(
                    out,
                    "  {:<24} {:<24} x{}{custom}",
                    item.id, item.kind, item.quantity
                )?;
            }
            if state.deliverables.is_empty() {
                writeln!(out, "  (no deliverables, type 'add <name>')")?;
            }
        }
        WizardScreen::TimeComplexity => {
            let tc = &state.time_complexity;
            writeln!(out, "Duration:          {} hours", tc.duration)?;
            writeln!(
                out,
                "Difficulty:        {} (x{})",
                difficulty_label(tc.difficulty),
                tc.difficulty_multiplier
            )?;
            writeln!(
                out,
                "Commercial rights: {}",
                tc.licensing.commercial_rights.label()
            )?;
            writeln!(
                out,
                "Project licensing: {}",
                tc.licensing.project_licensing.label()
            )?;
            if tc.licensing.commercial_rights == CommercialRights::Other {
                writeln!(
                    out,
                    "Custom licensing:  {}",
                    tc.licensing.custom_licensing.as_deref().unwrap_or_default()
                )?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "difficulty: {}",
                choices(Difficulty::all(), Difficulty::as_str)
            )?;
            writeln!(
                out,
                "rights:     {}",
                choices(CommercialRights::all(), CommercialRights::as_str)
            )?;
            writeln!(
                out,
                "license:    {}",
                choices(ProjectLicensing::all(), ProjectLicensing::as_str)
            )?;
        }
        WizardScreen::Summary => {
            writeln!(out, "{}", ProjectSummary::new(state))?;
        }
    }

    if let Some(status) = page.status() {
        let prefix = match status.kind {
            MessageType::Info => "",
            MessageType::Success => "✓ ",
            MessageType::Error => "! ",
        };
        writeln!(out)?;
        writeln!(out, "{prefix}{}", status.text)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", build_hint_bar(hints::for_screen(screen)))?;
    write!(out, "> ")?;
    out.flush()
}
