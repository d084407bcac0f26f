//! Review view of everything the wizard collected.

use std::fmt;

use crate::models::{Difficulty, WizardState};

/// Capitalized difficulty, or "Not specified" when none was chosen.
pub fn difficulty_label(difficulty: Option<Difficulty>) -> &'static str {
    difficulty.map_or("Not specified", |d| d.label())
}

/// Borrowing wrapper that renders a [`WizardState`] as the summary screen.
///
/// Only deliverables with a quantity above zero are listed, and custom
/// licensing text is shown only while commercial rights are "Other".
#[derive(Debug, Clone, Copy)]
pub struct ProjectSummary<'a> {
    state: &'a WizardState,
}

impl<'a> ProjectSummary<'a> {
    pub fn new(state: &'a WizardState) -> Self {
        Self { state }
    }
}

impl fmt::Display for ProjectSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let info = &self.state.project_info;
        let tc = &self.state.time_complexity;

        writeln!(f, "Project name:        {}", info.name)?;
        writeln!(f, "Project description: {}", info.description)?;
        if let Some(pdf) = &info.pdf_file {
            writeln!(f, "Project brief:       {}", pdf.file_name)?;
        }

        writeln!(f)?;
        writeln!(f, "Scope and deliverable:")?;
        let mut any = false;
        for item in self.state.requested_deliverables() {
            any = true;
            writeln!(f, "  {:<24} x{}", item.kind, item.quantity)?;
        }
        if !any {
            writeln!(f, "  (none)")?;
        }

        writeln!(f)?;
        writeln!(f, "Duration:            {} hours", tc.duration)?;
        writeln!(
            f,
            "Difficulty:          {} (x{})",
            difficulty_label(tc.difficulty),
            tc.difficulty_multiplier
        )?;
        writeln!(
            f,
            "Commercial rights:   {}",
            tc.licensing.commercial_rights.label()
        )?;
        write!(
            f,
            "Project licensing:   {}",
            tc.licensing.project_licensing.label()
        )?;
        if let Some(custom) = tc.licensing.effective_custom_licensing() {
            write!(f, "\nCustom licensing:    {custom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{
        CommercialRights, DeliverableItem, LicensingInfo, ProjectInformation, TimeComplexity,
    };

    fn sample_state(rights: CommercialRights) -> WizardState {
        WizardState {
            project_info: ProjectInformation {
                name: "Harbor Cafe".to_string(),
                description: "Full rebrand".to_string(),
                ..Default::default()
            },
            deliverables: vec![
                DeliverableItem {
                    id: "logo-design".to_string(),
                    kind: "Logo Design".to_string(),
                    quantity: 2,
                    is_custom: false,
                },
                DeliverableItem {
                    id: "poster".to_string(),
                    kind: "Poster".to_string(),
                    quantity: 0,
                    is_custom: false,
                },
            ],
            time_complexity: TimeComplexity {
                duration: 30,
                difficulty: Some(Difficulty::Hard),
                difficulty_multiplier: Difficulty::Hard.multiplier(),
                licensing: LicensingInfo {
                    commercial_rights: rights,
                    custom_licensing: Some("Print only".to_string()),
                    ..Default::default()
                },
            },
            ..WizardState::initial(5, None)
        }
    }

    #[test]
    fn lists_only_requested_deliverables() {
        let text = ProjectSummary::new(&sample_state(CommercialRights::Other)).to_string();

        assert!(text.contains("Logo Design"));
        assert!(!text.contains("Poster"));
        assert!(text.contains("Hard (x2)"));
    }

    #[test]
    fn custom_licensing_shown_only_for_other() {
        let other = ProjectSummary::new(&sample_state(CommercialRights::Other)).to_string();
        let stale = ProjectSummary::new(&sample_state(CommercialRights::Personal)).to_string();

        assert!(other.contains("Custom licensing:    Print only"));
        assert!(!stale.contains("Print only"));
    }

    #[test]
    fn difficulty_label_defaults() {
        assert_eq!(difficulty_label(None), "Not specified");
        assert_eq!(difficulty_label(Some(Difficulty::Complex)), "Complex");
    }
}
