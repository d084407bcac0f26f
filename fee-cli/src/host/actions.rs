//! Parsing of typed page commands.

use std::path::PathBuf;
use std::str::FromStr;

use fee_core::models::{CommercialRights, Difficulty, EstimationMode, ProjectLicensing};
use fee_core::wizard::SummarySection;
use thiserror::Error;

use crate::utils::{ParseCountError, parse_hours, parse_quantity};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Type a command, or 'help' to list them.")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' to list commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}.")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not a valid choice for '{command}'. Choose one of: {choices}.")]
    InvalidChoice {
        command: &'static str,
        value: String,
        choices: String,
    },

    #[error(transparent)]
    Count(#[from] ParseCountError),
}

/// One user action on the estimator page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Mode(EstimationMode),

    Name(String),
    Description(String),
    Manual,
    Pdf(PathBuf),

    Quantity { id: String, quantity: u32 },
    Add(String),
    Remove(String),

    Hours(u32),
    Difficulty(Difficulty),
    Rights(CommercialRights),
    License(ProjectLicensing),
    Custom(String),

    Edit(SummarySection),

    Next,
    Back,
    Complete,
    Restart,
    Help,
    Quit,
}

impl PageAction {
    /// Command word as typed, for logging.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Mode(_) => "mode",
            Self::Name(_) => "name",
            Self::Description(_) => "desc",
            Self::Manual => "manual",
            Self::Pdf(_) => "pdf",
            Self::Quantity { .. } => "qty",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Hours(_) => "hours",
            Self::Difficulty(_) => "difficulty",
            Self::Rights(_) => "rights",
            Self::License(_) => "license",
            Self::Custom(_) => "custom",
            Self::Edit(_) => "edit",
            Self::Next => "next",
            Self::Back => "back",
            Self::Complete => "complete",
            Self::Restart => "restart",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn choice<T>(
    rest: &str,
    command: &'static str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, InputError> {
    let value = required(rest, command, "a value")?.to_ascii_lowercase();
    parse(&value).ok_or_else(|| InputError::InvalidChoice {
        command,
        value,
        choices: all.iter().map(as_str).collect::<Vec<_>>().join(", "),
    })
}

impl FromStr for PageAction {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let action = match word.to_ascii_lowercase().as_str() {
            "mode" => {
                let value = required(rest, "mode", "'project' or 'hourly'")?.to_ascii_lowercase();
                let mode = EstimationMode::parse(&value).ok_or_else(|| InputError::InvalidChoice {
                    command: "mode",
                    value,
                    choices: "project, hourly".to_string(),
                })?;
                Self::Mode(mode)
            }
            "name" => Self::Name(required(rest, "name", "a project name")?.to_string()),
            "desc" => Self::Description(required(rest, "desc", "a description")?.to_string()),
            "manual" => Self::Manual,
            "pdf" => Self::Pdf(PathBuf::from(required(rest, "pdf", "a file path")?)),
            "qty" => {
                let args = required(rest, "qty", "an item id and a quantity")?;
                let Some((id, quantity)) = args.rsplit_once(char::is_whitespace) else {
                    return Err(InputError::MissingArgument {
                        command: "qty",
                        expected: "an item id and a quantity",
                    });
                };
                Self::Quantity {
                    id: id.trim().to_string(),
                    quantity: parse_quantity(quantity)?,
                }
            }
            "add" => Self::Add(required(rest, "add", "a deliverable name")?.to_string()),
            "remove" => Self::Remove(required(rest, "remove", "an item id")?.to_string()),
            "hours" => Self::Hours(parse_hours(required(rest, "hours", "a number of hours")?)?),
            "difficulty" => Self::Difficulty(choice(
                rest,
                "difficulty",
                Difficulty::all(),
                Difficulty::as_str,
                Difficulty::parse,
            )?),
            "rights" => Self::Rights(choice(
                rest,
                "rights",
                CommercialRights::all(),
                CommercialRights::as_str,
                CommercialRights::parse,
            )?),
            "license" => Self::License(choice(
                rest,
                "license",
                ProjectLicensing::all(),
                ProjectLicensing::as_str,
                ProjectLicensing::parse,
            )?),
            "custom" => Self::Custom(required(rest, "custom", "licensing terms")?.to_string()),
            "edit" => {
                let value = required(rest, "edit", "'project', 'deliverables' or 'time'")?
                    .to_ascii_lowercase();
                let section =
                    SummarySection::parse(&value).ok_or_else(|| InputError::InvalidChoice {
                        command: "edit",
                        value,
                        choices: "project, deliverables, time".to_string(),
                    })?;
                Self::Edit(section)
            }
            "next" | "continue" => Self::Next,
            "back" => Self::Back,
            "complete" | "done" => Self::Complete,
            "restart" => Self::Restart,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(line: &str) -> Result<PageAction, InputError> {
        line.parse()
    }

    #[test]
    fn text_arguments_keep_inner_spacing() {
        assert_eq!(
            parse("  name   Harbor  Cafe "),
            Ok(PageAction::Name("Harbor  Cafe".to_string()))
        );
        assert_eq!(
            parse("add Menu Board"),
            Ok(PageAction::Add("Menu Board".to_string()))
        );
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(parse("NEXT"), Ok(PageAction::Next));
        assert_eq!(
            parse("Mode Project"),
            Ok(PageAction::Mode(EstimationMode::ProjectBased))
        );
    }

    #[test]
    fn quantity_takes_last_word_as_number() {
        assert_eq!(
            parse("qty logo-design 3"),
            Ok(PageAction::Quantity {
                id: "logo-design".to_string(),
                quantity: 3,
            })
        );
        assert!(matches!(
            parse("qty logo-design 100"),
            Err(InputError::Count(ParseCountError::TooLarge { .. }))
        ));
        assert_eq!(
            parse("qty 3"),
            Err(InputError::MissingArgument {
                command: "qty",
                expected: "an item id and a quantity",
            })
        );
    }

    #[test]
    fn choices_are_listed_on_bad_value() {
        let err = parse("difficulty brutal").unwrap_err();

        assert_eq!(
            err.to_string(),
            "'brutal' is not a valid choice for 'difficulty'. Choose one of: easy, medium, hard, complex."
        );
    }

    #[test]
    fn licensing_values() {
        assert_eq!(
            parse("rights small-business"),
            Ok(PageAction::Rights(CommercialRights::SmallBusiness))
        );
        assert_eq!(
            parse("license exclusive"),
            Ok(PageAction::License(ProjectLicensing::Exclusive))
        );
    }

    #[test]
    fn missing_and_unknown() {
        assert_eq!(parse("   "), Err(InputError::Empty));
        assert_eq!(
            parse("name"),
            Err(InputError::MissingArgument {
                command: "name",
                expected: "a project name",
            })
        );
        assert_eq!(
            parse("estimate"),
            Err(InputError::UnknownCommand("estimate".to_string()))
        );
    }

    #[test]
    fn edit_sections() {
        assert_eq!(
            parse("edit deliverables"),
            Ok(PageAction::Edit(SummarySection::Deliverables))
        );
        assert!(parse("edit budget").is_err());
    }
}
