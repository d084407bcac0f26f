use serde::{Deserialize, Serialize};

/// Top-level branch selecting which wizard variant runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimationMode {
    ProjectBased,
    Hourly,
}

impl EstimationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectBased => "project-based",
            Self::Hourly => "hourly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project-based" | "project" => Some(Self::ProjectBased),
            "hourly" | "base-rate" => Some(Self::Hourly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectBased => "Project Based Estimation",
            Self::Hourly => "Base Rate Estimation",
        }
    }
}
