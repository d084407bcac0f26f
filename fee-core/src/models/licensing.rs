use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommercialRights {
    #[default]
    Personal,
    SmallBusiness,
    LargeCorporation,
    FullCommercial,
    Other,
}

impl CommercialRights {
    pub fn all() -> &'static [CommercialRights] {
        &[
            Self::Personal,
            Self::SmallBusiness,
            Self::LargeCorporation,
            Self::FullCommercial,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::SmallBusiness => "small-business",
            Self::LargeCorporation => "large-corporation",
            Self::FullCommercial => "full-commercial",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Use",
            Self::SmallBusiness => "Small Business",
            Self::LargeCorporation => "Large Corporation",
            Self::FullCommercial => "Full Commercial Right",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectLicensing {
    #[default]
    OneTime,
    Limited,
    Exclusive,
}

impl ProjectLicensing {
    pub fn all() -> &'static [ProjectLicensing] {
        &[Self::OneTime, Self::Limited, Self::Exclusive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Limited => "limited",
            Self::Exclusive => "exclusive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTime => "One-Time Used",
            Self::Limited => "Limited Used",
            Self::Exclusive => "Exclusive License",
        }
    }
}

/// What happens to `custom_licensing` when commercial rights move away from
/// [`CommercialRights::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomLicensingPolicy {
    /// Keep the text; it becomes inert until rights return to `Other`.
    #[default]
    Retain,
    /// Drop the text as soon as rights are anything but `Other`.
    ClearWhenNotOther,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensingInfo {
    pub commercial_rights: CommercialRights,
    pub project_licensing: ProjectLicensing,
    pub custom_licensing: Option<String>,
}

impl LicensingInfo {
    /// Merges `patch` one level deep, then applies `policy` to the custom
    /// licensing text.
    pub fn merged(
        &self,
        patch: LicensingPatch,
        policy: CustomLicensingPolicy,
    ) -> Self {
        Self {
            commercial_rights: patch.commercial_rights.unwrap_or(self.commercial_rights),
            project_licensing: patch.project_licensing.unwrap_or(self.project_licensing),
            custom_licensing: patch
                .custom_licensing
                .or_else(|| self.custom_licensing.clone()),
        }
        .with_policy(policy)
    }

    pub fn with_policy(
        self,
        policy: CustomLicensingPolicy,
    ) -> Self {
        match policy {
            CustomLicensingPolicy::ClearWhenNotOther
                if self.commercial_rights != CommercialRights::Other =>
            {
                Self {
                    custom_licensing: None,
                    ..self
                }
            }
            _ => self,
        }
    }

    /// Custom licensing text that is meaningful for the current rights, if any.
    pub fn effective_custom_licensing(&self) -> Option<&str> {
        match self.commercial_rights {
            CommercialRights::Other => self
                .custom_licensing
                .as_deref()
                .filter(|text| !text.trim().is_empty()),
            _ => None,
        }
    }
}

/// Partial update for [`LicensingInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicensingPatch {
    pub commercial_rights: Option<CommercialRights>,
    pub project_licensing: Option<ProjectLicensing>,
    pub custom_licensing: Option<String>,
}

impl LicensingPatch {
    pub fn commercial_rights(rights: CommercialRights) -> Self {
        Self {
            commercial_rights: Some(rights),
            ..Default::default()
        }
    }

    pub fn project_licensing(licensing: ProjectLicensing) -> Self {
        Self {
            project_licensing: Some(licensing),
            ..Default::default()
        }
    }

    pub fn custom_licensing(text: impl Into<String>) -> Self {
        Self {
            custom_licensing: Some(text.into()),
            ..Default::default()
        }
    }
}
