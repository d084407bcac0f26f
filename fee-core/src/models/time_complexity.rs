use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::licensing::{CustomLicensingPolicy, LicensingInfo};

/// Project difficulty. Each level carries a fixed effort multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Complex,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard, Self::Complex]
    }

    /// | Difficulty | Multiplier |
    /// |------------|------------|
    /// | Easy       | 1.0        |
    /// | Medium     | 1.5        |
    /// | Hard       | 2.0        |
    /// | Complex    | 2.5        |
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Easy => Decimal::ONE,
            Self::Medium => Decimal::new(15, 1),
            Self::Hard => Decimal::TWO,
            Self::Complex => Decimal::new(25, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Complex => "complex",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Complex => "Complex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeComplexity {
    /// Expected effort in hours.
    pub duration: u32,
    pub difficulty: Option<Difficulty>,
    /// Always derived from `difficulty`; 1 while no difficulty is chosen.
    pub difficulty_multiplier: Decimal,
    pub licensing: LicensingInfo,
}

impl Default for TimeComplexity {
    fn default() -> Self {
        Self {
            duration: 0,
            difficulty: None,
            difficulty_multiplier: Decimal::ONE,
            licensing: LicensingInfo::default(),
        }
    }
}

impl TimeComplexity {
    /// Shallow merge at the top level. A licensing value in the patch replaces
    /// the whole nested record; choosing a difficulty also resets the
    /// multiplier from the fixed table.
    pub fn merged(
        &self,
        patch: TimeComplexityPatch,
        policy: CustomLicensingPolicy,
    ) -> Self {
        let difficulty = patch.difficulty.or(self.difficulty);
        let difficulty_multiplier = match patch.difficulty {
            Some(chosen) => chosen.multiplier(),
            None => self.difficulty_multiplier,
        };
        let licensing = match patch.licensing {
            Some(licensing) => licensing.with_policy(policy),
            None => self.licensing.clone(),
        };

        Self {
            duration: patch.duration.unwrap_or(self.duration),
            difficulty,
            difficulty_multiplier,
            licensing,
        }
    }
}

/// Partial update for [`TimeComplexity`]. The multiplier always follows the
/// difficulty, so it has no field here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeComplexityPatch {
    pub duration: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub licensing: Option<LicensingInfo>,
}

impl TimeComplexityPatch {
    pub fn duration(hours: u32) -> Self {
        Self {
            duration: Some(hours),
            ..Default::default()
        }
    }

    pub fn difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    pub fn licensing(licensing: LicensingInfo) -> Self {
        Self {
            licensing: Some(licensing),
            ..Default::default()
        }
    }
}
