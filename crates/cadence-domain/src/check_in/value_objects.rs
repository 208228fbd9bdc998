use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Self-reported mood attached to a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Stressed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Low => "low",
            Mood::Stressed => "stressed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "low" => Ok(Mood::Low),
            "stressed" => Ok(Mood::Stressed),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown mood: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported energy on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyLevel(u8);

impl EnergyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::Validation(format!(
                "Energy level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
