use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{EnergyLevel, Mood};
use crate::shared::{CheckInId, DomainError, UserId};

/// An immutable record of one answered check-in prompt.
///
/// Check-ins are created once per submission and never mutated or deleted;
/// the streak lives on the profile, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    id: CheckInId,
    user_id: UserId,
    mood: Option<Mood>,
    energy_level: Option<EnergyLevel>,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl CheckIn {
    const MAX_NOTE_LEN: usize = 2000;

    pub fn new(
        user_id: UserId,
        mood: Option<Mood>,
        energy_level: Option<EnergyLevel>,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        if let Some(n) = &note {
            if n.len() > Self::MAX_NOTE_LEN {
                return Err(DomainError::Validation(format!(
                    "Check-in note exceeds {} characters",
                    Self::MAX_NOTE_LEN
                )));
            }
        }

        Ok(Self {
            id: CheckInId::new(),
            user_id,
            mood,
            energy_level,
            note,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: CheckInId,
        user_id: UserId,
        mood: Option<Mood>,
        energy_level: Option<EnergyLevel>,
        note: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            mood,
            energy_level,
            note,
            created_at,
        }
    }

    pub fn id(&self) -> &CheckInId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn energy_level(&self) -> Option<EnergyLevel> {
        self.energy_level
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
