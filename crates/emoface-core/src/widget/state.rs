//! Happiness state definitions.

use crate::error::FaceError;
use serde::{Deserialize, Serialize};

/// Mood shown by the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HappinessState {
    /// Smiling mouth.
    #[default]
    Happy,
    /// Frowning mouth.
    Sad,
}

impl HappinessState {
    /// Integer code for [`HappinessState::Happy`].
    pub const HAPPY: i64 = 0;
    /// Integer code for [`HappinessState::Sad`].
    pub const SAD: i64 = 1;

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            HappinessState::Happy => HappinessState::Sad,
            HappinessState::Sad => HappinessState::Happy,
        }
    }

    /// Integer code of this state.
    pub fn code(self) -> i64 {
        match self {
            HappinessState::Happy => Self::HAPPY,
            HappinessState::Sad => Self::SAD,
        }
    }

    /// Get display name for this state.
    pub fn name(self) -> &'static str {
        match self {
            HappinessState::Happy => "happy",
            HappinessState::Sad => "sad",
        }
    }
}

impl TryFrom<i64> for HappinessState {
    type Error = FaceError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            Self::HAPPY => Ok(HappinessState::Happy),
            Self::SAD => Ok(HappinessState::Sad),
            other => Err(FaceError::InvalidHappinessState(other)),
        }
    }
}
