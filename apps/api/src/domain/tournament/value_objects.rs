use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

const FIELD: &str = "tournament name";

/// Characters that are never allowed in a tournament name
pub const FORBIDDEN_CHARACTERS: [char; 10] = ['<', '>', '{', '}', '[', ']', '\\', '|', '^', '`'];

/// TournamentName value object
///
/// # Invariants
/// - Stored trimmed
/// - Between 3 and 100 characters after trimming
/// - Contains none of [`FORBIDDEN_CHARACTERS`]
///
/// Rules are checked in that order and the first violation wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TournamentName(String);

impl TournamentName {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 100;

    /// Creates a name for a new tournament
    ///
    /// # Example
    /// ```
    /// use splatdraft_api::domain::tournament::TournamentName;
    ///
    /// let name = TournamentName::create("  Splat Cup ").expect("valid name");
    /// assert_eq!(name.as_str(), "Splat Cup");
    /// ```
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    /// Rebuilds a name loaded from storage
    pub fn reconstruct(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(ValidationError::EmptyValue { field: FIELD });
        }
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::TooShort {
                field: FIELD,
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: FIELD,
                max: Self::MAX_LENGTH,
            });
        }
        if let Some(character) = trimmed.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
            return Err(ValidationError::ForbiddenCharacter {
                field: FIELD,
                character,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the normalized name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against an optional name; `None` is never equal
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| o.0 == self.0)
    }
}

impl fmt::Display for TournamentName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TournamentName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::reconstruct(&raw).map_err(serde::de::Error::custom)
    }
}
