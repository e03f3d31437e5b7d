use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Marker for the kind of entity an [`Id`] points at
///
/// Each kind is an uninhabited type, so ids of different kinds are
/// different Rust types and cannot be compared or mixed up.
pub trait IdKind: 'static {
    /// Human readable label used in validation messages
    const LABEL: &'static str;
}

/// Identifier value object
///
/// Wraps an opaque, non-empty string. Equality is by value.
///
/// # Invariants
/// - Never empty
/// - Immutable after construction
///
/// # Example
/// ```
/// use splatdraft_api::domain::shared::TournamentId;
///
/// let fresh = TournamentId::create();
/// assert!(!fresh.value().is_empty());
///
/// let stored = TournamentId::reconstruct("t-1").expect("non-empty id");
/// assert_eq!(stored.value(), "t-1");
/// ```
pub struct Id<K: IdKind> {
    value: String,
    _kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> Id<K> {
    /// Generates a fresh random identifier (UUID v4)
    pub fn create() -> Self {
        Self {
            value: Uuid::new_v4().to_string(),
            _kind: PhantomData,
        }
    }

    /// Wraps an identifier that already exists, e.g. one loaded from storage
    ///
    /// # Returns
    /// * `Err(ValidationError::EmptyValue)` - If `raw` is empty
    pub fn reconstruct(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let value = raw.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyValue { field: K::LABEL });
        }

        Ok(Self {
            value,
            _kind: PhantomData,
        })
    }

    /// Returns the raw identifier
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares against an optional id; `None` is never equal
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| o.value == self.value)
    }

    /// Reuses this raw value as an id of another kind
    pub(crate) fn retag<L: IdKind>(&self) -> Id<L> {
        Id {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: IdKind> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: IdKind> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: IdKind> Eq for Id<K> {}

impl<K: IdKind> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: IdKind> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: IdKind> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: IdKind> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<K: IdKind> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K: IdKind> FromStr for Id<K> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::reconstruct(s)
    }
}

impl<K: IdKind> Serialize for Id<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K: IdKind> Deserialize<'de> for Id<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::reconstruct(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug)]
pub enum TournamentKind {}

impl IdKind for TournamentKind {
    const LABEL: &'static str = "tournament id";
}

#[derive(Debug)]
pub enum ParticipantKind {}

impl IdKind for ParticipantKind {
    const LABEL: &'static str = "participant id";
}

#[derive(Debug)]
pub enum DraftKind {}

impl IdKind for DraftKind {
    const LABEL: &'static str = "draft id";
}

#[derive(Debug)]
pub enum TournamentParticipantKind {}

impl IdKind for TournamentParticipantKind {
    const LABEL: &'static str = "tournament participant id";
}

#[derive(Debug)]
pub enum TeamKind {}

impl IdKind for TeamKind {
    const LABEL: &'static str = "team id";
}

pub type TournamentId = Id<TournamentKind>;
pub type ParticipantId = Id<ParticipantKind>;
pub type DraftId = Id<DraftKind>;
pub type TournamentParticipantId = Id<TournamentParticipantKind>;
pub type TeamId = Id<TeamKind>;
