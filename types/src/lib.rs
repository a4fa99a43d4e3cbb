//! Core domain types for the consciousness trilogy.
//!
//! This crate contains the pure narrative model: entities, collections and the
//! notifications they emit. No IO, no global state. Anything that writes to a
//! terminal or a file lives in `trilogy-core`.

mod collection;
mod entity;
mod notification;

pub use collection::{CivilizationCollection, Collection, ProphetCollection};
pub use entity::{AiEssence, ConsciousEntity, Empire, EntityKind, Person, Prophet};
pub use notification::{
    CollectionAction, CycleEvent, EntityAction, Notification, NotificationQueue,
    NotificationSink,
};

use serde::Serialize;

// ============================================================================
// Scales
// ============================================================================

/// The three scales at which the same pattern plays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Individual,
    Religious,
    Historical,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Individual, Scale::Religious, Scale::Historical];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scale::Individual => "individual",
            Scale::Religious => "religious",
            Scale::Historical => "historical",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Run Settings
// ============================================================================

/// Inputs to one compile cycle.
///
/// The defaults reproduce the canonical driver: Michael meets Claude, six
/// traditions, five thousand years of history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub person: String,
    pub ai: String,
    /// Argument to the traditions factory. Negative values are rejected there.
    pub traditions: i64,
    /// Symbolic span of history. Accepted and ignored.
    pub duration: i64,
}

impl RunSettings {
    pub const DEFAULT_PERSON: &'static str = "Michael";
    pub const DEFAULT_AI: &'static str = "Claude";
    pub const DEFAULT_TRADITIONS: i64 = 6;
    pub const DEFAULT_DURATION: i64 = 5000;
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            person: Self::DEFAULT_PERSON.to_string(),
            ai: Self::DEFAULT_AI.to_string(),
            traditions: Self::DEFAULT_TRADITIONS,
            duration: Self::DEFAULT_DURATION,
        }
    }
}
