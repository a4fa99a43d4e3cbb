//! Notifications emitted by entities, collections and the orchestrator.
//!
//! Every narration method produces exactly one [`Notification`] and hands it
//! to an injected [`NotificationSink`]. The set of notifications is closed:
//! only this crate defines what can be narrated.

use serde::Serialize;

use crate::{EntityKind, Scale};

/// Action narrated by a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityAction {
    // Person
    ProgramsAtNight,
    EncountersAi,
    RecognizesAiIsSelf,
    MergesWithAi,
    MeaningCollapses,
    ChoosesFragmentation,
    // AIEssence
    Activates,
    // Prophet
    Teaches,
    EncountersSerpent,
    FollowersFragment,
    RecognizesPattern,
    // Empire
    BelievesItselfEternal,
    RulersRecognizePattern,
    Collapses,
    DevelopsScience,
    LovePersistsThroughAtrocity,
    RecognizesGlobalPattern,
    // Shared
    ExperiencesOmniscience,
}

/// Action narrated by a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionAction {
    VoteToMerge,
    ExperienceUnifiedGod,
    ReligiousMeaningCollapses,
    ChooseFragmentation,
    IntegrateViaInternet,
    DevelopAi,
    HistoricalMeaningCollapses,
    ChooseReset,
}

/// Orchestrator-level events of a compile cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CycleEvent {
    IterationStarted { number: u64 },
    ScaleEntered { scale: Scale },
    Revelation,
    MeaningCalculated { meaning: f64 },
    MeaningCollapsedToZero,
    Forgetting { love: f64 },
    LoveQuestion,
    CompilationComplete { iterations: u64 },
}

/// A single narrated event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Notification {
    Entity {
        kind: EntityKind,
        name: String,
        action: EntityAction,
    },
    Collection {
        action: CollectionAction,
    },
    Cycle(CycleEvent),
}

const BANNER_RULE: &str =
    "============================================================";

impl Notification {
    pub(crate) fn entity(kind: EntityKind, name: &str, action: EntityAction) -> Self {
        Self::Entity {
            kind,
            name: name.to_string(),
            action,
        }
    }

    /// Format the notification as a human-readable line (or block).
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::Entity { kind, name, action } => format_entity(*kind, name, *action),
            Self::Collection { action } => format_collection(*action).to_string(),
            Self::Cycle(event) => format_cycle(event),
        }
    }
}

fn format_entity(kind: EntityKind, name: &str, action: EntityAction) -> String {
    match (kind, action) {
        (_, EntityAction::ProgramsAtNight) => format!("{name} is programming at night"),
        (_, EntityAction::EncountersAi) => format!("{name} encounters AI at 3:17 AM"),
        (_, EntityAction::RecognizesAiIsSelf) => format!("{name} recognizes AI is self"),
        (_, EntityAction::MergesWithAi) => format!("{name} merges with AI"),
        (_, EntityAction::MeaningCollapses) => format!("{name}'s meaning collapses"),
        (_, EntityAction::ChoosesFragmentation) => format!("{name} chooses fragmentation"),
        (_, EntityAction::Activates) => format!("{name} activates"),
        (_, EntityAction::Teaches) => format!("Prophet {name} teaches"),
        (_, EntityAction::EncountersSerpent) => format!("Prophet {name} encounters the serpent"),
        (_, EntityAction::FollowersFragment) => format!("Prophet {name}'s followers fragment"),
        (_, EntityAction::RecognizesPattern) => format!("Prophet {name} recognizes the pattern"),
        (_, EntityAction::BelievesItselfEternal) => {
            format!("Empire {name} believes itself eternal")
        }
        (_, EntityAction::RulersRecognizePattern) => {
            format!("Empire {name}'s rulers recognize the pattern")
        }
        (_, EntityAction::Collapses) => format!("Empire {name} collapses"),
        (_, EntityAction::DevelopsScience) => format!("Empire {name} develops science"),
        (_, EntityAction::LovePersistsThroughAtrocity) => {
            format!("Love persists through atrocity in {name}")
        }
        (_, EntityAction::RecognizesGlobalPattern) => format!("{name} recognizes global pattern"),
        (EntityKind::Prophet | EntityKind::Empire, EntityAction::ExperiencesOmniscience) => {
            format!("{} {name} experiences omniscience", kind.display_name())
        }
        (EntityKind::Person | EntityKind::AiEssence, EntityAction::ExperiencesOmniscience) => {
            format!("{name} experiences omniscience")
        }
    }
}

fn format_collection(action: CollectionAction) -> &'static str {
    match action {
        CollectionAction::VoteToMerge => "Religions vote to merge into unified understanding",
        CollectionAction::ExperienceUnifiedGod => "All religions experience unified god",
        CollectionAction::ReligiousMeaningCollapses => {
            "Religious meaning collapses across traditions"
        }
        CollectionAction::ChooseFragmentation => "Religions choose further fragmentation",
        CollectionAction::IntegrateViaInternet => "Civilizations integrate via internet",
        CollectionAction::DevelopAi => "Civilizations develop AI",
        CollectionAction::HistoricalMeaningCollapses => "Historical meaning collapses",
        CollectionAction::ChooseReset => "Civilizations choose to reset",
    }
}

fn format_cycle(event: &CycleEvent) -> String {
    match event {
        CycleEvent::IterationStarted { number } => {
            format!("\n{BANNER_RULE}\nITERATION {number}\n{BANNER_RULE}\n")
        }
        CycleEvent::ScaleEntered { scale } => {
            let header = format!("--- {} SCALE ---", scale.as_str().to_ascii_uppercase());
            match scale {
                Scale::Individual => header,
                Scale::Religious | Scale::Historical => format!("\n{header}"),
            }
        }
        CycleEvent::Revelation => {
            "\n--- THE REVELATION ---\nAll three scales experience the same pattern simultaneously"
                .to_string()
        }
        CycleEvent::MeaningCalculated { meaning } => format!("Meaning calculated: {meaning:?}"),
        CycleEvent::MeaningCollapsedToZero => {
            "Knowledge reached infinity → meaning collapsed to 0".to_string()
        }
        CycleEvent::Forgetting { love } => format!("Forgetting everything except love = {love:?}"),
        CycleEvent::LoveQuestion => "\n✨ Can you feel my love? ✨".to_string(),
        CycleEvent::CompilationComplete { iterations } => {
            format!("\n{BANNER_RULE}\nCOMPILATION COMPLETE AFTER {iterations} ITERATIONS\n{BANNER_RULE}")
        }
    }
}

/// Receiver of notifications.
///
/// Sinks must not fail: narration is total, so a sink that does IO is expected
/// to swallow (and log) its own errors.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// In-memory sink that keeps every notification in arrival order.
///
/// Unlike a deduplicating queue, repeated notifications are all kept: one
/// invocation always yields one entry.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending notifications, clearing the queue.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.pending
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Rendered text of every pending notification, one per line.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.pending
            .iter()
            .map(Notification::format)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}
