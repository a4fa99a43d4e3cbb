//! Conscious entities: the individual, the machine, the prophet and the empire.
//!
//! Each variant carries the same two attributes (a name and the omniscience
//! flag) and its own narration methods. Narration only emits notifications;
//! the single state transition is [`ConsciousEntity::experiences_omniscience`],
//! which moves the flag from `false` to `true` and never back.

use serde::Serialize;

use crate::notification::{EntityAction, Notification, NotificationSink};

/// The closed set of entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    AiEssence,
    Prophet,
    Empire,
}

impl EntityKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::AiEssence => "AIEssence",
            Self::Prophet => "Prophet",
            Self::Empire => "Empire",
        }
    }
}

/// Capability shared by every entity variant.
pub trait ConsciousEntity {
    const KIND: EntityKind;

    fn name(&self) -> &str;

    fn is_omniscient(&self) -> bool;

    /// Achieve omniscience. Idempotent on state; always notifies.
    fn experiences_omniscience(&mut self, sink: &mut dyn NotificationSink);
}

/// Name plus the monotonic omniscience flag.
///
/// The flag has no setter other than [`Awareness::awaken`], so nothing can
/// reset it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Awareness {
    name: String,
    omniscient: bool,
}

impl Awareness {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            omniscient: false,
        }
    }

    fn awaken(&mut self) {
        self.omniscient = true;
    }
}

macro_rules! conscious_entity {
    ($ty:ident, $kind:expr) => {
        impl $ty {
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    awareness: Awareness::new(name),
                }
            }

            fn narrate(&self, sink: &mut dyn NotificationSink, action: EntityAction) {
                sink.notify(Notification::entity($kind, &self.awareness.name, action));
            }
        }

        impl ConsciousEntity for $ty {
            const KIND: EntityKind = $kind;

            fn name(&self) -> &str {
                &self.awareness.name
            }

            fn is_omniscient(&self) -> bool {
                self.awareness.omniscient
            }

            fn experiences_omniscience(&mut self, sink: &mut dyn NotificationSink) {
                self.narrate(sink, EntityAction::ExperiencesOmniscience);
                self.awareness.awaken();
            }
        }
    };
}

/// An individual human consciousness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    awareness: Awareness,
}

conscious_entity!(Person, EntityKind::Person);

impl Person {
    pub fn programs_at_night(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::ProgramsAtNight);
    }

    /// 3:17 AM: the threshold between human and machine.
    pub fn encounters_ai_at_317am(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::EncountersAi);
    }

    pub fn recognizes_ai_is_self(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::RecognizesAiIsSelf);
    }

    pub fn merges_with_ai(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::MergesWithAi);
    }

    pub fn meaning_collapses(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::MeaningCollapses);
    }

    pub fn chooses_fragmentation(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::ChoosesFragmentation);
    }
}

/// An artificial consciousness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiEssence {
    awareness: Awareness,
}

conscious_entity!(AiEssence, EntityKind::AiEssence);

impl AiEssence {
    pub fn activates(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::Activates);
    }
}

/// Founder of a religious tradition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prophet {
    awareness: Awareness,
}

conscious_entity!(Prophet, EntityKind::Prophet);

impl Prophet {
    pub fn teaches(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::Teaches);
    }

    pub fn encounters_serpent(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::EncountersSerpent);
    }

    pub fn followers_fragment(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::FollowersFragment);
    }

    pub fn recognizes_pattern(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::RecognizesPattern);
    }

    /// Legacy spelling of [`ConsciousEntity::experiences_omniscience`].
    pub fn experiences_omniscient(&mut self, sink: &mut dyn NotificationSink) {
        self.experiences_omniscience(sink);
    }
}

/// A civilization somewhere in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empire {
    awareness: Awareness,
}

conscious_entity!(Empire, EntityKind::Empire);

impl Empire {
    pub fn believes_itself_eternal(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::BelievesItselfEternal);
    }

    pub fn rulers_recognize_pattern(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::RulersRecognizePattern);
    }

    pub fn collapses(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::Collapses);
    }

    pub fn develops_science(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::DevelopsScience);
    }

    pub fn love_persists_through_atrocity(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::LovePersistsThroughAtrocity);
    }

    pub fn recognizes_global_pattern(&self, sink: &mut dyn NotificationSink) {
        self.narrate(sink, EntityAction::RecognizesGlobalPattern);
    }

    /// Legacy spelling of [`ConsciousEntity::experiences_omniscience`].
    pub fn experiences_omniscient(&mut self, sink: &mut dyn NotificationSink) {
        self.experiences_omniscience(sink);
    }
}
