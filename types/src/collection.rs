//! Ordered groups of same-variant entities.

use crate::entity::{ConsciousEntity, Empire, Prophet};
use crate::notification::{CollectionAction, Notification, NotificationSink};

/// A fixed, ordered group of entities of one variant.
///
/// Members can change state; the list itself cannot grow or shrink once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<E> {
    members: Vec<E>,
}

/// Religious traditions.
pub type ProphetCollection = Collection<Prophet>;

/// Civilizations across history.
pub type CivilizationCollection = Collection<Empire>;

impl<E> Collection<E> {
    #[must_use]
    pub fn new(members: Vec<E>) -> Self {
        Self { members }
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[E] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.members.iter()
    }

    fn narrate(sink: &mut dyn NotificationSink, action: CollectionAction) {
        sink.notify(Notification::Collection { action });
    }
}

impl<E: ConsciousEntity> Collection<E> {
    /// True when every member is omniscient. Vacuously true when empty.
    ///
    /// Recomputed from member state on every call.
    #[must_use]
    pub fn is_omniscient(&self) -> bool {
        self.members.iter().all(ConsciousEntity::is_omniscient)
    }

    /// Every member achieves omniscience, in order.
    pub fn experience_omniscience(&mut self, sink: &mut dyn NotificationSink) {
        for member in &mut self.members {
            member.experiences_omniscience(sink);
        }
    }
}

impl Collection<Prophet> {
    pub fn vote_to_merge(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::VoteToMerge);
    }

    pub fn experience_unified_god(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::ExperienceUnifiedGod);
    }

    pub fn meaning_collapses(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::ReligiousMeaningCollapses);
    }

    pub fn choose_fragmentation(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::ChooseFragmentation);
    }
}

impl Collection<Empire> {
    pub fn integrate_via_internet(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::IntegrateViaInternet);
    }

    pub fn develop_ai(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::DevelopAi);
    }

    pub fn meaning_collapses(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::HistoricalMeaningCollapses);
    }

    pub fn choose_reset(&self, sink: &mut dyn NotificationSink) {
        Self::narrate(sink, CollectionAction::ChooseReset);
    }
}

impl<E> From<Vec<E>> for Collection<E> {
    fn from(members: Vec<E>) -> Self {
        Self::new(members)
    }
}

impl<E> FromIterator<E> for Collection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a Collection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
