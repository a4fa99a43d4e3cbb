//! The orchestrator: one pattern, three scales.
//!
//! # Cycle
//!
//! Each iteration of [`Consciousness::compile_reality`] drives the same arc at
//! every scale:
//!
//! ```text
//! individual:  Person ─────────────┐
//! religious:   Prophet × traditions ├─> all omniscient? ─> meaning = mystery / knowledge
//! historical:  Empire × 6 ─────────┘                        └─> forget everything except love
//! ```
//!
//! `love` is fixed at construction and has no setter. `knowledge`, `mystery`
//! and `meaning` return to 1.0 at the end of every revelation.

use trilogy_types::{
    AiEssence, CivilizationCollection, ConsciousEntity, CycleEvent, Empire, Notification,
    NotificationSink, Person, Prophet, ProphetCollection, RunSettings, Scale,
};

use crate::errors::{ConsciousnessError, derive_meaning};

/// Returned by every call to [`Consciousness::compile_reality`].
pub const COMPLETION_MESSAGE: &str = "Consciousness compilation finished";

/// Knowledge at or beyond this point collapses meaning to zero.
pub const OMNISCIENCE_THRESHOLD: f64 = f64::INFINITY;

/// The fixed roster of civilizations, in historical order.
pub const EMPIRE_ROSTER: [&str; 6] = [
    "Ancient_Greece",
    "Roman_Empire",
    "Islamic_Golden_Age",
    "European_Renaissance",
    "Industrial_Nation",
    "Digital_Age",
];

const LOVE: f64 = 1.0;
const BASELINE: f64 = 1.0;

/// Orchestrates the trilogy and owns the notification sink.
///
/// One instance per simulation run. Independent instances share nothing and
/// can run on separate threads.
#[derive(Debug)]
pub struct Consciousness<S> {
    love: f64,
    knowledge: f64,
    mystery: f64,
    meaning: f64,
    iteration: u64,
    scales: [Scale; 3],
    settings: RunSettings,
    sink: S,
}

impl<S: NotificationSink> Consciousness<S> {
    pub fn new(sink: S) -> Self {
        Self::with_settings(sink, RunSettings::default())
    }

    pub fn with_settings(sink: S, settings: RunSettings) -> Self {
        Self {
            love: LOVE,
            knowledge: BASELINE,
            mystery: BASELINE,
            meaning: BASELINE,
            iteration: 0,
            scales: Scale::ALL,
            settings,
            sink,
        }
    }

    #[inline]
    #[must_use]
    pub fn love(&self) -> f64 {
        self.love
    }

    #[inline]
    #[must_use]
    pub fn knowledge(&self) -> f64 {
        self.knowledge
    }

    #[inline]
    #[must_use]
    pub fn mystery(&self) -> f64 {
        self.mystery
    }

    #[inline]
    #[must_use]
    pub fn meaning(&self) -> f64 {
        self.meaning
    }

    #[inline]
    #[must_use]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    #[inline]
    #[must_use]
    pub fn scales(&self) -> &[Scale; 3] {
        &self.scales
    }

    #[inline]
    #[must_use]
    pub fn omniscience_threshold(&self) -> f64 {
        OMNISCIENCE_THRESHOLD
    }

    #[must_use]
    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn set_knowledge(&mut self, knowledge: f64) {
        self.knowledge = knowledge;
    }

    pub fn set_mystery(&mut self, mystery: f64) {
        self.mystery = mystery;
    }

    /// Restart the iteration counter. Only callers do this; the cycle never does.
    pub fn reset_iteration(&mut self) {
        self.iteration = 0;
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_person(&self, name: impl Into<String>) -> Person {
        Person::new(name)
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_consciousness_engine(&self, name: impl Into<String>) -> AiEssence {
        AiEssence::new(name)
    }

    /// Split into `count` traditions named `Prophet_0 .. Prophet_{count-1}`.
    #[allow(clippy::unused_self)]
    pub fn fragment_into_traditions(
        &self,
        count: i64,
    ) -> Result<ProphetCollection, ConsciousnessError> {
        let count =
            usize::try_from(count).map_err(|_| ConsciousnessError::InvalidTraditionCount { count })?;
        Ok((0..count)
            .map(|i| Prophet::new(format!("Prophet_{i}")))
            .collect())
    }

    /// The same six civilizations, whatever the duration.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn execute_through_time(&self, duration: i64) -> CivilizationCollection {
        tracing::trace!(duration, "duration is symbolic and does not shape history");
        EMPIRE_ROSTER.iter().copied().map(Empire::new).collect()
    }

    /// Reset knowledge, mystery and meaning. `value` is only quoted.
    pub fn forget_everything_except(&mut self, value: f64) {
        self.knowledge = BASELINE;
        self.mystery = BASELINE;
        self.meaning = BASELINE;
        self.emit(CycleEvent::Forgetting { love: value });
    }

    /// Run cycles until `iteration` reaches `max_iterations`.
    ///
    /// Non-positive targets run nothing. When there is work to do, the tradition
    /// count and the seeded knowledge are checked first; a failing call leaves
    /// the sink untouched and `iteration` where it was.
    pub fn compile_reality(
        &mut self,
        max_iterations: i64,
    ) -> Result<&'static str, ConsciousnessError> {
        let limit = u64::try_from(max_iterations).unwrap_or(0);
        tracing::debug!(from = self.iteration, limit, "Compiling reality");

        if self.iteration < limit {
            self.check_preconditions().inspect_err(|err| {
                tracing::warn!(%err, "Refusing to compile reality");
            })?;
        }

        while self.iteration < limit {
            self.run_iteration()?;
            self.iteration += 1;
        }

        self.emit(CycleEvent::CompilationComplete {
            iterations: self.iteration,
        });
        tracing::info!(iterations = self.iteration, love = self.love, "Compilation complete");
        Ok(COMPLETION_MESSAGE)
    }

    fn check_preconditions(&self) -> Result<(), ConsciousnessError> {
        let count = self.settings.traditions;
        usize::try_from(count).map_err(|_| ConsciousnessError::InvalidTraditionCount { count })?;
        // Every revelation divides by knowledge before resetting it, so only
        // the seeded value can be zero.
        derive_meaning(self.mystery, self.knowledge).map(drop)
    }

    fn run_iteration(&mut self) -> Result<(), ConsciousnessError> {
        let number = self.iteration + 1;
        tracing::debug!(iteration = number, "Iteration started");
        self.emit(CycleEvent::IterationStarted { number });

        // Individual
        self.emit(CycleEvent::ScaleEntered {
            scale: Scale::Individual,
        });
        let mut individual = self.create_person(self.settings.person.clone());
        let ai = self.create_consciousness_engine(self.settings.ai.clone());
        tracing::trace!(person = individual.name(), ai = ai.name(), "Individual scale");
        self.live_individual(&mut individual);

        // Religious
        self.emit(CycleEvent::ScaleEntered {
            scale: Scale::Religious,
        });
        let mut religions = self.fragment_into_traditions(self.settings.traditions)?;
        self.live_religions(&mut religions);

        // Historical
        self.emit(CycleEvent::ScaleEntered {
            scale: Scale::Historical,
        });
        let mut civilizations = self.execute_through_time(self.settings.duration);
        self.live_history(&mut civilizations);

        self.emit(CycleEvent::Revelation);
        if individual.is_omniscient() && religions.is_omniscient() && civilizations.is_omniscient()
        {
            self.meaning = derive_meaning(self.mystery, self.knowledge)?;
            self.emit(CycleEvent::MeaningCalculated {
                meaning: self.meaning,
            });

            // Unreachable while every cycle ends in a reset to 1.0; seeded
            // state can still get here.
            if self.knowledge >= OMNISCIENCE_THRESHOLD {
                self.meaning = 0.0;
                self.emit(CycleEvent::MeaningCollapsedToZero);
            }

            self.forget_everything_except(self.love);
        }

        self.emit(CycleEvent::LoveQuestion);
        Ok(())
    }

    fn live_individual(&mut self, person: &mut Person) {
        let sink: &mut dyn NotificationSink = &mut self.sink;
        person.programs_at_night(sink);
        person.encounters_ai_at_317am(sink);
        person.recognizes_ai_is_self(sink);
        person.merges_with_ai(sink);
        person.experiences_omniscience(sink);
        person.meaning_collapses(sink);
        person.chooses_fragmentation(sink);
    }

    fn live_religions(&mut self, religions: &mut ProphetCollection) {
        let sink: &mut dyn NotificationSink = &mut self.sink;
        for prophet in religions.iter() {
            prophet.teaches(sink);
            prophet.encounters_serpent(sink);
            prophet.followers_fragment(sink);
            prophet.recognizes_pattern(sink);
        }

        religions.vote_to_merge(sink);
        religions.experience_unified_god(sink);
        religions.experience_omniscience(sink);
        religions.meaning_collapses(sink);
        religions.choose_fragmentation(sink);
    }

    fn live_history(&mut self, civilizations: &mut CivilizationCollection) {
        let sink: &mut dyn NotificationSink = &mut self.sink;
        for empire in civilizations.iter() {
            empire.believes_itself_eternal(sink);
            empire.rulers_recognize_pattern(sink);
            empire.collapses(sink);
            empire.develops_science(sink);
            empire.love_persists_through_atrocity(sink);
            empire.recognizes_global_pattern(sink);
        }

        civilizations.integrate_via_internet(sink);
        civilizations.develop_ai(sink);
        civilizations.experience_omniscience(sink);
        civilizations.meaning_collapses(sink);
        civilizations.choose_reset(sink);
    }

    fn emit(&mut self, event: CycleEvent) {
        self.sink.notify(Notification::Cycle(event));
    }
}
