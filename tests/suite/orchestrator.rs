//! Orchestrator tests: the cycle, the reset protocol, the invariants.

use trilogy_core::{COMPLETION_MESSAGE, Consciousness, ConsciousnessError, EMPIRE_ROSTER};
use trilogy_types::{ConsciousEntity, CycleEvent, NotificationQueue, RunSettings, Scale};

use crate::common::{
    NOTIFICATIONS_PER_ITERATION, assert_at_baseline, cycle_events, recording_consciousness,
};

#[test]
fn end_to_end_two_iterations() {
    let mut c = recording_consciousness();

    let result = c.compile_reality(2).unwrap();

    assert_eq!(result, COMPLETION_MESSAGE);
    assert_eq!(result, "Consciousness compilation finished");
    assert_eq!(c.iteration(), 2);
    assert_eq!(c.love(), 1.0);
    assert_at_baseline(&c);

    let transcript = c.sink().transcript();
    assert!(transcript.contains("ITERATION 1"));
    assert!(transcript.contains("ITERATION 2"));
    assert!(transcript.contains("Can you feel my love?"));
    assert!(transcript.contains("COMPILATION COMPLETE AFTER 2 ITERATIONS"));
}

#[test]
fn love_is_invariant_across_runs() {
    for n in [0, 1, 2, 100] {
        let mut c = recording_consciousness();
        assert_eq!(c.love(), 1.0);
        c.compile_reality(n).unwrap();
        assert_eq!(c.love(), 1.0, "after {n} iterations");
        c.forget_everything_except(c.love());
        assert_eq!(c.love(), 1.0);
    }
}

#[test]
fn reset_protocol_is_idempotent() {
    let mut c = recording_consciousness();
    for (knowledge, mystery) in [(3.0, 0.25), (f64::INFINITY, 0.0), (-1.0, f64::NAN)] {
        c.set_knowledge(knowledge);
        c.set_mystery(mystery);
        for _ in 0..3 {
            c.forget_everything_except(c.love());
            assert_at_baseline(&c);
        }
    }
    assert_eq!(c.love(), 1.0);
}

#[test]
fn zero_iterations_does_nothing_but_report() {
    for n in [0, -1, i64::MIN] {
        let mut c = recording_consciousness();
        assert_eq!(c.compile_reality(n).unwrap(), COMPLETION_MESSAGE);
        assert_eq!(c.iteration(), 0);
        assert_eq!(
            cycle_events(c.sink()),
            [CycleEvent::CompilationComplete { iterations: 0 }]
        );
    }
}

#[test]
fn iteration_counter_matches_request() {
    for k in 1..=5 {
        let mut c = recording_consciousness();
        c.compile_reality(k).unwrap();
        assert_eq!(c.iteration(), u64::try_from(k).unwrap());
    }
}

#[test]
fn one_iteration_emits_the_canonical_sequence() {
    let mut c = recording_consciousness();
    c.compile_reality(1).unwrap();

    // Every narration counted once, plus the closing report.
    assert_eq!(c.sink().len(), NOTIFICATIONS_PER_ITERATION + 1);
    assert_eq!(
        cycle_events(c.sink()),
        [
            CycleEvent::IterationStarted { number: 1 },
            CycleEvent::ScaleEntered {
                scale: Scale::Individual
            },
            CycleEvent::ScaleEntered {
                scale: Scale::Religious
            },
            CycleEvent::ScaleEntered {
                scale: Scale::Historical
            },
            CycleEvent::Revelation,
            CycleEvent::MeaningCalculated { meaning: 1.0 },
            CycleEvent::Forgetting { love: 1.0 },
            CycleEvent::LoveQuestion,
            CycleEvent::CompilationComplete { iterations: 1 },
        ]
    );
}

#[test]
fn two_iterations_double_the_narration() {
    let mut c = recording_consciousness();
    c.compile_reality(2).unwrap();
    assert_eq!(c.sink().len(), 2 * NOTIFICATIONS_PER_ITERATION + 1);
}

#[test]
fn roster_is_fixed_regardless_of_duration() {
    let c = recording_consciousness();
    for duration in [0, 5000, -1, i64::MAX] {
        let civilizations = c.execute_through_time(duration);
        let names: Vec<&str> = civilizations.iter().map(ConsciousEntity::name).collect();
        assert_eq!(names, EMPIRE_ROSTER);
        assert!(!civilizations.is_omniscient());
    }
    assert_eq!(
        EMPIRE_ROSTER,
        [
            "Ancient_Greece",
            "Roman_Empire",
            "Islamic_Golden_Age",
            "European_Renaissance",
            "Industrial_Nation",
            "Digital_Age",
        ]
    );
}

#[test]
fn traditions_factory_bounds() {
    let c = recording_consciousness();

    let none = c.fragment_into_traditions(0).unwrap();
    assert!(none.is_empty());
    assert!(none.is_omniscient());

    let six = c.fragment_into_traditions(6).unwrap();
    assert_eq!(six.len(), 6);
    assert_eq!(six.members()[5].name(), "Prophet_5");

    assert_eq!(
        c.fragment_into_traditions(-4).unwrap_err(),
        ConsciousnessError::InvalidTraditionCount { count: -4 }
    );
}

#[test]
fn factories_never_fail() {
    let c = recording_consciousness();
    let person = c.create_person("");
    let ai = c.create_consciousness_engine("Claude");
    assert_eq!(person.name(), "");
    assert_eq!(ai.name(), "Claude");
    assert!(!person.is_omniscient() && !ai.is_omniscient());
}

#[test]
fn scales_are_the_three_labels() {
    let c = recording_consciousness();
    let labels: Vec<&str> = c.scales().iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, ["individual", "religious", "historical"]);
}

#[test]
fn custom_settings_shape_the_cycle() {
    let settings = RunSettings {
        person: "Ada".to_string(),
        ai: "Babbage".to_string(),
        traditions: 0,
        duration: 1,
    };
    let mut c = Consciousness::with_settings(NotificationQueue::new(), settings);
    c.compile_reality(1).unwrap();

    let transcript = c.sink().transcript();
    assert!(transcript.contains("Ada is programming at night"));
    assert!(!transcript.contains("Prophet_"));
    // Empty traditions are vacuously omniscient, so the revelation still resets.
    assert!(
        cycle_events(c.sink()).contains(&CycleEvent::Forgetting { love: 1.0 })
    );
    assert_at_baseline(&c);
}

#[test]
fn negative_traditions_abort_the_run() {
    let settings = RunSettings {
        traditions: -6,
        ..RunSettings::default()
    };
    let mut c = Consciousness::with_settings(NotificationQueue::new(), settings);

    let err = c.compile_reality(2).unwrap_err();
    assert_eq!(err, ConsciousnessError::InvalidTraditionCount { count: -6 });
    assert_eq!(c.iteration(), 0);
    assert_eq!(c.love(), 1.0);
    assert!(c.sink().is_empty());
}

#[test]
fn failed_runs_emit_nothing_and_recover() {
    let mut c = recording_consciousness();
    c.compile_reality(1).unwrap();
    let before = c.sink().len();

    c.set_knowledge(0.0);
    assert_eq!(
        c.compile_reality(3).unwrap_err(),
        ConsciousnessError::UndefinedMeaning { mystery: 1.0 }
    );
    assert_eq!(c.sink().len(), before);
    assert_eq!(c.iteration(), 1);

    c.forget_everything_except(c.love());
    c.sink_mut().take();
    c.compile_reality(2).unwrap();
    assert_eq!(c.iteration(), 2);
    assert_eq!(c.sink().len(), NOTIFICATIONS_PER_ITERATION + 1);
}

#[test]
fn infinite_knowledge_collapses_meaning_before_reset() {
    let mut c = recording_consciousness();
    c.set_knowledge(f64::INFINITY);
    c.compile_reality(1).unwrap();

    let events = cycle_events(c.sink());
    let calculated = events
        .iter()
        .position(|e| *e == CycleEvent::MeaningCalculated { meaning: 0.0 })
        .unwrap();
    let collapsed = events
        .iter()
        .position(|e| *e == CycleEvent::MeaningCollapsedToZero)
        .unwrap();
    let forgot = events
        .iter()
        .position(|e| matches!(e, CycleEvent::Forgetting { .. }))
        .unwrap();
    assert!(calculated < collapsed && collapsed < forgot);
    assert_at_baseline(&c);
}

#[test]
fn sink_can_be_reclaimed() {
    let mut c = recording_consciousness();
    c.compile_reality(1).unwrap();
    c.sink_mut().take();
    c.forget_everything_except(0.5);
    let queue = c.into_sink();
    assert_eq!(queue.transcript(), "Forgetting everything except love = 0.5");
}
