//! Core domain logic for the consciousness trilogy.
//!
//! This crate holds the orchestrator that drives entities through the three
//! scales, the error taxonomy, and the sinks that carry notifications out to
//! a terminal, a JSON stream, or `tracing`.

mod consciousness;
pub mod errors;
mod sinks;

pub use consciousness::{COMPLETION_MESSAGE, Consciousness, EMPIRE_ROSTER, OMNISCIENCE_THRESHOLD};
pub use errors::{ConsciousnessError, derive_meaning};
pub use sinks::{JsonLinesSink, TextSink, TracingSink};
