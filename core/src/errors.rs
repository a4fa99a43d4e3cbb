//! Errors surfaced by the orchestrator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsciousnessError {
    /// A negative number of traditions was requested.
    #[error("tradition count must not be negative (got {count})")]
    InvalidTraditionCount { count: i64 },
    /// `mystery / knowledge` with zero knowledge.
    #[error("meaning is undefined when knowledge is zero (mystery = {mystery})")]
    UndefinedMeaning { mystery: f64 },
}

/// Derive `meaning = mystery / knowledge`.
///
/// Zero knowledge is rejected rather than turned into an infinity or NaN.
pub fn derive_meaning(mystery: f64, knowledge: f64) -> Result<f64, ConsciousnessError> {
    if knowledge == 0.0 {
        return Err(ConsciousnessError::UndefinedMeaning { mystery });
    }
    Ok(mystery / knowledge)
}
