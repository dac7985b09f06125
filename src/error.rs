//! Crate-local error type.
//!
//! Precondition violations are checked with `debug_assert!` at the call site and never reach
//! this type in a release build; only structural inconsistencies and algorithmic infeasibility
//! are reported through `Result`.

use std::error::Error;
use std::fmt;

/// Failure reported by a fallible [`crate::graph::Graph`] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A caller-checkable precondition was violated. Reserved for call sites that would
    /// otherwise be guarded only by a `debug_assert!`; surfaced as an error when the check
    /// cannot be skipped (e.g. it is reached through a public entry point with no cheaper
    /// alternative).
    Precondition(String),
    /// An internal bookkeeping invariant failed: an identifier recorded in a reduce history
    /// step, or expected to be present by construction, could not be found.
    Structural(String),
    /// The Tait recoloring procedure could not find a usable Kempe chain while restoring a
    /// reduction step.
    Infeasible(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Precondition(msg) => write!(f, "precondition violated: {}", msg),
            GraphError::Structural(msg) => write!(f, "structural inconsistency: {}", msg),
            GraphError::Infeasible(msg) => write!(f, "algorithmic infeasibility: {}", msg),
        }
    }
}

impl Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;
