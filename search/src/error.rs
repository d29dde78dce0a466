//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. An instance with no
//! solution is not an error: it surfaces as `path: None` with
//! [`crate::stats::TerminationReason::FrontierExhausted`].

use crate::policy::Strategy;

/// Typed failure for pre-flight search validation.
///
/// Returned before the root node is created; no statistics are produced
/// because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy field holds a value the engine cannot honor.
    InvalidPolicy { detail: String },
    /// An informed strategy was selected without a heuristic.
    MissingHeuristic { strategy: Strategy },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::MissingHeuristic { strategy } => {
                write!(f, "strategy {strategy} requires a heuristic")
            }
        }
    }
}

impl std::error::Error for SearchError {}
