//! Run reports: the summary a front end prints or stores after a run.
//!
//! A report is built from the result of any of the three engines. Its
//! canonical bytes exclude wall time, so two runs of the same problem share
//! a [`RunReport::digest`].

use serde::Serialize;

use lodestar_kernel::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use lodestar_search::csp::BacktrackResult;
use lodestar_search::minimax::MinimaxResult;
use lodestar_search::search::SearchResult;

use std::time::Duration;

/// Outcome of one engine run against one world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub world_id: String,
    /// `breadth_first`, `depth_first`, `greedy`, `a_star`, `minimax` or
    /// `backtracking`.
    pub algorithm: String,
    pub solved: bool,
    /// Path length, assignment length, or 1 for a chosen move.
    pub steps: Option<usize>,
    /// Expansions, visited positions or recursive calls, per engine.
    pub nodes_expanded: u64,
    pub elapsed_micros: u64,
}

impl RunReport {
    #[must_use]
    pub fn from_search<S, A>(result: &SearchResult<S, A>) -> Self {
        Self {
            world_id: result.stats.world_id.clone(),
            algorithm: result.stats.strategy.as_str().to_string(),
            solved: result.path.is_some(),
            steps: result.path.as_ref().map(lodestar_search::path::Path::len),
            nodes_expanded: result.stats.total_expansions,
            elapsed_micros: micros(result.stats.elapsed),
        }
    }

    #[must_use]
    pub fn from_minimax<M>(world_id: &str, result: &MinimaxResult<M>) -> Self {
        Self {
            world_id: world_id.to_string(),
            algorithm: "minimax".to_string(),
            solved: result.best_move.is_some(),
            steps: result.best_move.as_ref().map(|_| 1),
            nodes_expanded: result.nodes_visited,
            elapsed_micros: micros(result.elapsed),
        }
    }

    #[must_use]
    pub fn from_backtrack<V>(world_id: &str, result: &BacktrackResult<V>) -> Self {
        Self {
            world_id: world_id.to_string(),
            algorithm: "backtracking".to_string(),
            solved: result.solution.is_some(),
            steps: result.solution.as_ref().map(Vec::len),
            nodes_expanded: result.nodes_visited,
            elapsed_micros: micros(result.elapsed),
        }
    }

    /// Pretty JSON, elapsed time included.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; a report of plain fields never fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Canonical JSON of every field except `elapsed_micros`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let mut value = serde_json::to_value(self).map_err(|e| CanonError::Serialize {
            detail: e.to_string(),
        })?;
        if let Some(object) = value.as_object_mut() {
            object.remove("elapsed_micros");
        }
        canonical_json_bytes(&value)
    }

    /// Digest of the canonical bytes under [`HashDomain::RunReport`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
