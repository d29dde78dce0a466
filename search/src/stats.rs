//! Search statistics: counters and timers exposed next to the answer.
//!
//! The engine only increments these; control flow never reads them.
//! Canonical JSON covers the deterministic fields, so two runs of the same
//! search produce identical bytes and an identical [`SearchStats::digest`].

use std::time::Duration;

use lodestar_kernel::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::hash::{canonical_hash, ContentHash, HashDomain};

use crate::policy::Strategy;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node satisfying the goal test was removed from the frontier.
    GoalReached { node_id: usize, depth: u32, cost: u64 },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was found.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }
}

/// Counters for one frontier search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub world_id: String,
    pub strategy: Strategy,
    /// Nodes removed from the frontier and goal-tested.
    pub total_expansions: u64,
    /// Children created and queued.
    pub total_generated: u64,
    /// Successors dropped because their state was already explored.
    pub total_duplicates_suppressed: u64,
    /// Successors re-queued because a strictly cheaper path was found.
    pub total_reopened: u64,
    /// Frontier entries skipped because a cheaper copy superseded them.
    pub total_stale_skipped: u64,
    /// Successors not generated because they exceeded `max_depth`.
    pub total_depth_limited: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
    /// Wall time of the search call. Not part of the canonical bytes.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Serialize the deterministic fields to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical bytes under [`HashDomain::SearchStats`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchStats, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "strategy": self.strategy.as_str(),
            "termination_reason": termination_reason_to_json(&self.termination_reason),
            "total_depth_limited": self.total_depth_limited,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_generated": self.total_generated,
            "total_reopened": self.total_reopened,
            "total_stale_skipped": self.total_stale_skipped,
            "world_id": self.world_id,
        })
    }
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached {
            node_id,
            depth,
            cost,
        } => serde_json::json!({
            "cost": cost,
            "depth": depth,
            "node_id": node_id,
            "type": "goal_reached"
        }),
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
    }
}
