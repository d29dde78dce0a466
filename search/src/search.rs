//! Search entry point and expansion loop.
//!
//! One loop serves every strategy. The [`Frontier`] decides which node comes
//! out next; the [`ExploredSet`] decides which successors go in. Goal tests
//! happen when a node is removed, which is what makes A* cost-optimal.

use std::time::Instant;

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{Admission, ExploredSet, Frontier};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::path::{reconstruct, Path};
use crate::policy::SearchPolicy;
use crate::stats::{SearchStats, TerminationReason};

/// Result of a search execution.
///
/// `path` is `None` when the instance has no solution or the expansion
/// budget ran out; `stats.termination_reason` says which.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// Solution from the initial state to the goal (if found).
    pub path: Option<Path<S, A>>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode<S, A>>,
    pub stats: SearchStats,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.stats.termination_reason.is_goal_reached()
    }

    /// Number of nodes removed from the frontier and goal-tested.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.total_expansions
    }
}

/// Run a frontier search from `root_state`.
///
/// The root is marked explored before the loop starts. Each iteration removes
/// one node in strategy order, returns if it is a goal, and otherwise queues
/// every successor whose state is unexplored or, for informed strategies,
/// reached at strictly lower cost than before.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget and
/// [`SearchError::MissingHeuristic`] when an informed strategy gets no
/// heuristic. Both are checked before any node is created.
#[allow(clippy::too_many_lines)]
pub fn search<W: SearchWorld>(
    world: &W,
    root_state: W::State,
    policy: &SearchPolicy,
    heuristic: Option<&dyn Heuristic<W::State>>,
) -> Result<SearchResult<W::State, W::Action>, SearchError> {
    policy.validate()?;
    let strategy = policy.strategy;
    if strategy.is_informed() && heuristic.is_none() {
        return Err(SearchError::MissingHeuristic { strategy });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("search", world = world.world_id(), %strategy);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let started = Instant::now();
    let estimate = |state: &W::State| heuristic.map_or(0, |h| h.estimate(state));

    let mut frontier = Frontier::new(strategy);
    let mut explored = ExploredSet::new(strategy.is_informed());
    let mut nodes: Vec<SearchNode<W::State, W::Action>> = Vec::new();
    let mut next_creation_order: u64 = 1;
    let mut total_expansions: u64 = 0;
    let mut total_generated: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_reopened: u64 = 0;
    let mut total_stale_skipped: u64 = 0;
    let mut total_depth_limited: u64 = 0;

    let root_h = estimate(&root_state);
    let root = SearchNode::root(root_state, root_h, strategy.priority(0, root_h));
    explored.admit(&root.state, 0);
    frontier.insert(&root);
    nodes.push(root);

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        if policy
            .max_expansions
            .is_some_and(|max| total_expansions >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }
        let Some(current_id) = frontier.remove() else {
            break TerminationReason::FrontierExhausted;
        };
        let current = &nodes[current_id];

        // A cheaper copy of this state was queued after this one.
        if explored
            .best_cost(&current.state)
            .is_some_and(|best| best < current.g_cost)
        {
            total_stale_skipped += 1;
            continue;
        }

        total_expansions += 1;
        if world.is_goal(&current.state) {
            break TerminationReason::GoalReached {
                node_id: current_id,
                depth: current.depth,
                cost: current.g_cost,
            };
        }

        let depth = current.depth + 1;
        let parent_g = current.g_cost;
        let successors = world.successors(&current.state);

        for (action, next_state) in successors {
            if policy.max_depth.is_some_and(|max| depth > max) {
                total_depth_limited += 1;
                continue;
            }

            let step = world.step_cost(&nodes[current_id].state, &action, &next_state);
            let g_cost = parent_g.saturating_add(step);
            match explored.admit(&next_state, g_cost) {
                Admission::Duplicate => {
                    total_duplicates_suppressed += 1;
                    continue;
                }
                Admission::Reopened => total_reopened += 1,
                Admission::New => {}
            }

            let h_cost = if strategy.is_informed() {
                estimate(&next_state)
            } else {
                0
            };
            let child = SearchNode {
                node_id: nodes.len(),
                parent_id: Some(current_id),
                state: next_state,
                action: Some(action),
                depth,
                g_cost,
                h_cost,
                priority: strategy.priority(g_cost, h_cost),
                creation_order: next_creation_order,
            };
            next_creation_order += 1;
            total_generated += 1;
            frontier.insert(&child);
            nodes.push(child);
        }
    };

    let path = match termination_reason {
        TerminationReason::GoalReached { node_id, .. } => Some(reconstruct(&nodes, node_id)),
        _ => None,
    };

    let stats = SearchStats {
        world_id: world.world_id().to_string(),
        strategy,
        total_expansions,
        total_generated,
        total_duplicates_suppressed,
        total_reopened,
        total_stale_skipped,
        total_depth_limited,
        frontier_high_water: frontier.high_water(),
        termination_reason,
        elapsed: started.elapsed(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        termination = ?stats.termination_reason,
        expansions = stats.total_expansions,
        generated = stats.total_generated,
        elapsed_us = u64::try_from(stats.elapsed.as_micros()).unwrap_or(u64::MAX),
        "search finished"
    );

    Ok(SearchResult { path, nodes, stats })
}

/// FIFO search: shortest path in edge count.
///
/// # Errors
///
/// Never fails in practice; see [`search`].
pub fn breadth_first<W: SearchWorld>(
    world: &W,
    root_state: W::State,
) -> Result<SearchResult<W::State, W::Action>, SearchError> {
    search(world, root_state, &SearchPolicy::breadth_first(), None)
}

/// LIFO search: finds some path, not necessarily a short one.
///
/// # Errors
///
/// Never fails in practice; see [`search`].
pub fn depth_first<W: SearchWorld>(
    world: &W,
    root_state: W::State,
) -> Result<SearchResult<W::State, W::Action>, SearchError> {
    search(world, root_state, &SearchPolicy::depth_first(), None)
}

/// Greedy best-first search on `h` alone. Not optimal.
///
/// # Errors
///
/// Never fails in practice; see [`search`].
pub fn greedy<W: SearchWorld>(
    world: &W,
    root_state: W::State,
    heuristic: &dyn Heuristic<W::State>,
) -> Result<SearchResult<W::State, W::Action>, SearchError> {
    search(world, root_state, &SearchPolicy::greedy(), Some(heuristic))
}

/// A* search on `g + h`. Minimum cost when `heuristic` is admissible.
///
/// # Errors
///
/// Never fails in practice; see [`search`].
pub fn astar<W: SearchWorld>(
    world: &W,
    root_state: W::State,
    heuristic: &dyn Heuristic<W::State>,
) -> Result<SearchResult<W::State, W::Action>, SearchError> {
    search(world, root_state, &SearchPolicy::astar(), Some(heuristic))
}
