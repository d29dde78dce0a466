//! Path reconstruction from the node arena.

use crate::node::SearchNode;

/// An ordered solution from (but excluding) the initial state to the goal.
///
/// `actions[i]` leads into `states[i]`. Both are empty when the initial state
/// is already a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, A> {
    pub actions: Vec<A>,
    pub states: Vec<S>,
    /// Accumulated cost of the goal node.
    pub cost: u64,
}

impl<S, A> Path<S, A> {
    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The final state, or `None` for an empty path.
    #[must_use]
    pub fn goal_state(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Walk parent links from `goal_id` back to the root.
///
/// The root contributes nothing: it has no incoming action. O(depth).
///
/// # Panics
///
/// Panics if `goal_id` or any parent id is out of bounds for `nodes`. The
/// arena produced by [`crate::search::search`] never contains such links.
#[must_use]
pub fn reconstruct<S: Clone, A: Clone>(nodes: &[SearchNode<S, A>], goal_id: usize) -> Path<S, A> {
    let goal = &nodes[goal_id];
    let mut actions = Vec::with_capacity(goal.depth as usize);
    let mut states = Vec::with_capacity(goal.depth as usize);

    let mut current = goal;
    while let (Some(parent_id), Some(action)) = (current.parent_id, &current.action) {
        actions.push(action.clone());
        states.push(current.state.clone());
        current = &nodes[parent_id];
    }

    actions.reverse();
    states.reverse();
    Path {
        actions,
        states,
        cost: goal.g_cost,
    }
}
