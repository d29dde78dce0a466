//! Core search node type and frontier ordering key.
//!
//! Nodes live in an arena (`Vec<SearchNode>`) owned by one search call and
//! refer to their parent by index. The parent chain is acyclic because a
//! child is only created for a state that was unexplored, or reached more
//! cheaply, when its parent was expanded.

/// An immutable search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    /// Index of this node in the search arena.
    pub node_id: usize,
    /// Parent index (`None` for root).
    pub parent_id: Option<usize>,
    /// Domain state at this node.
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated path cost from the root.
    pub g_cost: u64,
    /// Heuristic estimate at this state (0 for blind search).
    pub h_cost: u64,
    /// Frontier priority (`None` for blind search).
    pub priority: Option<u64>,
    /// Global insertion counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S, A> SearchNode<S, A> {
    /// Build the root node for `state`.
    #[must_use]
    pub fn root(state: S, h_cost: u64, priority: Option<u64>) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            action: None,
            depth: 0,
            g_cost: 0,
            h_cost,
            priority,
            creation_order: 0,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Compute `f_cost = g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// The priority-frontier ordering key.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            priority: self.priority.unwrap_or(0),
            creation_order: self.creation_order,
        }
    }
}

/// The priority-frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; ties go to the node inserted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierKey {
    pub priority: u64,
    pub creation_order: u64,
}
