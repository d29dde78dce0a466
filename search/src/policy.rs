//! Search policy: frontier ordering strategy and caller budgets.

use crate::error::SearchError;

/// Frontier ordering strategy.
///
/// `BreadthFirst` and `DepthFirst` are blind: once a state is explored it is
/// never reopened. `Greedy` and `AStar` are informed: a state is reopened when
/// a strictly cheaper path reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO removal. Shortest path in edge count on unit-cost graphs.
    BreadthFirst,
    /// LIFO removal. No shortness guarantee.
    DepthFirst,
    /// Lowest `h` first. Heuristic-only: no optimality guarantee.
    Greedy,
    /// Lowest `g + h` first. Cost-optimal with an admissible heuristic.
    AStar,
}

impl Strategy {
    /// Whether this strategy orders by a heuristic and reopens on cheaper paths.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    /// Frontier priority for a node with the given costs.
    ///
    /// Blind strategies ignore priority; they return `None`.
    #[must_use]
    pub const fn priority(self, g_cost: u64, h_cost: u64) -> Option<u64> {
        match self {
            Self::BreadthFirst | Self::DepthFirst => None,
            Self::Greedy => Some(h_cost),
            Self::AStar => Some(g_cost.saturating_add(h_cost)),
        }
    }

    /// Stable lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::Greedy => "greedy",
            Self::AStar => "a_star",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier ordering.
    pub strategy: Strategy,
    /// Hard cap on node expansions. `None` runs until goal or exhaustion.
    pub max_expansions: Option<u64>,
    /// Children deeper than this are not generated.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_expansions: None,
            max_depth: None,
        }
    }

    #[must_use]
    pub fn breadth_first() -> Self {
        Self::new(Strategy::BreadthFirst)
    }

    #[must_use]
    pub fn depth_first() -> Self {
        Self::new(Strategy::DepthFirst)
    }

    #[must_use]
    pub fn greedy() -> Self {
        Self::new(Strategy::Greedy)
    }

    #[must_use]
    pub fn astar() -> Self {
        Self::new(Strategy::AStar)
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Reject budgets that would stop the search before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::breadth_first()
    }
}
