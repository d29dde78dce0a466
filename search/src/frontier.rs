//! Frontier and explored set.
//!
//! The frontier stores arena indices, not nodes. One type serves every
//! strategy; only the removal order differs:
//!
//! - FIFO (`VecDeque`) for breadth-first
//! - LIFO (`Vec`) for depth-first
//! - min-heap on [`FrontierKey`] for greedy and A*
//!
//! A state is marked in the [`ExploredSet`] at the moment its node is
//! inserted, so no state is ever queued twice by blind search.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

use crate::node::{FrontierKey, SearchNode};
use crate::policy::Strategy;

/// A priority-frontier entry.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority, then oldest, first).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: usize,
}

#[derive(Debug)]
enum Store {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority(BinaryHeap<FrontierEntry>),
}

/// Pending nodes, removed in strategy order.
#[derive(Debug)]
pub struct Frontier {
    store: Store,
    high_water: u64,
}

impl Frontier {
    /// Create an empty frontier ordered for `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        let store = match strategy {
            Strategy::BreadthFirst => Store::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Store::Lifo(Vec::new()),
            Strategy::Greedy | Strategy::AStar => Store::Priority(BinaryHeap::new()),
        };
        Self {
            store,
            high_water: 0,
        }
    }

    /// Queue a node.
    pub fn insert<S, A>(&mut self, node: &SearchNode<S, A>) {
        match &mut self.store {
            Store::Fifo(queue) => queue.push_back(node.node_id),
            Store::Lifo(stack) => stack.push(node.node_id),
            Store::Priority(heap) => heap.push(FrontierEntry {
                key: Reverse(node.frontier_key()),
                node_id: node.node_id,
            }),
        }
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node id according to the strategy.
    #[must_use]
    pub fn remove(&mut self) -> Option<usize> {
        match &mut self.store {
            Store::Fifo(queue) => queue.pop_front(),
            Store::Lifo(stack) => stack.pop(),
            Store::Priority(heap) => heap.pop().map(|e| e.node_id),
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(queue) => queue.len(),
            Store::Lifo(stack) => stack.len(),
            Store::Priority(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// What [`ExploredSet::admit`] decided about a newly reached state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// First time this state was reached.
    New,
    /// Seen before, but this path is strictly cheaper (informed search only).
    Reopened,
    /// Seen before and not cheaper, or reopening is disabled.
    Duplicate,
}

impl Admission {
    #[must_use]
    pub fn is_admitted(self) -> bool {
        !matches!(self, Self::Duplicate)
    }
}

/// States already queued, with the cheapest cost seen for each.
#[derive(Debug)]
pub struct ExploredSet<S> {
    best_cost: HashMap<S, u64>,
    reopen_cheaper: bool,
}

impl<S: Clone + Eq + Hash> ExploredSet<S> {
    /// `reopen_cheaper` enables cost-improving re-insertion (informed search).
    #[must_use]
    pub fn new(reopen_cheaper: bool) -> Self {
        Self {
            best_cost: HashMap::new(),
            reopen_cheaper,
        }
    }

    /// Record that `state` was reached with accumulated cost `cost`.
    pub fn admit(&mut self, state: &S, cost: u64) -> Admission {
        match self.best_cost.get_mut(state) {
            None => {
                self.best_cost.insert(state.clone(), cost);
                Admission::New
            }
            Some(best) if self.reopen_cheaper && cost < *best => {
                *best = cost;
                Admission::Reopened
            }
            Some(_) => Admission::Duplicate,
        }
    }

    /// Cheapest recorded cost for `state`.
    #[must_use]
    pub fn best_cost(&self, state: &S) -> Option<u64> {
        self.best_cost.get(state).copied()
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.best_cost.contains_key(state)
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best_cost.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_cost.is_empty()
    }
}
