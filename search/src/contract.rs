//! Search world contract trait.

use std::hash::Hash;
use std::marker::PhantomData;

/// Trait for state spaces that support frontier search.
///
/// # Contract
///
/// - States are immutable values: `successors` returns new states and never
///   mutates its argument.
/// - Enumeration must be deterministic: the same state yields the same
///   `(action, next_state)` pairs in the same order. Frontier tie-breaking
///   depends on it.
/// - `step_cost` must be non-negative; the default is unit cost.
pub trait SearchWorld {
    /// A domain state. Used as a key in the explored set.
    type State: Clone + Eq + Hash;
    /// The label of a transition between states.
    type Action: Clone;

    /// Identifier used in statistics and run reports.
    fn world_id(&self) -> &str;

    /// Enumerate every legal `(action, next_state)` pair from `state`.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of taking `action` from `from` to `to`.
    fn step_cost(&self, _from: &Self::State, _action: &Self::Action, _to: &Self::State) -> u64 {
        1
    }
}

/// A [`SearchWorld`] assembled from a goal predicate and a successor closure.
///
/// Handy for hand-built graphs that do not warrant a dedicated type.
pub struct FnWorld<S, A, G, F> {
    world_id: String,
    is_goal: G,
    successors: F,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, G, F> FnWorld<S, A, G, F>
where
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<(A, S)>,
{
    #[must_use]
    pub fn new(world_id: impl Into<String>, is_goal: G, successors: F) -> Self {
        Self {
            world_id: world_id.into(),
            is_goal,
            successors,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, F> SearchWorld for FnWorld<S, A, G, F>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<(A, S)>,
{
    type State = S;
    type Action = A;

    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn successors(&self, state: &S) -> Vec<(A, S)> {
        (self.successors)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }
}
