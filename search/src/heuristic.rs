//! Heuristic evaluators for informed search.

/// Estimates the remaining cost from a state to the nearest goal.
///
/// Estimates must be non-negative. For [`crate::policy::Strategy::AStar`] to
/// return a minimum-cost path the estimate must also be admissible: never
/// larger than the true remaining cost.
pub trait Heuristic<S: ?Sized> {
    fn estimate(&self, state: &S) -> u64;
}

/// Always estimates zero. Admissible for every world; turns A* into
/// uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S: ?Sized> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> u64 {
        0
    }
}

/// Adapts a closure into a [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct FnHeuristic<F>(pub F);

impl<S: ?Sized, F: Fn(&S) -> u64> Heuristic<S> for FnHeuristic<F> {
    fn estimate(&self, state: &S) -> u64 {
        (self.0)(state)
    }
}
