//! Depth-first constraint backtracking over sequentially ordered variables.
//!
//! Variables are assigned in index order `0..variable_count`, each trying its
//! domain values in the order [`ConstraintProblem::domain`] returns them. A
//! value is committed only if [`ConstraintProblem::consistent`] accepts it
//! against the already-assigned prefix. Every commit is paired with an
//! explicit unassign before the next candidate is tried, so no partial
//! assignment survives into a sibling branch.

use std::time::{Duration, Instant};

/// A finite-domain constraint problem with a fixed variable order.
pub trait ConstraintProblem {
    type Value: Clone;

    fn variable_count(&self) -> usize;

    /// Candidate values for `var`, in the order they are tried.
    fn domain(&self, var: usize) -> Vec<Self::Value>;

    /// Whether `value` for `var` agrees with every variable in `0..var`.
    ///
    /// Called only when exactly the prefix `0..var` is assigned.
    fn consistent(
        &self,
        assignment: &Assignment<Self::Value>,
        var: usize,
        value: &Self::Value,
    ) -> bool;
}

/// A partial assignment: one slot per variable, `None` while unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<V> {
    slots: Vec<Option<V>>,
}

impl<V: Clone> Assignment<V> {
    pub fn unassigned(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, var: usize) -> Option<&V> {
        self.slots.get(var).and_then(Option::as_ref)
    }

    pub fn assign(&mut self, var: usize, value: V) {
        self.slots[var] = Some(value);
    }

    pub fn unassign(&mut self, var: usize) {
        self.slots[var] = None;
    }

    /// Assigned `(var, value)` pairs in variable order.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, &V)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(var, slot)| slot.as_ref().map(|value| (var, value)))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The concrete values if every slot is assigned.
    pub fn to_complete(&self) -> Option<Vec<V>> {
        self.slots.iter().cloned().collect()
    }
}

/// First solution found, with counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackResult<V> {
    pub solution: Option<Vec<V>>,
    /// Recursive calls, the full-assignment base case included.
    pub nodes_visited: u64,
    /// Committed values withdrawn before the search was satisfied.
    pub backtracks: u64,
    pub elapsed: Duration,
}

/// Every solution (up to a limit), in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet<V> {
    pub solutions: Vec<Vec<V>>,
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub elapsed: Duration,
}

/// Find the first full assignment under the fixed variable and value order.
///
/// `None` means the problem has no solution; it is not an error.
pub fn solve<P: ConstraintProblem>(problem: &P) -> BacktrackResult<P::Value> {
    let set = run(problem, Some(1));
    BacktrackResult {
        solution: set.solutions.into_iter().next(),
        nodes_visited: set.nodes_visited,
        backtracks: set.backtracks,
        elapsed: set.elapsed,
    }
}

/// Collect full assignments in the same order [`solve`] would find them,
/// stopping after `limit` if one is given.
pub fn solve_all<P: ConstraintProblem>(problem: &P, limit: Option<usize>) -> SolutionSet<P::Value> {
    run(problem, limit)
}

fn run<P: ConstraintProblem>(problem: &P, limit: Option<usize>) -> SolutionSet<P::Value> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("backtrack", variables = problem.variable_count());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let started = Instant::now();
    let mut search = Backtracker {
        problem,
        assignment: Assignment::unassigned(problem.variable_count()),
        solutions: Vec::new(),
        limit,
        nodes_visited: 0,
        backtracks: 0,
    };
    if limit != Some(0) {
        search.extend(0);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        solutions = search.solutions.len(),
        nodes_visited = search.nodes_visited,
        backtracks = search.backtracks,
        "backtracking finished"
    );

    SolutionSet {
        solutions: search.solutions,
        nodes_visited: search.nodes_visited,
        backtracks: search.backtracks,
        elapsed: started.elapsed(),
    }
}

struct Backtracker<'a, P: ConstraintProblem> {
    problem: &'a P,
    assignment: Assignment<P::Value>,
    solutions: Vec<Vec<P::Value>>,
    limit: Option<usize>,
    nodes_visited: u64,
    backtracks: u64,
}

impl<P: ConstraintProblem> Backtracker<'_, P> {
    fn satisfied(&self) -> bool {
        self.limit.is_some_and(|limit| self.solutions.len() >= limit)
    }

    /// Extend the assignment from `var`. Returns `true` once enough
    /// solutions are collected.
    fn extend(&mut self, var: usize) -> bool {
        self.nodes_visited += 1;

        if var == self.assignment.len() {
            if let Some(solution) = self.assignment.to_complete() {
                self.solutions.push(solution);
            }
            return self.satisfied();
        }

        for value in self.problem.domain(var) {
            if !self.problem.consistent(&self.assignment, var, &value) {
                continue;
            }
            self.assignment.assign(var, value);
            let done = self.extend(var + 1);
            self.assignment.unassign(var);
            if done {
                return true;
            }
            self.backtracks += 1;
        }
        false
    }
}
