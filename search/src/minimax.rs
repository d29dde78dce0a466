//! Exhaustive two-player minimax over a mutable game state.
//!
//! Moves are applied in place and undone through [`MoveGuard`], whose `Drop`
//! restores the state on every exit path, unwinding included. The caller's
//! game is therefore bit-for-bit unchanged when [`best_move`] returns.
//!
//! Leaf scores are signed from the maximizing player's point of view and
//! weighted by `remaining_moves + 1`, so a faster win scores higher and a
//! slower loss scores higher than a faster one. A draw scores zero.

use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

/// A two-player, perfect-information game with reversible moves.
///
/// # Contract
///
/// - `apply` followed by `undo` of the same move restores the exact state.
/// - `winner` is `Some` iff the most recent move completed a win.
/// - `legal_moves` is deterministic. It is consulted only while the game
///   is not terminal.
/// - `remaining_moves` counts the moves a full game could still take, and
///   must stay correct once a winner is recorded.
pub trait AdversarialGame {
    type Move: Copy + Eq;
    type Player: Copy + Eq;

    /// Moves available to whoever is on turn, in a fixed order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` for `player`, recording a winner if it ends the game.
    fn apply(&mut self, mv: Self::Move, player: Self::Player);

    /// Take back `mv`, clearing any winner it recorded.
    fn undo(&mut self, mv: Self::Move);

    fn winner(&self) -> Option<Self::Player>;

    /// No moves remain. Without a winner this is a draw.
    fn is_full(&self) -> bool;

    /// The player who moves after `player`.
    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Moves left before the game is full; scales leaf scores.
    fn remaining_moves(&self) -> usize;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

/// Applies a move on creation and undoes it on drop.
pub struct MoveGuard<'a, G: AdversarialGame> {
    game: &'a mut G,
    mv: G::Move,
}

impl<'a, G: AdversarialGame> MoveGuard<'a, G> {
    pub fn new(game: &'a mut G, mv: G::Move, player: G::Player) -> Self {
        game.apply(mv, player);
        Self { game, mv }
    }
}

impl<G: AdversarialGame> Deref for MoveGuard<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<G: AdversarialGame> DerefMut for MoveGuard<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.game
    }
}

impl<G: AdversarialGame> Drop for MoveGuard<'_, G> {
    fn drop(&mut self) {
        self.game.undo(self.mv);
    }
}

/// Outcome of a minimax evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxResult<M> {
    /// A move achieving `score`; `None` if the position was already terminal.
    pub best_move: Option<M>,
    /// Minimax value from the maximizing player's point of view.
    pub score: i64,
    /// Positions visited, root included.
    pub nodes_visited: u64,
    pub elapsed: Duration,
}

/// Pick the best move for `to_move`, scoring for `maximizing`.
///
/// Among equally scored moves the first in `legal_moves` order wins.
pub fn best_move<G: AdversarialGame>(
    game: &mut G,
    to_move: G::Player,
    maximizing: G::Player,
) -> MinimaxResult<G::Move> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("minimax");
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let started = Instant::now();
    let mut nodes_visited = 0;
    let (best_move, score) = evaluate(game, to_move, maximizing, &mut nodes_visited);
    let elapsed = started.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(score, nodes_visited, "minimax finished");

    MinimaxResult {
        best_move,
        score,
        nodes_visited,
        elapsed,
    }
}

/// Score of a finished game, or `None` if play continues.
pub fn leaf_score<G: AdversarialGame>(game: &G, maximizing: G::Player) -> Option<i64> {
    let weight = i64::try_from(game.remaining_moves())
        .unwrap_or(i64::MAX - 1)
        .saturating_add(1);
    match game.winner() {
        Some(winner) if winner == maximizing => Some(weight),
        Some(_) => Some(-weight),
        None if game.is_full() => Some(0),
        None => None,
    }
}

fn evaluate<G: AdversarialGame>(
    game: &mut G,
    to_move: G::Player,
    maximizing: G::Player,
    nodes_visited: &mut u64,
) -> (Option<G::Move>, i64) {
    *nodes_visited += 1;
    if let Some(score) = leaf_score(game, maximizing) {
        return (None, score);
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        return (None, 0);
    }

    let maximizing_turn = to_move == maximizing;
    let next = game.opponent(to_move);
    let mut best: Option<(G::Move, i64)> = None;
    for mv in moves {
        let score = {
            let mut child = MoveGuard::new(game, mv, to_move);
            evaluate(&mut *child, next, maximizing, nodes_visited).1
        };
        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing_turn => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, 0),
    }
}
