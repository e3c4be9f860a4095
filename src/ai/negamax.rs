use tracing::{debug, instrument};

use super::model::GameModel;
use crate::error::SearchError;

/// Look-ahead used by the computer opponent unless configured otherwise.
pub const DEFAULT_DEPTH: u32 = 7;

const INFINITY: i32 = i32::MAX;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<M> {
    pub best: M,
    /// Value of `best` from the root mover's point of view.
    pub value: i32,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Depth-bounded negamax with alpha-beta pruning.
///
/// Moves are tried in `legal_moves` order and the first move reaching the
/// best value wins ties, so results are fully deterministic. Pruning only
/// skips children that cannot strictly beat the best value found so far,
/// which leaves the chosen move identical to a plain minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negamax {
    max_depth: u32,
}

impl Negamax {
    pub fn new(max_depth: u32) -> Self {
        Negamax { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Best move for the player to move in `state`. The state itself is
    /// never modified.
    pub fn best_move<S: GameModel>(&self, state: &S) -> Result<S::Move, SearchError> {
        self.search(state).map(|report| report.best)
    }

    #[instrument(level = "debug", skip_all, fields(depth = self.max_depth))]
    pub fn search<S: GameModel>(&self, state: &S) -> Result<SearchReport<S::Move>, SearchError> {
        if self.max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if state.is_terminal() {
            return Err(SearchError::Precondition);
        }

        let mut nodes = 1;
        let mut alpha = -INFINITY;
        let mut best: Option<(S::Move, i32)> = None;

        for mv in state.legal_moves() {
            let mut child = state.clone();
            child.apply_move(mv)?;
            child.advance_turn();

            let value = -self.negamax(&child, self.max_depth - 1, -INFINITY, -alpha, &mut nodes)?;
            let improves = match best {
                Some((_, best_value)) => value > best_value,
                None => true,
            };
            if improves {
                best = Some((mv, value));
            }
            alpha = alpha.max(value);
        }

        let (best, value) = best.ok_or(SearchError::Precondition)?;
        debug!(value, nodes, "search finished");
        Ok(SearchReport { best, value, nodes })
    }

    /// Value of `state` for its active player.
    fn negamax<S: GameModel>(
        &self,
        state: &S,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        *nodes += 1;

        if depth == 0 || state.is_terminal() {
            return Ok(state.score(state.active_player()));
        }

        let mut best = -INFINITY;
        for mv in state.legal_moves() {
            let mut child = state.clone();
            child.apply_move(mv)?;
            child.advance_turn();

            let value = -self.negamax(&child, depth - 1, -beta, -alpha, nodes)?;
            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}

impl Default for Negamax {
    fn default() -> Self {
        Negamax::new(DEFAULT_DEPTH)
    }
}
