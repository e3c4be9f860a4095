use crate::error::SearchError;
use crate::game::{GameState, Move};

use super::negamax::Negamax;

/// Anything that can pick a move for the player to move.
///
/// Agents are shared with the search worker thread, so selection takes
/// `&self` and implementations must be `Send + Sync`.
pub trait Agent: Send + Sync {
    /// Select a move for `state.current_player()`.
    fn select_move(&self, state: &GameState) -> Result<Move, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// The computer opponent: a fixed-depth negamax search.
#[derive(Debug, Clone, Default)]
pub struct NegamaxAgent {
    search: Negamax,
}

impl NegamaxAgent {
    pub fn new(depth: u32) -> Self {
        NegamaxAgent {
            search: Negamax::new(depth),
        }
    }

    pub fn depth(&self) -> u32 {
        self.search.max_depth()
    }
}

impl Agent for NegamaxAgent {
    fn select_move(&self, state: &GameState) -> Result<Move, SearchError> {
        self.search.best_move(state)
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}
