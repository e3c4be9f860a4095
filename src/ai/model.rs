use crate::error::GameError;
use crate::game::{GameState, Move, Player};

/// The capabilities the search needs from a two-player, zero-sum game.
///
/// Exploration works on clones, so `apply_move` and `advance_turn` only
/// ever touch a copy owned by the search.
pub trait GameModel: Clone {
    type Player: Copy + Eq;
    type Move: Copy;

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// Candidate moves in the order the search should try them.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move) -> Result<(), GameError>;

    fn advance_turn(&mut self);

    fn is_terminal(&self) -> bool;

    /// Evaluation of the position from `player`'s point of view.
    fn score(&self, player: Self::Player) -> i32;
}

impl GameModel for GameState {
    type Player = Player;
    type Move = Move;

    fn active_player(&self) -> Player {
        self.current_player()
    }

    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        GameState::apply_move(self, mv).map(|_row| ())
    }

    fn advance_turn(&mut self) {
        GameState::advance_turn(self)
    }

    fn is_terminal(&self) -> bool {
        GameState::is_terminal(self)
    }

    fn score(&self, player: Player) -> i32 {
        GameState::score(self, player)
    }
}
