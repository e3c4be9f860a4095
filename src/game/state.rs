use tracing::instrument;

use super::board::{Grid, WIDTH};
use super::moves::Move;
use super::player::Player;
use super::win::is_win;
use crate::error::GameError;

/// Score of a position won by the player asked about.
pub const WIN_SCORE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Grid plus the player whose turn it is.
///
/// `apply_move` never advances the turn on its own; callers pair it with
/// `advance_turn` once they have inspected the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    current_player: Player,
}

impl GameState {
    /// Create initial game state, Red to move.
    pub fn initial() -> Self {
        Self::new(Player::Red)
    }

    pub fn new(starting_player: Player) -> Self {
        GameState {
            grid: Grid::new(),
            current_player: starting_player,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One move per playable column, in ascending column order.
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..WIDTH)
            .filter(|&column| self.grid.can_play(column))
            .map(Move::new)
            .collect()
    }

    /// Place the current player's mark. Returns the row it landed in.
    #[instrument(level = "trace", skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, mv: Move) -> Result<usize, GameError> {
        self.grid.place(self.current_player.mark(), mv.column)
    }

    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn is_win(&self, player: Player) -> bool {
        is_win(&self.grid, player.mark())
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.is_win(self.current_player)
            || self.is_win(self.current_player.opponent())
            || self.grid.is_full()
    }

    /// Win/loss evaluation only: +1000 if `player` has a line, -1000 if the
    /// opponent does, 0 otherwise.
    pub fn score(&self, player: Player) -> i32 {
        if self.is_win(player) {
            WIN_SCORE
        } else if self.is_win(player.opponent()) {
            -WIN_SCORE
        } else {
            0
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        let mover = self.current_player;
        if self.is_win(mover) {
            Some(GameOutcome::Win(mover))
        } else if self.is_win(mover.opponent()) {
            Some(GameOutcome::Win(mover.opponent()))
        } else if self.grid.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
