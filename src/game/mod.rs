//! Core Connect Four game logic: grid storage, players, win detection and
//! the mutable game state the controller and search operate on.

mod board;
mod moves;
mod player;
mod state;
mod win;

pub use board::{Grid, Mark, CONNECT, HEIGHT, WIDTH};
pub use moves::Move;
pub use player::{ParsePlayerError, Player};
pub use state::{GameOutcome, GameState, WIN_SCORE};
pub use win::is_win;
