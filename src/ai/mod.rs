//! Move selection: the game-model capability trait, the negamax search
//! built on it, and the `Agent` wrapper the turn controller drives.

mod agent;
mod model;
mod negamax;

pub use agent::{Agent, NegamaxAgent};
pub use model::GameModel;
pub use negamax::{Negamax, SearchReport, DEFAULT_DEPTH};
