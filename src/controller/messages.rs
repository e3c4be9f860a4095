use super::transport::TransportEvent;
use crate::error::SearchError;
use crate::game::Move;

/// Everything that reaches the controller from another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A search worker finished. `generation` identifies the game it was
    /// dispatched for.
    AiMove {
        generation: u64,
        result: Result<Move, SearchError>,
    },
    Transport(TransportEvent),
}
