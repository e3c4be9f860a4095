//! Turn sequencing: the controller that owns the live game, the render sink
//! it reports to, and the transport interface for a remote opponent.

mod messages;
mod mode;
mod sink;
mod transport;
mod turn;

pub use messages::ControllerEvent;
pub use mode::{GameMode, OpponentLeftPolicy, TurnState};
pub use sink::RenderSink;
pub use transport::{Transport, TransportError, TransportEvent, TransportEvents};
pub use turn::{TurnController, DEFAULT_MIN_AI_LATENCY};
