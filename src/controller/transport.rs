use std::sync::mpsc;

use super::messages::ControllerEvent;
use crate::game::Player;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("no transport connection")]
    NotConnected,

    #[error("controller is no longer receiving events")]
    Closed,

    #[error("transport I/O failure: {0}")]
    Io(String),
}

/// Inbound events a transport pushes to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The match assigned this client its color.
    OpponentColorAssigned(Player),
    /// The opponent dropped a chip into `column`.
    OpponentMove { column: usize },
    /// Number of clients connected to the match.
    OpponentCountChanged(usize),
}

/// Outbound side of a remote-opponent connection.
///
/// The controller owns its transport and drives it from the owning thread;
/// inbound traffic goes through [`TransportEvents`] instead.
pub trait Transport {
    fn connect(&mut self) -> Result<(), TransportError>;

    fn disconnect(&mut self);

    fn send_move(&mut self, column: usize) -> Result<(), TransportError>;

    /// Leave the current match after it ended.
    fn exit_game(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Ask to be matched again on the existing connection.
    fn rejoin(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Cloneable handle a transport uses to deliver events to the controller.
/// Events are queued and applied when the controller processes them.
#[derive(Debug, Clone)]
pub struct TransportEvents {
    tx: mpsc::Sender<ControllerEvent>,
}

impl TransportEvents {
    pub(crate) fn new(tx: mpsc::Sender<ControllerEvent>) -> Self {
        TransportEvents { tx }
    }

    pub fn send(&self, event: TransportEvent) -> Result<(), TransportError> {
        self.tx
            .send(ControllerEvent::Transport(event))
            .map_err(|_| TransportError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_queued_in_order() {
        let (tx, rx) = mpsc::channel();
        let events = TransportEvents::new(tx);
        events.send(TransportEvent::OpponentCountChanged(2)).unwrap();
        events
            .send(TransportEvent::OpponentMove { column: 4 })
            .unwrap();

        let received: Vec<ControllerEvent> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                ControllerEvent::Transport(TransportEvent::OpponentCountChanged(2)),
                ControllerEvent::Transport(TransportEvent::OpponentMove { column: 4 }),
            ]
        );
    }

    #[test]
    fn send_fails_once_controller_is_gone() {
        let (tx, rx) = mpsc::channel();
        let events = TransportEvents::new(tx);
        drop(rx);
        assert_eq!(
            events.send(TransportEvent::OpponentCountChanged(1)),
            Err(TransportError::Closed)
        );
    }
}
