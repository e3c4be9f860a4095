use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use super::messages::ControllerEvent;
use super::mode::{GameMode, OpponentLeftPolicy, TurnState};
use super::sink::RenderSink;
use super::transport::{Transport, TransportError, TransportEvent, TransportEvents};
use crate::ai::{Agent, NegamaxAgent};
use crate::config::AppConfig;
use crate::error::{GameError, SearchError, TurnError};
use crate::game::{GameState, Move, Player};

/// Default pause between dispatching a search and playing its move.
pub const DEFAULT_MIN_AI_LATENCY: Duration = Duration::from_secs(1);

/// Owns the live game and decides whose turn it is.
///
/// All mutation happens on the thread that owns the controller. Searches run
/// on worker threads over a snapshot of the game; their results, like
/// transport events, are queued on a channel and only applied from
/// [`process_events`](Self::process_events) or
/// [`wait_for_event`](Self::wait_for_event).
pub struct TurnController<R: RenderSink> {
    mode: GameMode,
    state: TurnState,
    game: GameState,
    starting_player: Player,
    ai_player: Player,
    local_player: Option<Player>,
    on_opponent_left: OpponentLeftPolicy,
    agent: Arc<dyn Agent>,
    min_ai_latency: Duration,
    transport: Option<Box<dyn Transport>>,
    sink: R,
    events_tx: mpsc::Sender<ControllerEvent>,
    events_rx: mpsc::Receiver<ControllerEvent>,
    generation: u64,
}

impl<R: RenderSink> TurnController<R> {
    pub fn new(mode: GameMode, sink: R) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        TurnController {
            mode,
            state: TurnState::GameOver,
            game: GameState::initial(),
            starting_player: Player::Red,
            ai_player: Player::Black,
            local_player: None,
            on_opponent_left: OpponentLeftPolicy::default(),
            agent: Arc::new(NegamaxAgent::default()),
            min_ai_latency: DEFAULT_MIN_AI_LATENCY,
            transport: None,
            sink,
            events_tx,
            events_rx,
            generation: 0,
        }
    }

    pub fn from_config(config: &AppConfig, sink: R) -> Self {
        Self::new(config.game.mode, sink)
            .with_agent(Arc::new(NegamaxAgent::new(config.search.depth)))
            .with_min_ai_latency(Duration::from_millis(config.search.min_latency_ms))
            .with_starting_player(config.game.starting_player)
            .with_ai_player(config.game.ai_player)
            .with_opponent_left_policy(config.online.on_opponent_left)
    }

    pub fn with_agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.agent = agent;
        self
    }

    /// Zero disables the pause.
    pub fn with_min_ai_latency(mut self, latency: Duration) -> Self {
        self.min_ai_latency = latency;
        self
    }

    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self.game = GameState::new(player);
        self
    }

    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    pub fn with_opponent_left_policy(mut self, policy: OpponentLeftPolicy) -> Self {
        self.on_opponent_left = policy;
        self
    }

    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Handle for the transport to push inbound events.
    pub fn transport_events(&self) -> TransportEvents {
        TransportEvents::new(self.events_tx.clone())
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Online: the color this client was assigned, once known.
    pub fn local_player(&self) -> Option<Player> {
        self.local_player
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Begin the first game. Online mode connects the transport and waits
    /// for a color assignment.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn start(&mut self) -> Result<(), TurnError> {
        if self.mode == GameMode::Online {
            self.transport_mut()?.connect()?;
        }
        self.new_game()
    }

    /// Throw the current game away and start over. Search results still in
    /// flight for the old game are discarded when they arrive.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) -> Result<(), TurnError> {
        if self.mode == GameMode::Online {
            self.transport_mut()?.rejoin()?;
        }
        self.new_game()
    }

    /// Play a move chosen on this device. Returns the row the chip landed
    /// in. Only accepted in `WaitingForLocalMove`.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_local_move(&mut self, column: usize) -> Result<usize, TurnError> {
        if self.state != TurnState::WaitingForLocalMove {
            return Err(TurnError::NotAccepting { state: self.state });
        }

        let row = self.place(column)?;
        let sent = if self.mode == GameMode::Online {
            self.transport_mut().and_then(|t| t.send_move(column))
        } else {
            Ok(())
        };
        self.finish_move()?;
        sent?;
        Ok(row)
    }

    /// Apply every queued event without blocking. Returns how many were
    /// handled; stops at the first error and leaves the rest queued.
    pub fn process_events(&mut self) -> Result<usize, TurnError> {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Block for at most `timeout` until one event arrives and apply it.
    /// Returns `false` on timeout.
    pub fn wait_for_event(&mut self, timeout: Duration) -> Result<bool, TurnError> {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event)?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn transport_mut(&mut self) -> Result<&mut Box<dyn Transport>, TransportError> {
        self.transport.as_mut().ok_or(TransportError::NotConnected)
    }

    fn new_game(&mut self) -> Result<(), TurnError> {
        self.generation += 1;
        self.game = GameState::new(self.starting_player);
        info!(generation = self.generation, "new game");

        if self.mode == GameMode::Online {
            self.local_player = None;
            self.state = TurnState::AwaitingOpponent;
            return Ok(());
        }

        self.sink.on_turn_changed(self.game.current_player());
        self.enter_turn()
    }

    /// Pick the waiting state for the player now to move.
    fn enter_turn(&mut self) -> Result<(), TurnError> {
        let to_move = self.game.current_player();
        self.state = match self.mode {
            GameMode::Local => TurnState::WaitingForLocalMove,
            GameMode::Ai if to_move == self.ai_player => TurnState::WaitingForAIMove,
            GameMode::Ai => TurnState::WaitingForLocalMove,
            GameMode::Online if self.local_player == Some(to_move) => {
                TurnState::WaitingForLocalMove
            }
            GameMode::Online => TurnState::WaitingForRemoteMove,
        };
        debug!(state = ?self.state, player = %to_move, "turn entered");

        if self.state == TurnState::WaitingForAIMove {
            self.dispatch_search()?;
        }
        Ok(())
    }

    fn dispatch_search(&mut self) -> Result<(), TurnError> {
        let snapshot = self.game.clone();
        let agent = Arc::clone(&self.agent);
        let tx = self.events_tx.clone();
        let generation = self.generation;
        let floor = self.min_ai_latency;

        self.sink.on_ai_thinking(snapshot.current_player());
        debug!(generation, agent = agent.name(), "dispatching search");

        thread::Builder::new()
            .name("search-worker".into())
            .spawn(move || {
                let started = Instant::now();
                let result = agent.select_move(&snapshot);
                let elapsed = started.elapsed();
                debug!(?elapsed, ?result, "search worker finished");

                if let Some(remaining) = floor.checked_sub(elapsed) {
                    thread::sleep(remaining);
                }
                // A dropped controller has nobody left to play the move.
                let _ = tx.send(ControllerEvent::AiMove { generation, result });
            })
            .map_err(TurnError::Spawn)?;
        Ok(())
    }

    /// Drop the current player's chip and notify the sink.
    fn place(&mut self, column: usize) -> Result<usize, GameError> {
        let mark = self.game.current_player().mark();
        let row = self.game.apply_move(Move::new(column))?;
        self.sink.on_chip_placed(column, row, mark);
        Ok(row)
    }

    /// End the game or hand the turn over after a chip was placed.
    fn finish_move(&mut self) -> Result<(), TurnError> {
        if let Some(outcome) = self.game.outcome() {
            info!(?outcome, "game over");
            self.state = TurnState::GameOver;
            self.sink.on_game_over(outcome);
            if self.mode == GameMode::Online {
                self.transport_mut()?.exit_game()?;
            }
            return Ok(());
        }

        self.game.advance_turn();
        self.sink.on_turn_changed(self.game.current_player());
        self.enter_turn()
    }

    fn handle_event(&mut self, event: ControllerEvent) -> Result<(), TurnError> {
        match event {
            ControllerEvent::AiMove { generation, result } => {
                self.apply_ai_result(generation, result)
            }
            ControllerEvent::Transport(event) => self.handle_transport_event(event),
        }
    }

    fn apply_ai_result(
        &mut self,
        generation: u64,
        result: Result<Move, SearchError>,
    ) -> Result<(), TurnError> {
        if generation != self.generation || self.state != TurnState::WaitingForAIMove {
            debug!(generation, current = self.generation, "discarding stale search result");
            return Ok(());
        }

        let mv = result?;
        if !self.game.grid().can_play(mv.column) {
            return Err(GameError::ColumnFull { column: mv.column }.into());
        }
        info!(column = mv.column, "computer plays");
        self.place(mv.column)?;
        self.finish_move()
    }

    #[instrument(skip(self), fields(state = ?self.state))]
    fn handle_transport_event(&mut self, event: TransportEvent) -> Result<(), TurnError> {
        if self.mode != GameMode::Online {
            warn!(?event, "transport event outside online mode");
            return Ok(());
        }

        match event {
            TransportEvent::OpponentCountChanged(count) => self.opponent_count_changed(count),
            TransportEvent::OpponentColorAssigned(player) => self.color_assigned(player),
            TransportEvent::OpponentMove { column } => self.remote_move(column),
        }
    }

    fn opponent_count_changed(&mut self, count: usize) -> Result<(), TurnError> {
        if count >= 2 {
            return Ok(());
        }

        match self.state {
            TurnState::AwaitingOpponent => {
                self.game = GameState::new(self.starting_player);
                self.sink.on_waiting_for_opponent();
            }
            TurnState::WaitingForLocalMove | TurnState::WaitingForRemoteMove => {
                match self.on_opponent_left {
                    OpponentLeftPolicy::Abort => {
                        info!("opponent left, continuing locally");
                        self.mode = GameMode::Local;
                        self.local_player = None;
                        self.state = TurnState::WaitingForLocalMove;
                        self.sink.on_opponent_left();
                    }
                    OpponentLeftPolicy::Ignore => debug!("opponent left, ignoring"),
                }
            }
            TurnState::WaitingForAIMove | TurnState::GameOver => {}
        }
        Ok(())
    }

    fn color_assigned(&mut self, player: Player) -> Result<(), TurnError> {
        if self.state != TurnState::AwaitingOpponent {
            warn!(%player, "color assignment while a game is running");
            return Ok(());
        }

        self.local_player = Some(player);
        self.game = GameState::new(self.starting_player);
        self.sink.on_color_assigned(player);
        self.sink.on_turn_changed(self.game.current_player());
        self.enter_turn()
    }

    fn remote_move(&mut self, column: usize) -> Result<(), TurnError> {
        if self.state != TurnState::WaitingForRemoteMove {
            warn!(column, "remote move out of turn dropped");
            return Ok(());
        }
        if !self.game.grid().can_play(column) {
            warn!(column, "unplayable remote move dropped");
            return Ok(());
        }

        self.place(column)?;
        self.finish_move()
    }
}

impl<R: RenderSink> Drop for TurnController<R> {
    fn drop(&mut self) {
        if let Some(transport) = self.transport.as_mut() {
            transport.disconnect();
        }
    }
}
