use crate::game::{GameOutcome, Mark, Player};

/// Receives everything a front end needs to draw the game.
///
/// The controller calls these on its owning thread, in the order the
/// changes happen. Only the first three are required; the rest are hooks
/// for online play and AI feedback.
pub trait RenderSink {
    fn on_chip_placed(&mut self, column: usize, row: usize, mark: Mark);

    fn on_turn_changed(&mut self, player: Player);

    fn on_game_over(&mut self, outcome: GameOutcome);

    /// The computer started thinking for `player`.
    fn on_ai_thinking(&mut self, _player: Player) {}

    /// Online: connected, but no opponent has joined yet.
    fn on_waiting_for_opponent(&mut self) {}

    /// Online: this client plays `player` in the match that just started.
    fn on_color_assigned(&mut self, _player: Player) {}

    /// Online: the opponent disconnected mid-game.
    fn on_opponent_left(&mut self) {}
}
