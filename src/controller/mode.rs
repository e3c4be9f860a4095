use std::fmt;
use std::str::FromStr;

/// Who sits across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two people sharing one input.
    Local,
    /// A person against the negamax opponent.
    #[default]
    Ai,
    /// A person against a remote client reached through a transport.
    Online,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Local => "local",
            GameMode::Ai => "ai",
            GameMode::Online => "online",
        })
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(GameMode::Local),
            "ai" => Ok(GameMode::Ai),
            "online" => Ok(GameMode::Online),
            other => Err(format!(
                "unknown game mode '{other}' (expected 'local', 'ai' or 'online')"
            )),
        }
    }
}

/// What to do when the remote opponent disconnects mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentLeftPolicy {
    /// Keep the board and finish the game locally.
    #[default]
    Abort,
    /// Keep waiting on the transport.
    Ignore,
}

/// Turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Online only: connected but not yet assigned a color.
    AwaitingOpponent,
    WaitingForLocalMove,
    WaitingForAIMove,
    WaitingForRemoteMove,
    /// Also the state before the first game starts. Nothing is accepted
    /// until the next reset.
    GameOver,
}
