use std::fmt;
use std::str::FromStr;

use super::board::Mark;

/// One of the two seats at the table. Red moves first unless configured
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// Get the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::Red => Mark::Red,
            Player::Black => Mark::Black,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Black => "Black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player color '{0}' (expected 'red' or 'black')")]
pub struct ParsePlayerError(String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    /// Accepts the color strings used on the wire, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Player::Red),
            "black" => Ok(Player::Black),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_marks_are_distinct_and_not_empty() {
        assert_eq!(Player::Red.mark(), Mark::Red);
        assert_eq!(Player::Black.mark(), Mark::Black);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Black.to_string(), "Black");
    }

    #[test]
    fn test_parse_color_string() {
        assert_eq!("red".parse::<Player>(), Ok(Player::Red));
        assert_eq!("BLACK".parse::<Player>(), Ok(Player::Black));
        assert_eq!(" Red ".parse::<Player>(), Ok(Player::Red));
        assert!("yellow".parse::<Player>().is_err());
    }
}
