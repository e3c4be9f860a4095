use std::path::Path;

use tracing::warn;

use crate::ai::DEFAULT_DEPTH;
use crate::controller::{GameMode, OpponentLeftPolicy};
use crate::error::ConfigError;
use crate::game::{Player, HEIGHT, WIDTH};

/// Longest accepted AI pacing delay.
const MAX_MIN_LATENCY_MS: u64 = 60_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
    pub online: OnlineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies the computer looks ahead.
    pub depth: u32,
    /// Minimum time between dispatching a search and playing its move.
    pub min_latency_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            min_latency_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub starting_player: Player,
    /// Seat taken by the computer in `ai` mode.
    pub ai_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::Ai,
            starting_player: Player::Red,
            ai_player: Player::Black,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OnlineConfig {
    pub on_opponent_left: OpponentLeftPolicy,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth as usize > WIDTH * HEIGHT {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {}",
                WIDTH * HEIGHT
            )));
        }
        if self.search.min_latency_ms > MAX_MIN_LATENCY_MS {
            return Err(ConfigError::Validation(format!(
                "search.min_latency_ms must be <= {MAX_MIN_LATENCY_MS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 7);
        assert_eq!(config.search.min_latency_ms, 1000);
        assert_eq!(config.game.ai_player, Player::Black);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 4);
        // Other fields should be defaults
        assert_eq!(config.search.min_latency_ms, 1000);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_enums_use_lowercase_names() {
        let toml_str = r#"
[game]
mode = "online"
starting_player = "black"
ai_player = "red"

[online]
on_opponent_left = "ignore"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.mode, GameMode::Online);
        assert_eq!(config.game.starting_player, Player::Black);
        assert_eq!(config.game.ai_player, Player::Red);
        assert_eq!(config.online.on_opponent_left, OpponentLeftPolicy::Ignore);
    }

    #[test]
    fn test_unknown_color_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nai_player = \"yellow\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_depth_beyond_board() {
        let mut config = AppConfig::default();
        config.search.depth = 43;
        assert!(config.validate().is_err());
        config.search.depth = 42;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_huge_latency() {
        let mut config = AppConfig::default();
        config.search.min_latency_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
min_latency_ms = 0

[game]
mode = "local"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.min_latency_ms, 0);
        assert_eq!(config.game.mode, GameMode::Local);
        // Others are defaults
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().expect("roundtripped config should be valid");
    }
}
