//! Game configuration
//!
//! Every tuning value the simulation, renderer and audio read lives here.
//! Built once at startup and passed down by reference.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Audio volumes and asset paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub hit_volume: f32,
    pub background_volume: f32,
    pub victory_volume: f32,
    pub hit_sound: String,
    pub background_track: String,
    pub victory_track: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            hit_volume: HIT_VOLUME,
            background_volume: BACKGROUND_VOLUME,
            victory_volume: VICTORY_VOLUME,
            hit_sound: HIT_SOUND_PATH.to_string(),
            background_track: BACKGROUND_TRACK_PATH.to_string(),
            victory_track: VICTORY_TRACK_PATH.to_string(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Pixels per second
    pub ball_speed: f32,
    /// Side length of the square ball
    pub ball_size: f32,
    /// Pixels per second
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub win_score: u32,
    pub target_fps: u32,
    pub max_frame_dt: f32,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ball_speed: BALL_SPEED,
            ball_size: BALL_SIZE,
            paddle_speed: PADDLE_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            win_score: WIN_SCORE,
            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            audio: AudioConfig::default(),
        }
    }
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read
    Io(String),
    /// JSON could not be parsed into a config
    Parse(String),
    /// A dimension, speed or size that must be positive and finite is not
    NotPositive { field: &'static str, value: f32 },
    /// A volume outside 0.0 - 1.0
    VolumeOutOfRange { field: &'static str, value: f32 },
    /// Paddle does not fit vertically on screen
    PaddleTooTall { paddle_height: f32, screen_height: f32 },
    /// Ball does not fit inside the field
    BallTooLarge { ball_size: f32 },
    ZeroTargetFps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "cannot read config file: {msg}"),
            ConfigError::Parse(msg) => write!(f, "invalid config JSON: {msg}"),
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
            ConfigError::VolumeOutOfRange { field, value } => {
                write!(f, "{field} must be within 0.0..=1.0, got {value}")
            }
            ConfigError::PaddleTooTall {
                paddle_height,
                screen_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit in screen height {screen_height}"
            ),
            ConfigError::BallTooLarge { ball_size } => {
                write!(f, "ball size {ball_size} does not fit inside the field")
            }
            ConfigError::ZeroTargetFps => write!(f, "target_fps must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ball_speed", self.ball_speed),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let volumes = [
            ("audio.hit_volume", self.audio.hit_volume),
            ("audio.background_volume", self.audio.background_volume),
            ("audio.victory_volume", self.audio.victory_volume),
        ];
        for (field, value) in volumes {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::VolumeOutOfRange { field, value });
            }
        }

        if self.paddle_height > self.screen_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                screen_height: self.screen_height,
            });
        }
        if self.ball_size >= self.screen_width || self.ball_size >= self.screen_height {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroTargetFps);
        }
        Ok(())
    }

    /// Screen center, where the ball serves from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width * 0.5, self.screen_height * 0.5)
    }

    pub fn paddle_extent(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn paddle_half_height(&self) -> f32 {
        self.paddle_height * 0.5
    }

    pub fn left_paddle_x(&self) -> f32 {
        self.screen_width * LEFT_PADDLE_X
    }

    pub fn right_paddle_x(&self) -> f32 {
        self.screen_width * RIGHT_PADDLE_X
    }

    /// Clamp paddle Y so the whole paddle stays on screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half = self.paddle_half_height();
        y.clamp(half, self.screen_height - half)
    }

    /// Fixed frame time at the target frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 1200.0);
        assert_eq!(config.screen_height, 800.0);
        assert_eq!(config.ball_speed, 600.0);
        assert_eq!(config.paddle_speed, 400.0);
        assert_eq!(config.ball_size, 40.0);
        assert_eq!(config.paddle_extent(), Vec2::new(40.0, 80.0));
        assert_eq!(config.win_score, 5);
        assert_eq!(config.audio.hit_volume, 0.1);
        assert_eq!(config.audio.background_volume, 0.05);
        assert_eq!(config.audio.victory_volume, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paddle_positions() {
        let config = GameConfig::default();
        assert_eq!(config.left_paddle_x(), 60.0);
        assert_eq!(config.right_paddle_x(), 1140.0);
        assert_eq!(config.center(), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_paddle_y(-100.0), 40.0);
        assert_eq!(config.clamp_paddle_y(900.0), 760.0);
        assert_eq!(config.clamp_paddle_y(300.0), 300.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "win_score": 10, "audio": { "hit_volume": 0.5 } }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.win_score, 10);
        assert_eq!(config.audio.hit_volume, 0.5);
        assert_eq!(config.audio.victory_volume, 0.3);
        assert_eq!(config.screen_width, 1200.0);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = GameConfig::from_json(r#"{ "ball_speed": -1.0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotPositive {
                field: "ball_speed",
                value: -1.0
            }
        );

        let err = GameConfig::from_json(r#"{ "paddle_height": 900.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleTooTall { .. }));

        let err = GameConfig::from_json(r#"{ "ball_size": 800.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BallTooLarge { .. }));

        let err = GameConfig::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTargetFps);

        let err = GameConfig::from_json(r#"{ "audio": { "victory_volume": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::VolumeOutOfRange { .. }));
        assert!(err.to_string().contains("audio.victory_volume"));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("pong-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "win_score": 3 }"#).unwrap();
        let config = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().win_score, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/pong/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("config.json"));
    }
}
