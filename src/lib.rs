//! Pong - two paddles, one ball, first past five wins
//!
//! Core modules:
//! - `sim`: Pure simulation (geometry, serve randomness, game state, tick)
//! - `game`: Frame driver tying simulation, audio and rendering together
//! - `renderer`: Canvas abstraction, scene drawing and the WebGPU quad pipeline
//! - `audio`: Sound effects and music tracks behind a backend trait
//! - `platform`: Keyboard bindings and the browser frontend
//! - `config`: Tunable game configuration

pub mod audio;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{AudioConfig, ConfigError, GameConfig};
pub use game::Game;
pub use settings::Settings;

/// Default tuning constants
pub mod consts {
    /// Playing field size in pixels
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Ball crosses half the screen width per second
    pub const BALL_SPEED: f32 = SCREEN_WIDTH * 0.5;
    pub const BALL_SIZE: f32 = 40.0;

    /// Paddles travel half the screen height per second
    pub const PADDLE_SPEED: f32 = SCREEN_HEIGHT * 0.5;
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    /// Paddle x positions as a fraction of screen width
    pub const LEFT_PADDLE_X: f32 = 0.05;
    pub const RIGHT_PADDLE_X: f32 = 0.95;

    /// A side wins once its score goes past this
    pub const WIN_SCORE: u32 = 5;

    pub const TARGET_FPS: u32 = 60;
    /// Longest frame the loop will simulate in one step
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Serve angle range in degrees, applied to the horizontal unit vector
    pub const SERVE_ANGLE_MIN: f32 = -45.0;
    pub const SERVE_ANGLE_MAX: f32 = 260.0;

    pub const HIT_VOLUME: f32 = 0.1;
    pub const BACKGROUND_VOLUME: f32 = 0.05;
    pub const VICTORY_VOLUME: f32 = 0.3;

    pub const HIT_SOUND_PATH: &str = "assets/betterPongNoise.mp3";
    pub const BACKGROUND_TRACK_PATH: &str = "assets/SlightChanceOfZombies.mp3";
    pub const VICTORY_TRACK_PATH: &str = "assets/lethalCompany.mp3";
}
