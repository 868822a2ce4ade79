//! Frame driver
//!
//! Owns the game state, serve randomness and audio, and runs one
//! update-then-render pass per frame for whichever frontend is calling.

use crate::audio::{AudioBackend, AudioManager};
use crate::config::{ConfigError, GameConfig};
use crate::renderer::{Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, ServeSource, TickInput, tick};

/// Game instance holding all state
pub struct Game<B: AudioBackend> {
    state: GameState,
    config: GameConfig,
    serve: Box<dyn ServeSource>,
    audio: AudioManager<B>,
}

impl<B: AudioBackend> Game<B> {
    /// Set up a fresh 0-0 match and start the background music. The config
    /// is validated first; the simulation assumes it fits on screen.
    pub fn new(
        config: GameConfig,
        mut serve: Box<dyn ServeSource>,
        backend: B,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, serve.as_mut());
        let mut audio = AudioManager::new(backend, config.audio.clone(), settings);
        audio.start();
        log::info!(
            "Match ready: {}x{} field, first past {} wins",
            config.screen_width,
            config.screen_height,
            config.win_score
        );
        Ok(Self {
            state,
            config,
            serve,
            audio,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn audio(&self) -> &AudioManager<B> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<B> {
        &mut self.audio
    }

    /// Advance one frame; `dt` is clamped to `[0, max_frame_dt]`
    pub fn update(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_dt)
        } else {
            0.0
        };

        self.audio.update();
        let events = tick(
            &mut self.state,
            input,
            dt,
            &self.config,
            self.serve.as_mut(),
        );
        for event in &events {
            if *event == GameEvent::Restarted {
                log::info!("Match restarted");
            }
            self.audio.handle_event(event);
        }
        events
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        draw_frame(canvas, &self.state, &self.config);
    }

    /// Update then render
    pub fn frame(
        &mut self,
        input: &TickInput,
        dt: f32,
        canvas: &mut dyn Canvas,
    ) -> Vec<GameEvent> {
        let events = self.update(input, dt);
        self.render(canvas);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HeadlessAudio;
    use crate::renderer::Recorder;
    use crate::sim::FixedServe;
    use glam::Vec2;

    fn game() -> Game<HeadlessAudio> {
        Game::new(
            GameConfig::default(),
            Box::new(FixedServe::right()),
            HeadlessAudio::new(),
            Settings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_starts_background_music() {
        let game = game();
        assert!(game.audio().backend().background_playing);
        assert_eq!(game.state().ball.pos, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut game = game();
        game.update(&TickInput::default(), 10.0);
        // At most max_frame_dt worth of travel
        assert!((game.state().ball.pos.x - 660.0).abs() < 1e-3);

        let before = game.state().ball.pos;
        game.update(&TickInput::default(), -1.0);
        assert_eq!(game.state().ball.pos, before);
        game.update(&TickInput::default(), f32::NAN);
        assert_eq!(game.state().ball.pos, before);
    }

    #[test]
    fn test_frame_updates_streams_and_draws() {
        let mut game = game();
        let mut recorder = Recorder::new();
        game.frame(&TickInput::default(), 1.0 / 60.0, &mut recorder);
        assert_eq!(game.audio().backend().stream_updates, 1);
        assert_eq!(recorder.rects().count(), 3);
    }

    #[test]
    fn test_paddle_hit_triggers_sound() {
        let mut game = game();
        game.state_mut().ball.pos = Vec2::new(1095.0, 400.0);
        let events = game.update(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(events.len(), 1);
        assert_eq!(game.audio().backend().effect_count(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            paddle_height: 900.0,
            ..Default::default()
        };
        let result = Game::new(
            config,
            Box::new(FixedServe::right()),
            HeadlessAudio::new(),
            Settings::default(),
        );
        assert!(matches!(result, Err(ConfigError::PaddleTooTall { .. })));
    }
}
