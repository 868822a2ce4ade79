//! Audio: one sound effect and two looping music tracks
//!
//! `AudioManager` turns game events into backend calls and owns the volume
//! math. Backends only load and play; the browser one lives in
//! `platform::web`, `HeadlessAudio` records calls for the native run and tests.

use crate::config::AudioConfig;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Ambient music while playing
    Background,
    /// Plays once a side has won
    Victory,
}

/// Something that can actually make noise
pub trait AudioBackend {
    /// Fire-and-forget one-shot
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
    /// Start a track from the beginning
    fn play_track(&mut self, track: Track, volume: f32);
    fn stop_track(&mut self, track: Track);
    fn is_playing(&self, track: Track) -> bool;
    fn set_track_volume(&mut self, track: Track, volume: f32);
    /// Per-frame housekeeping for streamed tracks
    fn update_streams(&mut self);
    /// Retry tracks the platform refused to start. Call from a user gesture.
    fn resume(&mut self);
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    config: AudioConfig,
    settings: Settings,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, config: AudioConfig, settings: Settings) -> Self {
        Self {
            backend,
            config,
            settings,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn track_volume(&self, track: Track) -> f32 {
        let base = match track {
            Track::Background => self.config.background_volume,
            Track::Victory => self.config.victory_volume,
        };
        base * self.settings.music_gain()
    }

    fn effect_volume(&self, effect: SoundEffect) -> f32 {
        let base = match effect {
            SoundEffect::PaddleHit => self.config.hit_volume,
        };
        base * self.settings.effect_gain()
    }

    /// Start the background track; call once at startup
    pub fn start(&mut self) {
        let volume = self.track_volume(Track::Background);
        self.backend.play_track(Track::Background, volume);
    }

    /// Call once per frame
    pub fn update(&mut self) {
        self.backend.update_streams();
    }

    /// Resume audio context (required after user interaction on web)
    pub fn resume(&mut self) {
        self.backend.resume();
    }

    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.effect_volume(effect);
        if volume <= 0.0 {
            return;
        }
        self.backend.play_effect(effect, volume);
    }

    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PaddleHit(_) => self.play(SoundEffect::PaddleHit),
            GameEvent::Victory(_) => {
                let volume = self.track_volume(Track::Victory);
                self.backend.play_track(Track::Victory, volume);
                self.backend.stop_track(Track::Background);
            }
            GameEvent::Restarted => {
                if self.backend.is_playing(Track::Background) {
                    self.backend.stop_track(Track::Background);
                }
                self.backend.stop_track(Track::Victory);
                let volume = self.track_volume(Track::Background);
                self.backend.play_track(Track::Background, volume);
            }
            GameEvent::Goal { .. } | GameEvent::WallBounce => {}
        }
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.settings.set_master_volume(vol);
        self.apply_track_volumes();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        self.apply_track_volumes();
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.settings.muted);
        log::info!("Audio {}", if self.settings.muted { "muted" } else { "unmuted" });
    }

    fn apply_track_volumes(&mut self) {
        for track in [Track::Background, Track::Victory] {
            let volume = self.track_volume(track);
            self.backend.set_track_volume(track, volume);
        }
    }
}

/// A call made on `HeadlessAudio`
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Effect(SoundEffect, f32),
    Play(Track, f32),
    Stop(Track),
    Volume(Track, f32),
}

/// Backend with no output device: tracks what would be playing
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    pub calls: Vec<AudioCall>,
    pub background_playing: bool,
    pub victory_playing: bool,
    pub stream_updates: u64,
    pub resumes: u32,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn playing_mut(&mut self, track: Track) -> &mut bool {
        match track {
            Track::Background => &mut self.background_playing,
            Track::Victory => &mut self.victory_playing,
        }
    }

    pub fn effect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, AudioCall::Effect(..)))
            .count()
    }
}

impl AudioBackend for HeadlessAudio {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Effect {:?} at {:.2}", effect, volume);
        self.calls.push(AudioCall::Effect(effect, volume));
    }

    fn play_track(&mut self, track: Track, volume: f32) {
        log::debug!("Track {:?} playing at {:.2}", track, volume);
        *self.playing_mut(track) = true;
        self.calls.push(AudioCall::Play(track, volume));
    }

    fn stop_track(&mut self, track: Track) {
        *self.playing_mut(track) = false;
        self.calls.push(AudioCall::Stop(track));
    }

    fn is_playing(&self, track: Track) -> bool {
        match track {
            Track::Background => self.background_playing,
            Track::Victory => self.victory_playing,
        }
    }

    fn set_track_volume(&mut self, track: Track, volume: f32) {
        self.calls.push(AudioCall::Volume(track, volume));
    }

    fn update_streams(&mut self) {
        self.stream_updates += 1;
    }

    fn resume(&mut self) {
        self.resumes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    fn manager() -> AudioManager<HeadlessAudio> {
        AudioManager::new(HeadlessAudio::new(), AudioConfig::default(), Settings::default())
    }

    #[test]
    fn test_start_plays_background_at_fixed_volume() {
        let mut audio = manager();
        audio.start();
        assert_eq!(audio.backend().calls, vec![AudioCall::Play(Track::Background, 0.05)]);
        assert!(audio.backend().background_playing);
    }

    #[test]
    fn test_paddle_hit_plays_effect() {
        let mut audio = manager();
        audio.handle_event(&GameEvent::PaddleHit(Side::Left));
        audio.handle_event(&GameEvent::WallBounce);
        audio.handle_event(&GameEvent::Goal { scorer: Side::Left });
        assert_eq!(
            audio.backend().calls,
            vec![AudioCall::Effect(SoundEffect::PaddleHit, 0.1)]
        );
    }

    #[test]
    fn test_victory_switches_tracks() {
        let mut audio = manager();
        audio.start();
        audio.handle_event(&GameEvent::Victory(Side::Right));
        assert!(audio.backend().victory_playing);
        assert!(!audio.backend().background_playing);
        assert!(audio.backend().calls.contains(&AudioCall::Play(Track::Victory, 0.3)));
    }

    #[test]
    fn test_restart_restores_background() {
        let mut audio = manager();
        audio.start();
        audio.handle_event(&GameEvent::Victory(Side::Left));
        audio.handle_event(&GameEvent::Restarted);
        assert!(audio.backend().background_playing);
        assert!(!audio.backend().victory_playing);

        // Background was stopped by the victory, so only victory is stopped here
        let tail = &audio.backend().calls[3..];
        assert_eq!(
            tail,
            &[
                AudioCall::Stop(Track::Victory),
                AudioCall::Play(Track::Background, 0.05)
            ]
        );
    }

    #[test]
    fn test_restart_while_background_playing_restarts_it() {
        let mut audio = manager();
        audio.start();
        audio.handle_event(&GameEvent::Restarted);
        assert_eq!(
            &audio.backend().calls[1..],
            &[
                AudioCall::Stop(Track::Background),
                AudioCall::Stop(Track::Victory),
                AudioCall::Play(Track::Background, 0.05)
            ]
        );
    }

    #[test]
    fn test_muted_skips_effects_and_silences_tracks() {
        let mut audio = manager();
        audio.set_muted(true);
        audio.handle_event(&GameEvent::PaddleHit(Side::Right));
        assert_eq!(audio.backend().effect_count(), 0);
        assert!(audio.backend().calls.contains(&AudioCall::Volume(Track::Background, 0.0)));
    }

    #[test]
    fn test_master_volume_scales() {
        let mut audio = manager();
        audio.set_master_volume(0.5);
        audio.handle_event(&GameEvent::PaddleHit(Side::Right));
        assert!(audio.backend().calls.contains(&AudioCall::Effect(SoundEffect::PaddleHit, 0.05)));
    }

    #[test]
    fn test_resume_reaches_backend_without_replaying() {
        let mut audio = manager();
        audio.start();
        audio.resume();
        audio.resume();
        assert_eq!(audio.backend().resumes, 2);
        // Retrying is the backend's job; no new play calls are issued
        assert_eq!(audio.backend().calls, vec![AudioCall::Play(Track::Background, 0.05)]);
    }
}
