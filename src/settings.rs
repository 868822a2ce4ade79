//! Player audio preferences
//!
//! Scales the fixed per-sound volumes from `AudioConfig`. Not persisted.

use serde::{Deserialize, Serialize};

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    /// Multiplier for sound effects
    pub fn effect_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Multiplier for music tracks
    pub fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gains_are_unity() {
        let settings = Settings::default();
        assert_eq!(settings.effect_gain(), 1.0);
        assert_eq!(settings.music_gain(), 1.0);
    }

    #[test]
    fn test_mute_zeroes_gains() {
        let mut settings = Settings::default();
        settings.toggle_mute();
        assert_eq!(settings.effect_gain(), 0.0);
        assert_eq!(settings.music_gain(), 0.0);
        settings.toggle_mute();
        assert_eq!(settings.music_gain(), 1.0);
    }

    #[test]
    fn test_volumes_multiply_and_clamp() {
        let mut settings = Settings::default();
        settings.set_master_volume(1.7);
        assert_eq!(settings.master_volume, 1.0);
        settings.set_master_volume(0.5);
        settings.music_volume = 0.5;
        assert_eq!(settings.music_gain(), 0.25);
        assert_eq!(settings.effect_gain(), 0.5);
    }
}
