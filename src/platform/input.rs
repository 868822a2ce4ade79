//! Keyboard input
//!
//! Key codes follow `KeyboardEvent.code` so bindings survive keyboard layouts.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Restart,
}

/// Map a key code to a game command
pub fn command_for(code: &str) -> Option<Command> {
    match code {
        "KeyW" => Some(Command::LeftUp),
        "KeyS" => Some(Command::LeftDown),
        "ArrowUp" => Some(Command::RightUp),
        "ArrowDown" => Some(Command::RightDown),
        "Space" => Some(Command::Restart),
        _ => None,
    }
}

/// Held keys plus presses since the last frame
#[derive(Debug, Default)]
pub struct Keyboard {
    held: HashSet<Command>,
    pressed: HashSet<Command>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is bound (caller may suppress its default action)
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(command) = command_for(code) else {
            return false;
        };
        // Auto-repeat of a held key is not a new press
        if self.held.insert(command) {
            self.pressed.insert(command);
        }
        true
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(command) = command_for(code) else {
            return false;
        };
        self.held.remove(&command);
        true
    }

    pub fn is_held(&self, command: Command) -> bool {
        self.held.contains(&command)
    }

    pub fn was_pressed(&self, command: Command) -> bool {
        self.pressed.contains(&command)
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_up: self.is_held(Command::LeftUp),
            left_down: self.is_held(Command::LeftDown),
            right_up: self.is_held(Command::RightUp),
            right_down: self.is_held(Command::RightDown),
            restart: self.was_pressed(Command::Restart),
        }
    }

    /// Clear one-shot presses after the frame consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}
