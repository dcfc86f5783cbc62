//! Input capability
//!
//! The simulation never polls devices. It asks an [`InputState`] which
//! logical keys are currently held.

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
    Start,
    Resume,
    Mute,
    Unmute,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Left,
        Key::Right,
        Key::Fire,
        Key::Start,
        Key::Resume,
        Key::Mute,
        Key::Unmute,
    ];
}

/// Query interface over the current keyboard state
pub trait InputState {
    /// Is this key held down this frame
    fn is_key_down(&self, key: Key) -> bool;

    /// Number of keys held down this frame
    fn key_count(&self) -> usize;
}

/// Key state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub start: bool,
    pub resume: bool,
    pub mute: bool,
    pub unmute: bool,
}

impl FrameInput {
    /// Input with exactly the given keys held
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut input = Self::default();
        for &key in keys {
            input.set(key, true);
        }
        input
    }

    pub fn set(&mut self, key: Key, down: bool) {
        let slot = match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Fire => &mut self.fire,
            Key::Start => &mut self.start,
            Key::Resume => &mut self.resume,
            Key::Mute => &mut self.mute,
            Key::Unmute => &mut self.unmute,
        };
        *slot = down;
    }
}

impl InputState for FrameInput {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire,
            Key::Start => self.start,
            Key::Resume => self.resume,
            Key::Mute => self.mute,
            Key::Unmute => self.unmute,
        }
    }

    fn key_count(&self) -> usize {
        Key::ALL.iter().filter(|&&k| self.is_key_down(k)).count()
    }
}
