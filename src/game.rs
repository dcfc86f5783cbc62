//! Outer game-state machine
//!
//! Decides each frame whether a wave runs, waits for the player, or shows a
//! final result. Per frame the steps run in a fixed order: determine the
//! phase from input, enter a new wave, run the active wave, resume after a
//! pause.

use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::input::{InputState, Key};
use crate::settings::Settings;
use crate::sim::Wave;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start key; no wave exists
    Inactive,
    /// A new wave is being created (lasts one pass)
    NewWave,
    /// Normal gameplay
    Active,
    /// A life was lost; waiting for the resume key
    Paused,
    /// Restoring the ship (lasts one pass)
    Continue,
    /// Every alien destroyed
    Win,
    /// Out of lives, or the aliens crossed the defense line
    Lose,
}

impl GamePhase {
    /// Win and Lose end the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::Lose)
    }
}

/// Keys held on the previous frame, for edge detection
#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    start: bool,
    resume: bool,
}

/// The game controller
pub struct Invaders {
    settings: Settings,
    phase: GamePhase,
    /// Present in every phase except `Inactive`
    wave: Option<Wave>,
    seed: u64,
    waves_started: u64,
    muted: bool,
    held: HeldKeys,
}

impl Invaders {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {seed}");
        Self {
            settings,
            phase: GamePhase::Inactive,
            wave: None,
            seed,
            waves_started: 0,
            muted: false,
            held: HeldKeys::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn wave(&self) -> Option<&Wave> {
        self.wave.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Take the audio cues raised by the wave since the last drain
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        self.wave
            .as_mut()
            .map(Wave::drain_cues)
            .unwrap_or_default()
    }

    /// Run one frame
    pub fn update(&mut self, input: &impl InputState, dt: f32) {
        self.determine_phase(input);
        self.enter_new_wave();
        self.run_active(input, dt);
        self.resume();

        self.held = HeldKeys {
            start: input.is_key_down(Key::Start),
            resume: input.is_key_down(Key::Resume),
        };
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if phase != self.phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn determine_phase(&mut self, input: &impl InputState) {
        let start_edge = input.key_count() > 0 && input.is_key_down(Key::Start) && !self.held.start;
        let resume_edge = input.is_key_down(Key::Resume) && !self.held.resume;

        match self.phase {
            GamePhase::Inactive if start_edge => self.set_phase(GamePhase::NewWave),
            GamePhase::Paused if resume_edge => {
                if let Some(wave) = self.wave.as_mut() {
                    wave.acknowledge_pause();
                }
                self.set_phase(GamePhase::Continue);
            }
            GamePhase::Active => {
                if input.is_key_down(Key::Mute) {
                    self.muted = true;
                }
                if input.is_key_down(Key::Unmute) && self.muted {
                    self.muted = false;
                }
                if let Some(wave) = self.wave.as_mut() {
                    wave.set_muted(self.muted);
                }
            }
            _ => {}
        }
    }

    fn enter_new_wave(&mut self) {
        if self.phase != GamePhase::NewWave {
            return;
        }
        let seed = self.seed.wrapping_add(self.waves_started);
        self.waves_started += 1;
        let mut wave = Wave::seeded(self.settings.clone(), seed);
        wave.set_muted(self.muted);
        self.wave = Some(wave);
        self.set_phase(GamePhase::Active);
    }

    fn run_active(&mut self, input: &impl InputState, dt: f32) {
        if self.phase != GamePhase::Active {
            return;
        }
        let Some(wave) = self.wave.as_mut() else {
            return;
        };
        wave.update(input, dt);

        let next = if wave.is_cleared() {
            GamePhase::Win
        } else if wave.should_pause() {
            GamePhase::Paused
        } else if wave.is_dead() || wave.has_crossed_line() {
            GamePhase::Lose
        } else {
            GamePhase::Active
        };
        self.set_phase(next);
    }

    fn resume(&mut self) {
        if self.phase != GamePhase::Continue {
            return;
        }
        if let Some(wave) = self.wave.as_mut() {
            wave.respawn_ship();
        }
        self.set_phase(GamePhase::Active);
    }
}
