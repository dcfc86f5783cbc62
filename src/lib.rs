//! Alien Invaders - wave simulation core
//!
//! Core modules:
//! - `sim`: Per-frame wave simulation (formation, bolts, collisions, outcome queries)
//! - `game`: Outer game-state machine driving waves
//! - `input`: Logical key query capability consumed by the simulation
//! - `audio`: Audio cues emitted by the simulation
//! - `snapshot`: Serializable read-only view for renderers
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use audio::{AudioSink, LogAudio, SoundCue};
pub use error::SettingsError;
pub use game::{GamePhase, Invaders};
pub use input::{FrameInput, InputState, Key};
pub use settings::Settings;
pub use sim::{RandomSource, SimRng, Wave};
pub use snapshot::RenderSnapshot;

/// Default game configuration constants
pub mod consts {
    /// Nominal frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 44.0;
    pub const SHIP_HEIGHT: f32 = 44.0;
    /// Ship center y (distance from the bottom of the screen)
    pub const SHIP_BOTTOM: f32 = 32.0;
    /// Horizontal distance per frame while a move key is held
    pub const SHIP_MOVEMENT: f32 = 5.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Aliens below this y end the wave
    pub const DEFENSE_LINE: f32 = 100.0;

    /// Alien defaults
    pub const ALIEN_WIDTH: f32 = 33.0;
    pub const ALIEN_HEIGHT: f32 = 33.0;
    pub const ALIEN_H_SEP: f32 = 16.0;
    pub const ALIEN_V_SEP: f32 = 16.0;
    /// Gap between the top row and the top of the screen
    pub const ALIEN_CEILING: f32 = 100.0;
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIENS_IN_ROW: usize = 12;
    /// Horizontal distance of one formation step
    pub const ALIEN_H_WALK: f32 = 8.0; // ALIEN_WIDTH / 4, floored
    /// Vertical distance of one descent
    pub const ALIEN_V_WALK: f32 = 16.0; // ALIEN_HEIGHT / 2, floored
    /// Seconds between formation steps
    pub const ALIEN_STEP_INTERVAL: f32 = 1.0;

    /// Bolt defaults
    pub const BOLT_WIDTH: f32 = 4.0;
    pub const BOLT_HEIGHT: f32 = 16.0;
    /// Vertical distance per frame
    pub const BOLT_SPEED: f32 = 10.0;
    /// Upper bound of the alien fire threshold (in formation steps)
    pub const MAX_FIRE_RATE: u32 = 5;
}
