//! Game tuning
//!
//! Every geometric and timing constant of a wave, loadable from JSON.
//! Missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Wave tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub game_width: f32,
    pub game_height: f32,

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    /// Ship center y
    pub ship_bottom: f32,
    /// Horizontal distance per frame while a move key is held
    pub ship_movement: f32,
    pub ship_lives: u32,

    /// Defense line y
    pub defense_line: f32,

    // === Aliens ===
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_h_sep: f32,
    pub alien_v_sep: f32,
    pub alien_ceiling: f32,
    pub alien_rows: usize,
    pub aliens_in_row: usize,
    pub alien_h_walk: f32,
    pub alien_v_walk: f32,
    /// Seconds between formation steps
    pub alien_step_interval: f32,

    // === Bolts ===
    pub bolt_width: f32,
    pub bolt_height: f32,
    pub bolt_speed: f32,
    /// Alien fire threshold is drawn from `1..=max_fire_rate`
    pub max_fire_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_bottom: SHIP_BOTTOM,
            ship_movement: SHIP_MOVEMENT,
            ship_lives: SHIP_LIVES,

            defense_line: DEFENSE_LINE,

            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_h_sep: ALIEN_H_SEP,
            alien_v_sep: ALIEN_V_SEP,
            alien_ceiling: ALIEN_CEILING,
            alien_rows: ALIEN_ROWS,
            aliens_in_row: ALIENS_IN_ROW,
            alien_h_walk: ALIEN_H_WALK,
            alien_v_walk: ALIEN_V_WALK,
            alien_step_interval: ALIEN_STEP_INTERVAL,

            bolt_width: BOLT_WIDTH,
            bolt_height: BOLT_HEIGHT,
            bolt_speed: BOLT_SPEED,
            max_fire_rate: MAX_FIRE_RATE,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check the preconditions a wave relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if self.alien_rows == 0 {
            return invalid("alien_rows", "must be at least 1");
        }
        if self.aliens_in_row == 0 {
            return invalid("aliens_in_row", "must be at least 1");
        }
        if self.max_fire_rate == 0 {
            return invalid("max_fire_rate", "must be at least 1");
        }
        if self.ship_lives == 0 {
            return invalid("ship_lives", "must be at least 1");
        }
        if !(self.game_width > 0.0 && self.game_height > 0.0) {
            return invalid("game_width/game_height", "must be positive");
        }
        if !(self.bolt_speed > 0.0) {
            return invalid("bolt_speed", "must be positive");
        }
        if !(self.alien_step_interval >= 0.0) {
            return invalid("alien_step_interval", "must not be negative");
        }
        Ok(())
    }

    /// Distance from a side wall at which the formation turns around
    #[inline]
    pub fn march_margin(&self) -> f32 {
        self.alien_h_sep + 0.5 * self.alien_width
    }
}
