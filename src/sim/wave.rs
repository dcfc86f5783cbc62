//! A single wave of aliens
//!
//! The wave owns the ship, the formation, the bolts in flight and the lives
//! counter, and advances all of them once per frame. The outer game-state
//! machine only talks to it through the query and command methods below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bolts::{Bolts, FireControl, alien_volley};
use super::collision::resolve_collisions;
use super::formation::{Formation, March};
use super::models::{Alien, Bolt, Ship};
use super::rng::{RandomSource, SimRng};
use crate::audio::SoundCue;
use crate::input::{InputState, Key};
use crate::settings::Settings;

/// The horizontal line the aliens must not cross
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseLine {
    pub y: f32,
    pub x_start: f32,
    pub x_end: f32,
}

impl DefenseLine {
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x_start, self.y)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x_end, self.y)
    }
}

pub struct Wave<R: RandomSource = SimRng> {
    pub(crate) settings: Settings,
    /// Absent between losing a life and the respawn
    pub(crate) ship: Option<Ship>,
    pub(crate) formation: Formation,
    pub(crate) bolts: Bolts,
    pub(crate) fire: FireControl,
    pub(crate) lives: u32,
    should_pause: bool,
    dead: bool,
    muted: bool,
    cues: Vec<SoundCue>,
    frames: u64,
    rng: R,
}

impl Wave<SimRng> {
    /// A wave driven by a seeded PCG generator
    pub fn seeded(settings: Settings, seed: u64) -> Self {
        Self::new(settings, SimRng::seeded(seed))
    }
}

impl<R: RandomSource> Wave<R> {
    /// Set up the ship, a full formation and the lives counter
    ///
    /// Panics if the settings fail validation.
    pub fn new(settings: Settings, mut rng: R) -> Self {
        if let Err(err) = settings.validate() {
            panic!("cannot build a wave: {err}");
        }
        let fire = FireControl::new(&mut rng, settings.max_fire_rate);
        let wave = Self {
            ship: Some(Ship::new(&settings)),
            formation: Formation::new(&settings),
            bolts: Bolts::new(),
            fire,
            lives: settings.ship_lives,
            should_pause: false,
            dead: false,
            muted: false,
            cues: Vec::new(),
            frames: 0,
            rng,
            settings,
        };
        log::info!(
            "New wave: {}x{} aliens, {} lives",
            wave.formation.rows(),
            wave.formation.cols(),
            wave.lives
        );
        wave
    }

    /// Advance the wave by one frame
    pub fn update(&mut self, input: &impl InputState, dt: f32) {
        assert!(dt >= 0.0, "negative frame time: {dt}");
        self.frames += 1;

        self.move_ship(input);
        self.march(dt);
        self.fire_ship_bolt(input);
        self.fire_alien_bolt();
        let pruned = self.bolts.prune_offscreen(self.settings.game_height);
        if pruned > 0 {
            log::trace!("pruned {pruned} bolts");
        }
        self.bolts.advance();
        self.collide();
        if self.lives == 0 {
            self.dead = true;
        }
    }

    fn move_ship(&mut self, input: &impl InputState) {
        let Some(ship) = self.ship.as_mut() else {
            return;
        };
        if input.is_key_down(Key::Left) {
            ship.move_left(self.settings.ship_movement);
        }
        if input.is_key_down(Key::Right) {
            ship.move_right(self.settings.ship_movement, self.settings.game_width);
        }
    }

    fn march(&mut self, dt: f32) {
        let outcome = self.formation.advance(dt, &self.settings);
        if outcome.stepped {
            self.fire.record_step();
        }
    }

    fn fire_ship_bolt(&mut self, input: &impl InputState) {
        if !input.is_key_down(Key::Fire) {
            return;
        }
        let Some(ship) = self.ship.as_ref() else {
            return;
        };
        if self.bolts.fire_from_ship(ship, &self.settings) {
            self.cue(SoundCue::ShipFired);
        }
    }

    fn fire_alien_bolt(&mut self) {
        if self
            .fire
            .check(&mut self.rng, self.settings.max_fire_rate)
        {
            if let Some(bolt) = alien_volley(&self.formation, &mut self.rng, &self.settings) {
                self.bolts.push(bolt);
            }
        }
    }

    fn collide(&mut self) {
        let report = resolve_collisions(&mut self.ship, &mut self.formation, &mut self.bolts);

        for _ in &report.aliens_destroyed {
            self.cue(SoundCue::AlienDestroyed);
        }

        if report.ship_destroyed {
            self.lives = self.lives.saturating_sub(1);
            if self.lives > 0 {
                self.should_pause = true;
            }
            log::info!("Ship destroyed, {} lives left", self.lives);
            self.cue(SoundCue::ShipHit);
        }
    }

    fn cue(&mut self, cue: SoundCue) {
        if !self.muted {
            self.cues.push(cue);
        }
    }

    // === Queries ===

    /// Every alien has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.formation.is_cleared()
    }

    /// The lowest living alien has dropped below the defense line
    pub fn has_crossed_line(&self) -> bool {
        self.formation.has_crossed(self.settings.defense_line)
    }

    /// No lives left (sticky)
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// A life was just lost and the game should pause before respawning
    pub fn should_pause(&self) -> bool {
        self.should_pause
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn direction(&self) -> March {
        self.formation.direction()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    /// Every grid cell, bottom row first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<&Alien>)> + '_ {
        self.formation.cells()
    }

    pub fn bolts(&self) -> impl Iterator<Item = &Bolt> + '_ {
        self.bolts.iter()
    }

    pub fn defense_line(&self) -> DefenseLine {
        DefenseLine {
            y: self.settings.defense_line,
            x_start: 0.0,
            x_end: self.settings.game_width,
        }
    }

    // === Commands ===

    /// Clear the pause request once the outer controller has paused
    pub fn acknowledge_pause(&mut self) {
        self.should_pause = false;
    }

    /// Put a fresh ship on the baseline
    pub fn respawn_ship(&mut self) {
        if self.dead {
            log::warn!("Ignoring respawn request: no lives left");
            return;
        }
        self.ship = Some(Ship::new(&self.settings));
        log::info!("Ship respawned");
    }

    pub fn set_muted(&mut self, muted: bool) {
        if muted != self.muted {
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }
        self.muted = muted;
    }

    /// Take the cues raised since the last drain
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}
