//! Entity models: the ship, aliens and laser bolts
//!
//! Models are passive data plus geometry. All behaviour that needs more than
//! one entity lives in the formation, bolt and collision modules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Bounds;
use crate::settings::Settings;

/// Sprite selector handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Ship,
    Alien(AlienSprite),
    Bolt(BoltColor),
}

/// Common capability of everything drawn and hit-tested
pub trait Entity {
    fn bounds(&self) -> Bounds;
    fn sprite(&self) -> Sprite;

    #[inline]
    fn position(&self) -> Vec2 {
        self.bounds().center
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    /// A fresh ship centered horizontally on the ship baseline
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.game_width / 2.0, settings.ship_bottom),
            width: settings.ship_width,
            height: settings.ship_height,
        }
    }

    /// Move left by `distance`, stopping at the left edge of the screen
    pub fn move_left(&mut self, distance: f32) {
        self.pos.x = (self.pos.x - distance).max(self.width / 2.0);
    }

    /// Move right by `distance`, stopping at the right edge of the screen
    pub fn move_right(&mut self, distance: f32, game_width: f32) {
        self.pos.x = (self.pos.x + distance).min(game_width - self.width / 2.0);
    }

    /// Ships are only damaged by alien bolts
    pub fn is_hit_by(&self, bolt: &Bolt) -> bool {
        bolt.origin == BoltOrigin::Alien && self.bounds().contains_any_corner(&bolt.bounds())
    }
}

impl Entity for Ship {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Ship
    }
}

/// Alien artwork, shared by each pair of consecutive rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienSprite {
    A,
    B,
    C,
}

impl AlienSprite {
    /// Sprite for a 1-based row number counted from the bottom
    pub fn for_row(row_number: usize) -> Self {
        match row_number % 6 {
            1 | 2 => AlienSprite::A,
            3 | 4 => AlienSprite::B,
            _ => AlienSprite::C,
        }
    }
}

/// A single alien in the formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub sprite: AlienSprite,
}

impl Alien {
    pub fn new(pos: Vec2, sprite: AlienSprite, settings: &Settings) -> Self {
        Self {
            pos,
            width: settings.alien_width,
            height: settings.alien_height,
            sprite,
        }
    }

    /// Aliens are only damaged by ship bolts
    pub fn is_hit_by(&self, bolt: &Bolt) -> bool {
        bolt.origin == BoltOrigin::Ship && self.bounds().contains_any_corner(&bolt.bounds())
    }
}

impl Entity for Alien {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Alien(self.sprite)
    }
}

/// Who fired a bolt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltOrigin {
    Ship,
    Alien,
}

impl BoltOrigin {
    /// Vertical direction of travel: ship bolts go up, alien bolts go down
    #[inline]
    pub fn direction(&self) -> f32 {
        match self {
            BoltOrigin::Ship => 1.0,
            BoltOrigin::Alien => -1.0,
        }
    }

    pub fn color(&self) -> BoltColor {
        match self {
            BoltOrigin::Ship => BoltColor::Yellow,
            BoltOrigin::Alien => BoltColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltColor {
    Yellow,
    Red,
}

/// A laser bolt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub origin: BoltOrigin,
}

impl Bolt {
    pub fn new(pos: Vec2, origin: BoltOrigin, settings: &Settings) -> Self {
        Self {
            pos,
            width: settings.bolt_width,
            height: settings.bolt_height,
            speed: settings.bolt_speed,
            origin,
        }
    }

    /// Bolt leaving the top of the ship
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        let pos = Vec2::new(ship.pos.x, ship.pos.y + 0.5 * settings.bolt_height);
        Self::new(pos, BoltOrigin::Ship, settings)
    }

    /// Bolt leaving the bottom of an alien
    pub fn from_alien(alien: &Alien, settings: &Settings) -> Self {
        let pos = Vec2::new(alien.pos.x, alien.pos.y - 0.5 * settings.bolt_height);
        Self::new(pos, BoltOrigin::Alien, settings)
    }

    #[inline]
    pub fn is_from_ship(&self) -> bool {
        self.origin == BoltOrigin::Ship
    }

    /// Move one frame along the origin's direction
    pub fn advance(&mut self) {
        self.pos.y += self.speed * self.origin.direction();
    }

    /// Fully above the top or below the bottom of the screen
    pub fn is_offscreen(&self, game_height: f32) -> bool {
        let half = 0.5 * self.height;
        self.pos.y - half >= game_height || self.pos.y + half < 0.0
    }
}

impl Entity for Bolt {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Bolt(self.origin.color())
    }
}
