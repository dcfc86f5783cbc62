//! Read-only frame view for renderers
//!
//! Everything a renderer needs to draw one frame, built through the wave's
//! query methods and serializable so it can be shipped across a process or
//! dumped for debugging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::{GamePhase, Invaders};
use crate::sim::{AlienSprite, BoltColor, DefenseLine, Entity, RandomSource, Wave};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlienView {
    pub row: usize,
    pub col: usize,
    pub pos: Vec2,
    pub sprite: AlienSprite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: BoltColor,
}

/// State of the wave being played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub lives: u32,
    pub muted: bool,
    pub ship: Option<ShipView>,
    pub rows: usize,
    pub cols: usize,
    /// Living aliens only, bottom row first
    pub aliens: Vec<AlienView>,
    pub bolts: Vec<BoltView>,
    pub defense_line: DefenseLine,
}

/// Complete render state for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub width: f32,
    pub height: f32,
    /// Absent while no wave exists
    pub wave: Option<WaveView>,
}

impl WaveView {
    pub fn capture<R: RandomSource>(wave: &Wave<R>) -> Self {
        let ship = wave.ship().map(|ship| ShipView {
            pos: ship.position(),
            width: ship.width,
            height: ship.height,
        });
        let aliens = wave
            .cells()
            .filter_map(|(row, col, alien)| {
                alien.map(|a| AlienView {
                    row,
                    col,
                    pos: a.position(),
                    sprite: a.sprite,
                })
            })
            .collect();
        let bolts = wave
            .bolts()
            .map(|b| BoltView {
                pos: b.position(),
                width: b.width,
                height: b.height,
                color: b.origin.color(),
            })
            .collect();

        Self {
            lives: wave.lives(),
            muted: wave.is_muted(),
            ship,
            rows: wave.formation().rows(),
            cols: wave.formation().cols(),
            aliens,
            bolts,
            defense_line: wave.defense_line(),
        }
    }
}

impl RenderSnapshot {
    pub fn capture(game: &Invaders) -> Self {
        Self {
            phase: game.phase(),
            width: game.settings().game_width,
            height: game.settings().game_height,
            wave: game.wave().map(WaveView::capture),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
