//! Wave simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform concerns:
//! - Input arrives through the `InputState` query trait
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (row-major grid, bolts in firing order)
//! - Audio is reported as cues, never played

pub mod bolts;
pub mod collision;
pub mod formation;
pub mod geometry;
pub mod models;
pub mod rng;
pub mod wave;

pub use bolts::{Bolts, FireControl, alien_volley};
pub use collision::{CollisionReport, resolve_collisions};
pub use formation::{Formation, March, MarchOutcome};
pub use geometry::Bounds;
pub use models::{Alien, AlienSprite, Bolt, BoltColor, BoltOrigin, Entity, Ship, Sprite};
pub use rng::{FixedRng, RandomSource, SimRng};
pub use wave::{DefenseLine, Wave};
