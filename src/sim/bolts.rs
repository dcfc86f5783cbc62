//! Laser bolts in flight and the alien fire control

use serde::{Deserialize, Serialize};

use super::formation::Formation;
use super::models::{Bolt, Ship};
use super::rng::RandomSource;
use crate::settings::Settings;

/// The active bolt set, in firing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bolts {
    active: Vec<Bolt>,
}

impl Bolts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bolt> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn push(&mut self, bolt: Bolt) {
        self.active.push(bolt);
    }

    /// Number of ship bolts in flight (never more than one)
    pub fn ship_bolts(&self) -> usize {
        self.active.iter().filter(|b| b.is_from_ship()).count()
    }

    pub fn ship_bolt_in_flight(&self) -> bool {
        self.active.iter().any(Bolt::is_from_ship)
    }

    /// Fire from the ship unless one of its bolts is still in flight
    ///
    /// Returns true if a bolt was spawned.
    pub fn fire_from_ship(&mut self, ship: &Ship, settings: &Settings) -> bool {
        if self.ship_bolt_in_flight() {
            return false;
        }
        self.active.push(Bolt::from_ship(ship, settings));
        true
    }

    /// Move every bolt one frame
    pub fn advance(&mut self) {
        for bolt in &mut self.active {
            bolt.advance();
        }
    }

    /// Drop bolts that have fully left the screen, returning how many
    pub fn prune_offscreen(&mut self, game_height: f32) -> usize {
        let before = self.active.len();
        self.active.retain(|b| !b.is_offscreen(game_height));
        before - self.active.len()
    }

    /// Keep only the bolts for which `keep` returns true, in order
    pub(crate) fn retain_mut(&mut self, keep: impl FnMut(&mut Bolt) -> bool) {
        self.active.retain_mut(keep);
    }
}

/// Decides when the formation shoots back
///
/// Every formation step bumps a counter. Each frame the counter is compared
/// against a random threshold in `1..=max_fire_rate`; on an exact match the
/// formation fires. Afterwards the counter is reset to zero and the
/// threshold redrawn, whether or not a shot was fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireControl {
    threshold: u32,
    steps: u32,
}

impl FireControl {
    pub fn new(rng: &mut impl RandomSource, max_fire_rate: u32) -> Self {
        assert!(max_fire_rate > 0, "max_fire_rate must be at least 1");
        Self {
            threshold: rng.range_inclusive(1, max_fire_rate),
            steps: 0,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Count one formation step
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    /// Check the counter against the threshold, then reset and redraw
    pub fn check(&mut self, rng: &mut impl RandomSource, max_fire_rate: u32) -> bool {
        let fire = self.steps == self.threshold;
        self.steps = 0;
        self.threshold = rng.range_inclusive(1, max_fire_rate);
        fire
    }
}

/// A bolt from the lowest living alien of a random non-empty column
pub fn alien_volley(
    formation: &Formation,
    rng: &mut impl RandomSource,
    settings: &Settings,
) -> Option<Bolt> {
    let columns = formation.living_columns();
    if columns.is_empty() {
        return None;
    }
    let col = columns[rng.index(columns.len())];
    let shooter = formation.lowest_in_column(col)?;
    log::debug!("alien in column {col} fires from x={}", shooter.pos.x);
    Some(Bolt::from_alien(shooter, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::models::BoltOrigin;
    use crate::sim::rng::{FixedRng, SimRng};
    use glam::Vec2;

    #[test]
    fn test_single_ship_bolt_in_flight() {
        let s = Settings::default();
        let ship = Ship::new(&s);
        let mut bolts = Bolts::new();
        assert!(bolts.fire_from_ship(&ship, &s));
        assert!(!bolts.fire_from_ship(&ship, &s));
        assert_eq!(bolts.ship_bolts(), 1);

        // Alien bolts do not block the ship
        bolts.push(Bolt::new(Vec2::new(100.0, 300.0), BoltOrigin::Alien, &s));
        assert!(!bolts.fire_from_ship(&ship, &s));
        assert_eq!(bolts.len(), 2);
    }

    #[test]
    fn test_ship_bolt_spawns_above_ship() {
        let s = Settings::default();
        let ship = Ship::new(&s);
        let mut bolts = Bolts::new();
        bolts.fire_from_ship(&ship, &s);
        let bolt = bolts.iter().next().unwrap();
        assert_eq!(bolt.pos.x, ship.pos.x);
        assert_eq!(bolt.pos.y, ship.pos.y + s.bolt_height / 2.0);
    }

    #[test]
    fn test_prune_removes_adjacent_offscreen_bolts() {
        let s = Settings::default();
        let mut bolts = Bolts::new();
        let top = s.game_height + s.bolt_height;
        bolts.push(Bolt::new(Vec2::new(1.0, top), BoltOrigin::Ship, &s));
        bolts.push(Bolt::new(Vec2::new(2.0, -s.bolt_height), BoltOrigin::Alien, &s));
        bolts.push(Bolt::new(Vec2::new(3.0, 300.0), BoltOrigin::Alien, &s));
        bolts.push(Bolt::new(Vec2::new(4.0, top), BoltOrigin::Alien, &s));

        assert_eq!(bolts.prune_offscreen(s.game_height), 3);
        let left: Vec<f32> = bolts.iter().map(|b| b.pos.x).collect();
        assert_eq!(left, vec![3.0]);
    }

    #[test]
    fn test_fire_control_resets_every_check() {
        let mut rng = FixedRng::new(2, 0);
        let mut fire = FireControl::new(&mut rng, 5);
        assert_eq!(fire.threshold(), 2);

        fire.record_step();
        assert!(!fire.check(&mut rng, 5));
        assert_eq!(fire.steps(), 0);

        // One step per check can never reach a threshold of 2
        for _ in 0..10 {
            fire.record_step();
            assert!(!fire.check(&mut rng, 5));
        }

        fire.record_step();
        fire.record_step();
        assert!(fire.check(&mut rng, 5));
        assert_eq!(fire.steps(), 0);
    }

    #[test]
    fn test_fire_control_threshold_one() {
        let mut rng = FixedRng::new(1, 0);
        let mut fire = FireControl::new(&mut rng, 5);
        assert!(!fire.check(&mut rng, 5));
        fire.record_step();
        assert!(fire.check(&mut rng, 5));
    }

    #[test]
    fn test_threshold_redrawn_in_range() {
        let mut rng = SimRng::seeded(42);
        let mut fire = FireControl::new(&mut rng, 5);
        for _ in 0..200 {
            fire.check(&mut rng, 5);
            assert!((1..=5).contains(&fire.threshold()));
        }
    }

    #[test]
    fn test_volley_from_lowest_living_in_column() {
        let s = Settings {
            alien_rows: 3,
            aliens_in_row: 4,
            ..Settings::default()
        };
        let mut formation = Formation::new(&s);
        formation.remove(0, 2);
        let shooter = formation.get(1, 2).unwrap().clone();

        let mut rng = FixedRng::new(1, 2);
        let bolt = alien_volley(&formation, &mut rng, &s).unwrap();
        assert_eq!(bolt.origin, BoltOrigin::Alien);
        assert_eq!(bolt.pos.x, shooter.pos.x);
        assert_eq!(bolt.pos.y, shooter.pos.y - s.bolt_height / 2.0);
    }

    #[test]
    fn test_volley_only_from_living_columns() {
        let s = Settings {
            alien_rows: 2,
            aliens_in_row: 3,
            ..Settings::default()
        };
        let mut formation = Formation::new(&s);
        for row in 0..2 {
            formation.remove(row, 0);
            formation.remove(row, 1);
        }
        let col2_x = formation.get(0, 2).unwrap().pos.x;
        for pick in 0..5 {
            let mut rng = FixedRng::new(1, pick);
            let bolt = alien_volley(&formation, &mut rng, &s).unwrap();
            assert_eq!(bolt.pos.x, col2_x);
        }

        formation.remove(0, 2);
        formation.remove(1, 2);
        assert!(alien_volley(&formation, &mut FixedRng::new(1, 0), &s).is_none());
    }
}
