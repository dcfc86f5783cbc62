//! Bolt collisions against the ship and the formation
//!
//! Bolts are checked in firing order. An alien bolt can only hit the ship,
//! a ship bolt can only hit aliens, and a bolt is consumed by its first hit.

use super::bolts::Bolts;
use super::formation::Formation;
use super::models::{BoltOrigin, Ship};

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// The ship was destroyed this pass
    pub ship_destroyed: bool,
    /// Cells emptied this pass, in the order they were hit
    pub aliens_destroyed: Vec<(usize, usize)>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        !self.ship_destroyed && self.aliens_destroyed.is_empty()
    }
}

/// Resolve every bolt hit, removing consumed bolts and destroyed entities
///
/// Once the ship is destroyed it stays absent for the rest of the pass, so
/// at most one ship hit is reported.
pub fn resolve_collisions(
    ship: &mut Option<Ship>,
    formation: &mut Formation,
    bolts: &mut Bolts,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    bolts.retain_mut(|bolt| {
        if let Some(s) = ship.as_ref() {
            if s.is_hit_by(bolt) {
                *ship = None;
                report.ship_destroyed = true;
                return false;
            }
        }

        if bolt.origin == BoltOrigin::Ship {
            if let Some((row, col)) = formation.first_hit(bolt) {
                formation.remove(row, col);
                report.aliens_destroyed.push((row, col));
                return false;
            }
        }

        true
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::models::Bolt;
    use glam::Vec2;

    fn setup() -> (Settings, Option<Ship>, Formation, Bolts) {
        let s = Settings {
            alien_rows: 2,
            aliens_in_row: 3,
            ..Settings::default()
        };
        let ship = Some(Ship::new(&s));
        let formation = Formation::new(&s);
        (s, ship, formation, Bolts::new())
    }

    #[test]
    fn test_alien_bolt_destroys_ship() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        let at = ship.as_ref().unwrap().pos + Vec2::new(0.0, 20.0);
        bolts.push(Bolt::new(at, BoltOrigin::Alien, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert!(report.ship_destroyed);
        assert!(ship.is_none());
        assert!(bolts.is_empty());
    }

    #[test]
    fn test_ship_bolt_passes_through_ship() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        let at = ship.as_ref().unwrap().pos;
        bolts.push(Bolt::new(at, BoltOrigin::Ship, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert!(report.is_empty());
        assert!(ship.is_some());
        assert_eq!(bolts.len(), 1);
    }

    #[test]
    fn test_only_one_ship_hit_per_pass() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        let at = ship.as_ref().unwrap().pos;
        bolts.push(Bolt::new(at, BoltOrigin::Alien, &s));
        bolts.push(Bolt::new(at, BoltOrigin::Alien, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert!(report.ship_destroyed);
        // Second bolt had nothing left to hit
        assert_eq!(bolts.len(), 1);
    }

    #[test]
    fn test_ship_bolt_destroys_one_alien() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        let target = formation.get(1, 1).unwrap().pos;
        bolts.push(Bolt::new(target, BoltOrigin::Ship, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert_eq!(report.aliens_destroyed, vec![(1, 1)]);
        assert!(formation.get(1, 1).is_none());
        assert_eq!(formation.living_count(), 5);
        assert!(bolts.is_empty());
    }

    #[test]
    fn test_bolt_spanning_two_aliens_hits_lower_row_first() {
        let (_, mut ship, mut formation, mut bolts) = setup();
        let low = formation.get(0, 0).unwrap().pos;
        let high = formation.get(1, 0).unwrap().pos;
        // A tall bolt with corners in both cells
        let bolt = Bolt {
            pos: (low + high) / 2.0,
            width: 4.0,
            height: high.y - low.y,
            speed: 10.0,
            origin: BoltOrigin::Ship,
        };
        bolts.push(bolt);

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert_eq!(report.aliens_destroyed, vec![(0, 0)]);
        assert!(formation.get(1, 0).is_some());
    }

    #[test]
    fn test_alien_bolt_ignores_aliens() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        let target = formation.get(0, 2).unwrap().pos;
        bolts.push(Bolt::new(target, BoltOrigin::Alien, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert!(report.is_empty());
        assert_eq!(formation.living_count(), 6);
    }

    #[test]
    fn test_miss_keeps_bolt() {
        let (s, mut ship, mut formation, mut bolts) = setup();
        bolts.push(Bolt::new(Vec2::new(700.0, 300.0), BoltOrigin::Ship, &s));
        bolts.push(Bolt::new(Vec2::new(700.0, 300.0), BoltOrigin::Alien, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert!(report.is_empty());
        assert_eq!(bolts.len(), 2);
    }

    #[test]
    fn test_aliens_still_hittable_without_ship() {
        let (s, _, mut formation, mut bolts) = setup();
        let mut ship = None;
        let target = formation.get(0, 0).unwrap().pos;
        bolts.push(Bolt::new(target, BoltOrigin::Ship, &s));

        let report = resolve_collisions(&mut ship, &mut formation, &mut bolts);
        assert_eq!(report.aliens_destroyed, vec![(0, 0)]);
    }
}
