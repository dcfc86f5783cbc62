//! Frame invariants of the wave simulation under arbitrary play

use alien_invaders::sim::{BoltOrigin, FixedRng, Wave};
use alien_invaders::{FrameInput, Key, Settings};
use proptest::prelude::*;

fn frame_input() -> impl Strategy<Value = FrameInput> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, fire)| {
        let mut input = FrameInput::default();
        input.set(Key::Left, left);
        input.set(Key::Right, right);
        input.set(Key::Fire, fire);
        input
    })
}

fn fast_settings() -> Settings {
    Settings {
        alien_rows: 3,
        aliens_in_row: 6,
        alien_step_interval: 0.05,
        ..Settings::default()
    }
}

/// Respawn the ship whenever the wave asks for a pause, like the game does
fn play(wave: &mut Wave<impl alien_invaders::RandomSource>, input: &FrameInput, dt: f32) {
    wave.update(input, dt);
    if wave.should_pause() {
        wave.acknowledge_pause();
        wave.respawn_ship();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn at_most_one_ship_bolt(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..400),
    ) {
        let mut wave = Wave::seeded(fast_settings(), seed);
        for input in &inputs {
            play(&mut wave, input, 0.02);
            let ship_bolts = wave.bolts().filter(|b| b.origin == BoltOrigin::Ship).count();
            prop_assert!(ship_bolts <= 1);
        }
    }

    #[test]
    fn lives_never_increase_and_death_is_sticky(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..600),
    ) {
        let mut wave = Wave::seeded(fast_settings(), seed);
        let mut lives = wave.lives();
        let mut was_dead = false;
        for input in &inputs {
            play(&mut wave, input, 0.05);
            prop_assert!(wave.lives() <= lives);
            prop_assert_eq!(wave.is_dead(), wave.lives() == 0);
            if was_dead {
                prop_assert!(wave.is_dead());
            }
            lives = wave.lives();
            was_dead = wave.is_dead();
        }
    }

    #[test]
    fn aliens_never_come_back(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..600),
    ) {
        let mut wave = Wave::seeded(fast_settings(), seed);
        let mut living = wave.formation().living_count();
        for input in &inputs {
            play(&mut wave, input, 0.02);
            let now = wave.formation().living_count();
            prop_assert!(now <= living);
            prop_assert_eq!(wave.is_cleared(), now == 0);
            prop_assert_eq!(wave.cells().count(), 18);
            living = now;
        }
    }

    #[test]
    fn bolts_stay_near_the_screen(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..300),
    ) {
        let settings = fast_settings();
        let (height, reach) = (settings.game_height, settings.bolt_height + settings.bolt_speed);
        let mut wave = Wave::seeded(settings, seed);
        for input in &inputs {
            play(&mut wave, input, 0.02);
            for bolt in wave.bolts() {
                // Anything further out was pruned before its last move
                prop_assert!(bolt.pos.y < height + reach);
                prop_assert!(bolt.pos.y > -reach);
            }
        }
    }
}

#[test]
fn threshold_one_fires_once_per_step() {
    let settings = Settings {
        alien_rows: 2,
        aliens_in_row: 4,
        ..Settings::default()
    };
    let step = settings.alien_step_interval + 0.01;
    let mut wave = Wave::new(settings, FixedRng::new(1, 0));

    wave.update(&FrameInput::default(), step);
    let alien_bolts = |w: &Wave<FixedRng>| {
        w.bolts()
            .filter(|b| b.origin == BoltOrigin::Alien)
            .count()
    };
    assert_eq!(alien_bolts(&wave), 1);

    // No step this frame, so no shot
    wave.update(&FrameInput::default(), 0.0);
    assert_eq!(alien_bolts(&wave), 1);

    wave.update(&FrameInput::default(), step);
    assert_eq!(alien_bolts(&wave), 2);
}
