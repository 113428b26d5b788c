//! Per-frame simulation step
//!
//! One call advances the drift by exactly one animation frame. Scheduling
//! is the caller's business.

use super::bounds::reflect_card;
use super::collision::{Viewport, resolve_collisions};
use super::state::DriftState;
use crate::settings::DriftSettings;

/// Advance the drift state by one frame
///
/// 1. Integrate position by velocity
/// 2. Reflect each card into its travel bands
/// 3. One collision pass over all card pairs
pub fn tick(state: &mut DriftState, viewport: Viewport, settings: &DriftSettings) {
    let scale = settings.effective_speed_scale();
    let bands = settings.bands();

    let mut reflections = 0;
    for card in state.cards.iter_mut() {
        card.pos += card.vel * scale;
        if reflect_card(card, &bands) {
            reflections += 1;
        }
    }

    let hits = resolve_collisions(&mut state.cards, &viewport, settings.extent());

    state.frame += 1;

    if reflections > 0 || hits > 0 {
        log::trace!(
            "frame {}: {} reflections, {} overlapping pairs",
            state.frame,
            reflections,
            hits
        );
    }
}

/// Pure variant of [`tick`]: returns the next state
pub fn step(state: &DriftState, viewport: Viewport, settings: &DriftSettings) -> DriftState {
    let mut next = state.clone();
    tick(&mut next, viewport, settings);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::Achievement;
    use crate::sim::state::{Card, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    fn achievements(n: usize) -> Vec<Achievement> {
        (0..n)
            .map(|i| Achievement::new(format!("a{}", i), "Shipped", "2026-01-01"))
            .collect()
    }

    #[test]
    fn test_integrates_position() {
        let settings = DriftSettings::default();
        let mut state = DriftState {
            seed: 0,
            frame: 0,
            cards: vec![Card {
                id: "a".into(),
                pos: Vec2::new(5.0, 40.0),
                vel: Vec2::new(0.02, -0.01),
                side: Side::Left,
            }],
        };
        tick(&mut state, Viewport::default(), &settings);
        assert!((state.cards[0].pos.x - 5.02).abs() < 1e-5);
        assert!((state.cards[0].pos.y - 39.99).abs() < 1e-5);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_step_is_pure() {
        let settings = DriftSettings::default();
        let state = DriftState::spawn(&achievements(4), 7, &settings);
        let next = step(&state, Viewport::default(), &settings);
        assert_eq!(state.frame, 0);
        assert_eq!(next.frame, 1);
        assert_ne!(state.cards, next.cards);
    }

    #[test]
    fn test_reduced_motion_holds_position() {
        let settings = DriftSettings {
            reduced_motion: true,
            ..Default::default()
        };
        // Spawn within bands so reflection has nothing to correct
        let state = DriftState {
            seed: 0,
            frame: 0,
            cards: vec![Card {
                id: "a".into(),
                pos: Vec2::new(5.0, 40.0),
                vel: Vec2::new(0.02, 0.02),
                side: Side::Left,
            }],
        };
        let next = step(&state, Viewport::default(), &settings);
        assert_eq!(next.cards[0].pos, state.cards[0].pos);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let settings = DriftSettings::default();
        let list = achievements(8);
        let mut state1 = DriftState::spawn(&list, 99999, &settings);
        let mut state2 = DriftState::spawn(&list, 99999, &settings);

        for _ in 0..500 {
            tick(&mut state1, Viewport::default(), &settings);
            tick(&mut state2, Viewport::default(), &settings);
        }

        assert_eq!(state1, state2);
    }

    #[test]
    fn test_right_cards_pulled_into_band() {
        // Right-side spawn range [85,95) extends past the band's max of 86
        let settings = DriftSettings::default();
        let mut state = DriftState::spawn(&achievements(8), 3, &settings);
        tick(&mut state, Viewport::default(), &settings);
        for card in &state.cards {
            assert!(settings.bands().horizontal(card.side).contains(card.pos.x));
        }
    }

    proptest! {
        #[test]
        fn prop_cards_stay_in_bands(seed in any::<u64>(), n in 1usize..12, frames in 1usize..200) {
            let settings = DriftSettings::default();
            let bands = settings.bands();
            let mut state = DriftState::spawn(&achievements(n), seed, &settings);
            let speeds: Vec<Vec2> = state.cards.iter().map(|c| c.vel.abs()).collect();

            for _ in 0..frames {
                tick(&mut state, Viewport::sanitized(1440.0, 900.0), &settings);
                for card in &state.cards {
                    prop_assert!(bands.horizontal(card.side).contains(card.pos.x));
                    prop_assert!(bands.vertical.contains(card.pos.y));
                }
            }

            // Reflections and collisions only ever flip signs
            for (card, speed) in state.cards.iter().zip(speeds) {
                prop_assert_eq!(card.vel.abs(), speed);
            }
        }
    }
}
