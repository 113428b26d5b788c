//! Drift state and card types
//!
//! Everything the frame step needs lives here. The set of cards is built
//! once from an achievement snapshot and replaced wholesale when the
//! snapshot changes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::TravelBand;
use crate::achievement::Achievement;
use crate::settings::DriftSettings;

/// Which side of the content region a card belongs to
///
/// Assigned at spawn from list-index parity and never re-derived from
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even indices go left, odd go right
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }
}

/// A moving achievement card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Source achievement id (render lookup only)
    pub id: String,
    /// Top-left corner in viewport percent
    pub pos: Vec2,
    /// Viewport percent per frame
    pub vel: Vec2,
    pub side: Side,
}

/// Complete drift state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftState {
    /// Seed the cards were spawned from
    pub seed: u64,
    /// Frames stepped since spawn
    pub frame: u64,
    /// Cards in achievement list order
    pub cards: Vec<Card>,
}

impl DriftState {
    /// Spawn one card per achievement
    pub fn spawn(achievements: &[Achievement], seed: u64, settings: &DriftSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let cards = achievements
            .iter()
            .enumerate()
            .map(|(index, achievement)| {
                let side = Side::for_index(index);
                let x_range = match side {
                    Side::Left => settings.left_spawn,
                    Side::Right => settings.right_spawn,
                };
                let x = sample(&mut rng, x_range);
                let y = sample(&mut rng, settings.vertical_spawn);
                let vx = (rng.random::<f32>() - 0.5) * settings.speed;
                let vy = (rng.random::<f32>() - 0.5) * settings.speed;

                Card {
                    id: achievement.id.clone(),
                    pos: Vec2::new(x, y),
                    vel: Vec2::new(vx, vy),
                    side,
                }
            })
            .collect();

        Self {
            seed,
            frame: 0,
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// Uniform sample from [min, max)
fn sample(rng: &mut Pcg32, range: TravelBand) -> f32 {
    range.min + rng.random::<f32>() * range.width()
}
