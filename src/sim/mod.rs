//! Deterministic card simulation
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One step per animation frame, no wall-clock time
//! - Seeded RNG only (at spawn)
//! - Stable iteration order (achievement list order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{Bands, TravelBand, reflect_card};
pub use collision::{
    Aabb, CollisionResult, SeparatingAxis, Viewport, card_card_collision, push_away,
    resolve_collisions,
};
pub use state::{Card, DriftState, Side};
pub use tick::{step, tick};
