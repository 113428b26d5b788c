//! Card-vs-card collision detection and response
//!
//! Positions are in viewport percent but card extents are fixed in pixels,
//! so overlap is tested in pixel space using the live viewport size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Card;
use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::percent_to_pixels;

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Build a viewport, replacing non-finite or non-positive dimensions
    /// with the default ones
    pub fn sanitized(width: f32, height: f32) -> Self {
        let fallback = Self::default();
        let ok = |v: f32| v.is_finite() && v > 0.0;
        Self {
            width: if ok(width) { width } else { fallback.width },
            height: if ok(height) { height } else { fallback.height },
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Percent position to pixels
    #[inline]
    pub fn to_pixels(&self, pct: Vec2) -> Vec2 {
        percent_to_pixels(pct, self.size())
    }
}

/// Axis-aligned bounding box in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, extent: Vec2) -> Self {
        Self {
            min,
            max: min + extent,
        }
    }

    /// Box for a card whose top-left corner sits at `pos_pct`
    pub fn from_card(pos_pct: Vec2, viewport: &Viewport, extent: Vec2) -> Self {
        Self::new(viewport.to_pixels(pos_pct), extent)
    }

    /// Strict overlap; boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Penetration depth on each axis (only meaningful when overlapping)
    #[inline]
    pub fn overlap_depths(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            (self.max.x - other.min.x).min(other.max.x - self.min.x),
            (self.max.y - other.min.y).min(other.max.y - self.min.y),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Axis along which two overlapping boxes are pushed apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatingAxis {
    Horizontal,
    Vertical,
}

impl SeparatingAxis {
    /// The shallower axis wins; ties go vertical
    pub fn from_depths(depths: Vec2) -> Self {
        if depths.x < depths.y {
            SeparatingAxis::Horizontal
        } else {
            SeparatingAxis::Vertical
        }
    }
}

/// Result of testing one card against another
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the boxes overlap
    pub hit: bool,
    /// Separating axis (if hit)
    pub axis: SeparatingAxis,
    /// Overlap depth per axis (if hit)
    pub depths: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            axis: SeparatingAxis::Vertical,
            depths: Vec2::ZERO,
        }
    }
}

/// Test two boxes for overlap and pick the separating axis
pub fn card_card_collision(a: &Aabb, b: &Aabb) -> CollisionResult {
    if !a.overlaps(b) {
        return CollisionResult::miss();
    }
    let depths = a.overlap_depths(b);
    CollisionResult {
        hit: true,
        axis: SeparatingAxis::from_depths(depths),
        depths,
    }
}

/// Point `vel` away from `other` along `axis`
///
/// Only the sign of the chosen component changes.
#[inline]
pub fn push_away(vel: Vec2, axis: SeparatingAxis, this_min: Vec2, other_min: Vec2) -> Vec2 {
    match axis {
        SeparatingAxis::Horizontal => {
            let vx = if this_min.x < other_min.x { -vel.x.abs() } else { vel.x.abs() };
            Vec2::new(vx, vel.y)
        }
        SeparatingAxis::Vertical => {
            let vy = if this_min.y < other_min.y { -vel.y.abs() } else { vel.y.abs() };
            Vec2::new(vel.x, vy)
        }
    }
}

/// One pass of pairwise collision response over all cards
///
/// Boxes come from a snapshot taken before any velocity changes, so the
/// outcome does not depend on card order. This nudges velocities only; it
/// does not separate overlapping cards, and dense clusters may stay
/// overlapped for several frames. Returns the number of overlapping
/// ordered pairs seen.
pub fn resolve_collisions(cards: &mut [Card], viewport: &Viewport, extent: Vec2) -> usize {
    let boxes: Vec<Aabb> = cards
        .iter()
        .map(|c| Aabb::from_card(c.pos, viewport, extent))
        .collect();

    let mut hits = 0;
    for (i, card) in cards.iter_mut().enumerate() {
        for (j, other) in boxes.iter().enumerate() {
            if i == j {
                continue;
            }
            let result = card_card_collision(&boxes[i], other);
            if result.hit {
                card.vel = push_away(card.vel, result.axis, boxes[i].min, other.min);
                hits += 1;
            }
        }
    }
    hits
}
