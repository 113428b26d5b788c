//! Travel bands and boundary reflection
//!
//! Cards live in viewport-percentage space. Each card may only occupy its
//! side's horizontal band and the shared vertical band, which keeps the
//! central content region of the page clear.

use serde::{Deserialize, Serialize};

use super::state::{Card, Side};

/// A closed 1D interval in viewport percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelBand {
    pub min: f32,
    pub max: f32,
}

impl TravelBand {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Finite and not inverted
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp a coordinate into the band, forcing velocity back inward on contact
    ///
    /// Magnitude is preserved; only the sign changes.
    #[inline]
    pub fn reflect(&self, coord: f32, vel: f32) -> (f32, f32) {
        if coord < self.min {
            (self.min, vel.abs())
        } else if coord > self.max {
            (self.max, -vel.abs())
        } else {
            (coord, vel)
        }
    }
}

/// All travel bands used by the reflector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub left: TravelBand,
    pub right: TravelBand,
    pub vertical: TravelBand,
}

impl Bands {
    /// Horizontal band for a side
    #[inline]
    pub fn horizontal(&self, side: Side) -> TravelBand {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Reflect a card into its bands
///
/// Axes are independent, so a corner violation is fixed on both in one call.
/// Returns true if either axis was corrected.
pub fn reflect_card(card: &mut Card, bands: &Bands) -> bool {
    let before = (card.pos, card.vel);

    let (x, vx) = bands.horizontal(card.side).reflect(card.pos.x, card.vel.x);
    let (y, vy) = bands.vertical.reflect(card.pos.y, card.vel.y);
    card.pos.x = x;
    card.pos.y = y;
    card.vel.x = vx;
    card.vel.y = vy;

    before != (card.pos, card.vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DriftSettings;
    use glam::Vec2;
    use proptest::prelude::*;

    fn bands() -> Bands {
        DriftSettings::default().bands()
    }

    fn card(side: Side, pos: Vec2, vel: Vec2) -> Card {
        Card {
            id: "c".into(),
            pos,
            vel,
            side,
        }
    }

    #[test]
    fn test_band_reflect_inside_is_untouched() {
        let band = TravelBand::new(10.0, 80.0);
        assert_eq!(band.reflect(40.0, -0.02), (40.0, -0.02));
        assert_eq!(band.reflect(10.0, -0.02), (10.0, -0.02));
    }

    #[test]
    fn test_left_edge_forces_rightward() {
        let mut c = card(Side::Left, Vec2::new(-0.3, 50.0), Vec2::new(-0.02, 0.01));
        assert!(reflect_card(&mut c, &bands()));
        assert_eq!(c.pos.x, 0.0);
        assert!(c.vel.x >= 0.0);
        assert!((c.vel.x - 0.02).abs() < 1e-6);
        // Vertical untouched
        assert_eq!(c.vel.y, 0.01);
    }

    #[test]
    fn test_right_edge_forces_leftward() {
        let mut c = card(Side::Right, Vec2::new(86.4, 50.0), Vec2::new(0.02, 0.0));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.x, 86.0);
        assert!(c.vel.x <= 0.0);
    }

    #[test]
    fn test_top_and_bottom_edges() {
        let mut c = card(Side::Left, Vec2::new(5.0, 9.5), Vec2::new(0.0, -0.01));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.y, 10.0);
        assert!(c.vel.y >= 0.0);

        let mut c = card(Side::Left, Vec2::new(5.0, 80.5), Vec2::new(0.0, 0.01));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.y, 80.0);
        assert!(c.vel.y <= 0.0);
    }

    #[test]
    fn test_content_zone_edges() {
        // Left card drifting into the content region
        let mut c = card(Side::Left, Vec2::new(10.2, 50.0), Vec2::new(0.01, 0.0));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.x, 10.0);
        assert!(c.vel.x < 0.0);

        // Right card spawned at 85-95 but drifting left past 75
        let mut c = card(Side::Right, Vec2::new(74.9, 50.0), Vec2::new(-0.01, 0.0));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.x, 75.0);
        assert!(c.vel.x > 0.0);
    }

    #[test]
    fn test_corner_fixed_on_both_axes() {
        let mut c = card(Side::Right, Vec2::new(90.0, 85.0), Vec2::new(0.02, 0.02));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos, Vec2::new(86.0, 80.0));
        assert!(c.vel.x < 0.0 && c.vel.y < 0.0);
    }

    #[test]
    fn test_side_tag_not_position_decides_band() {
        // A left card far to the right still uses the left band
        let mut c = card(Side::Left, Vec2::new(60.0, 50.0), Vec2::new(0.01, 0.0));
        reflect_card(&mut c, &bands());
        assert_eq!(c.pos.x, 10.0);
    }

    proptest! {
        #[test]
        fn prop_reflection_lands_in_band(
            x in -50.0f32..150.0,
            y in -50.0f32..150.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
            right in any::<bool>(),
        ) {
            let side = if right { Side::Right } else { Side::Left };
            let b = bands();
            let mut c = card(side, Vec2::new(x, y), Vec2::new(vx, vy));
            reflect_card(&mut c, &b);
            prop_assert!(b.horizontal(side).contains(c.pos.x));
            prop_assert!(b.vertical.contains(c.pos.y));
            prop_assert_eq!(c.vel.x.abs(), vx.abs());
            prop_assert_eq!(c.vel.y.abs(), vy.abs());
        }
    }
}
