//! Achievement Drift - floating achievement cards for the hub landing page
//!
//! Core modules:
//! - `achievement`: Achievement records as delivered by the data layer
//! - `sim`: Deterministic card motion (integration, band reflection, collisions)
//! - `driver`: Frame loop lifecycle (animating/stopped, frame handle bookkeeping)
//! - `selection`: Card hit testing and the detail view model
//! - `renderer`: Per-card placement output (and DOM mounting on wasm32)
//! - `platform`: Browser host integration
//! - `settings`: Persisted tuning and accessibility preferences

pub mod achievement;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod selection;
pub mod settings;
pub mod sim;

pub use achievement::{Achievement, TeamSummary};
pub use driver::{FrameHandle, FrameLoop, LoopPhase};
pub use error::{DriftError, Result};
pub use settings::DriftSettings;

use glam::Vec2;

/// Layout and motion constants
pub mod consts {
    /// Card width in CSS pixels
    pub const CARD_WIDTH: f32 = 260.0;
    /// Card height in CSS pixels
    pub const CARD_HEIGHT: f32 = 60.0;
    /// Velocity bound in viewport percent per frame (components drawn from ±SPEED/2)
    pub const SPEED: f32 = 0.05;

    /// Left-side cards travel within [LEFT_MIN, LEFT_MAX] percent horizontally
    pub const LEFT_MIN: f32 = 0.0;
    pub const LEFT_MAX: f32 = 10.0;
    /// Right-side cards travel within [RIGHT_MIN, RIGHT_MAX]
    pub const RIGHT_MIN: f32 = 75.0;
    pub const RIGHT_MAX: f32 = 86.0;
    /// All cards travel within [TOP_MIN, TOP_MAX] vertically
    pub const TOP_MIN: f32 = 10.0;
    pub const TOP_MAX: f32 = 80.0;

    /// Right-side spawn starts here (spawn range is 10% wide)
    pub const RIGHT_SPAWN_MIN: f32 = 85.0;
    pub const SPAWN_WIDTH: f32 = 10.0;

    /// Number of recent achievements shown on the landing page
    pub const RECENT_LIMIT: usize = 8;

    /// Fallback viewport when the host reports nonsense
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;

    /// Accent used when an achievement has no team colors
    pub const DEFAULT_ACCENT: &str = "#10b981";
    pub const DEFAULT_ACCENT_TO: &str = "#14b8a6";
}

/// Convert a viewport-percentage position to CSS pixels
#[inline]
pub fn percent_to_pixels(pct: Vec2, viewport: Vec2) -> Vec2 {
    pct / 100.0 * viewport
}

/// Card extent as a vector
#[inline]
pub fn card_extent() -> Vec2 {
    Vec2::new(consts::CARD_WIDTH, consts::CARD_HEIGHT)
}
