//! Per-card placement output
//!
//! What the page needs each frame: where every card goes (CSS percentages)
//! and what it looks like.

use crate::achievement::Achievement;
use crate::selection::{Tooltip, byline};
use crate::sim::DriftState;

/// Render data for one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlacement {
    pub id: String,
    /// CSS `left`, e.g. "4.25%"
    pub left: String,
    /// CSS `top`
    pub top: String,
    /// Left border color
    pub accent: String,
    pub title: String,
    pub byline: String,
    /// Hover tooltip (title, description, short date)
    pub tooltip: Option<Tooltip>,
}

/// Format a percentage for a CSS length
#[inline]
pub fn css_percent(v: f32) -> String {
    format!("{}%", v)
}

/// Placements for every card, in card order
///
/// `achievements` must be the list the state was spawned from; cards are
/// matched by id so a reordered list still lines up.
pub fn placements(state: &DriftState, achievements: &[Achievement]) -> Vec<CardPlacement> {
    state
        .cards
        .iter()
        .map(|card| {
            let achievement = achievements.iter().find(|a| a.id == card.id);
            CardPlacement {
                id: card.id.clone(),
                left: css_percent(card.pos.x),
                top: css_percent(card.pos.y),
                accent: achievement
                    .map(|a| a.accent_color().to_string())
                    .unwrap_or_else(|| crate::consts::DEFAULT_ACCENT.to_string()),
                title: achievement.map(|a| a.title.clone()).unwrap_or_default(),
                byline: achievement.map(byline).unwrap_or_default(),
                tooltip: achievement.map(Tooltip::from),
            }
        })
        .collect()
}
