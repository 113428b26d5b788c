//! Card selection and the achievement detail view
//!
//! Clicking a card raises a selection; the detail view shows the
//! achievement until the backdrop or Close is clicked.

use glam::Vec2;

use crate::achievement::Achievement;
use crate::sim::{Aabb, DriftState, Viewport};

/// Index of the topmost card under `point` (pixels), if any
///
/// Later cards are drawn on top of earlier ones.
pub fn hit_test(state: &DriftState, point: Vec2, viewport: &Viewport, extent: Vec2) -> Option<usize> {
    state
        .cards
        .iter()
        .enumerate()
        .rev()
        .find(|(_, card)| Aabb::from_card(card.pos, viewport, extent).contains(point))
        .map(|(index, _)| index)
}

/// Currently selected achievement
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<Achievement>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view for an achievement
    pub fn select(&mut self, achievement: &Achievement) {
        log::info!("Selected achievement {}", achievement.id);
        self.selected = Some(achievement.clone());
    }

    /// Close the detail view
    pub fn clear(&mut self) {
        if let Some(prev) = self.selected.take() {
            log::info!("Closed achievement {}", prev.id);
        }
    }

    pub fn selected(&self) -> Option<&Achievement> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// Long form date for the detail view, e.g. "October 19, 2026"
pub fn long_date(achievement: &Achievement) -> String {
    match achievement.achieved_date() {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(e) => {
            log::warn!("{}", e);
            achievement.achieved_at.clone()
        }
    }
}

/// Short date for the hover tooltip, e.g. "10/19/2026"
pub fn short_date(achievement: &Achievement) -> String {
    match achievement.achieved_date() {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => achievement.achieved_at.clone(),
    }
}

/// Detail modal contents
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub description: Option<String>,
    /// "Achieved by" line
    pub achieved_by: Option<String>,
    pub team_name: Option<String>,
    pub accent: String,
    pub date: String,
}

impl From<&Achievement> for DetailView {
    fn from(a: &Achievement) -> Self {
        Self {
            title: a.title.clone(),
            description: a.description.clone(),
            achieved_by: a.person_name.clone(),
            team_name: a.team.as_ref().map(|t| t.name.clone()),
            accent: a.accent_color().to_string(),
            date: long_date(a),
        }
    }
}

/// Hover tooltip contents
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
}

impl From<&Achievement> for Tooltip {
    fn from(a: &Achievement) -> Self {
        Self {
            title: a.title.clone(),
            description: a.description.clone(),
            date: short_date(a),
        }
    }
}

/// Card subtitle: "person • team", either part optional
pub fn byline(a: &Achievement) -> String {
    match (a.person_name.as_deref(), a.team.as_ref()) {
        (Some(person), Some(team)) => format!("{} • {}", person, team.name),
        (Some(person), None) => person.to_string(),
        (None, Some(team)) => team.name.clone(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::TeamSummary;
    use crate::card_extent;
    use crate::sim::{Card, Side};

    fn sample() -> Achievement {
        let mut a = Achievement::new("a1", "Zero-downtime deploys", "2026-10-19T08:00:00Z");
        a.description = Some("Blue/green rollout for the API tier".into());
        a.person_name = Some("Riley".into());
        a.team = Some(TeamSummary {
            id: Some("t1".into()),
            name: "Platform".into(),
            color_from: Some("#f59e0b".into()),
            color_to: Some("#ef4444".into()),
        });
        a
    }

    #[test]
    fn test_detail_view() {
        let view = DetailView::from(&sample());
        assert_eq!(view.title, "Zero-downtime deploys");
        assert_eq!(view.achieved_by.as_deref(), Some("Riley"));
        assert_eq!(view.team_name.as_deref(), Some("Platform"));
        assert_eq!(view.accent, "#f59e0b");
        assert_eq!(view.date, "October 19, 2026");
    }

    #[test]
    fn test_tooltip_and_fallback_dates() {
        assert_eq!(Tooltip::from(&sample()).date, "10/19/2026");

        let undated = Achievement::new("x", "Mystery", "sometime");
        assert_eq!(Tooltip::from(&undated).date, "sometime");
        assert_eq!(DetailView::from(&undated).date, "sometime");
    }

    #[test]
    fn test_byline() {
        let mut a = sample();
        assert_eq!(byline(&a), "Riley • Platform");
        a.team = None;
        assert_eq!(byline(&a), "Riley");
        a.person_name = None;
        assert_eq!(byline(&a), "");
    }

    #[test]
    fn test_selection_open_close() {
        let mut selection = Selection::new();
        assert!(!selection.is_open());
        selection.select(&sample());
        assert_eq!(selection.selected().map(|a| a.id.as_str()), Some("a1"));
        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let viewport = Viewport::sanitized(1000.0, 1000.0);
        let state = DriftState {
            seed: 0,
            frame: 0,
            cards: vec![
                Card { id: "under".into(), pos: Vec2::new(0.0, 10.0), vel: Vec2::ZERO, side: Side::Left },
                Card { id: "over".into(), pos: Vec2::new(5.0, 12.0), vel: Vec2::ZERO, side: Side::Left },
            ],
        };
        // Inside both boxes
        assert_eq!(hit_test(&state, Vec2::new(100.0, 130.0), &viewport, card_extent()), Some(1));
        // Only inside the first
        assert_eq!(hit_test(&state, Vec2::new(10.0, 105.0), &viewport, card_extent()), Some(0));
        // Nowhere
        assert_eq!(hit_test(&state, Vec2::new(600.0, 600.0), &viewport, card_extent()), None);
    }
}
