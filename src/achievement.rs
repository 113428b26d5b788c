//! Achievement records
//!
//! Rows as returned by the data store's `achievements` query joined with
//! `teams`. The drift layer treats a list of these as a snapshot.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ACCENT, DEFAULT_ACCENT_TO};
use crate::error::{DriftError, Result};

/// The team an achievement belongs to (only the fields the cards use)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color_from: Option<String>,
    #[serde(default)]
    pub color_to: Option<String>,
}

/// A single achievement row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub contributor_id: Option<String>,
    #[serde(default)]
    pub person_name: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub achieved_at: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub team: Option<TeamSummary>,
}

impl Achievement {
    /// Minimal record, mostly for tests and the native demo
    pub fn new(id: impl Into<String>, title: impl Into<String>, achieved_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            team_id: None,
            contributor_id: None,
            person_name: None,
            achieved_at: achieved_at.into(),
            created_at: None,
            team: None,
        }
    }

    /// Date the achievement was reached
    pub fn achieved_date(&self) -> Result<NaiveDate> {
        parse_date(&self.achieved_at)
    }

    /// Instant the achievement was reached, for ordering
    pub fn achieved_instant(&self) -> Result<DateTime<Utc>> {
        parse_instant(&self.achieved_at)
    }

    /// Left border / team label color
    pub fn accent_color(&self) -> &str {
        self.team
            .as_ref()
            .and_then(|t| t.color_from.as_deref())
            .unwrap_or(DEFAULT_ACCENT)
    }

    /// Team gradient, or the default emerald/teal one
    pub fn gradient_css(&self) -> String {
        match self.team.as_ref() {
            Some(TeamSummary {
                color_from: Some(from),
                color_to: Some(to),
                ..
            }) => format!("linear-gradient(135deg, {}, {})", from, to),
            _ => format!("linear-gradient(135deg, {}, {})", DEFAULT_ACCENT, DEFAULT_ACCENT_TO),
        }
    }
}

/// Parse `achieved_at`: full RFC 3339 first, then a bare date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    // Postgres sometimes hands back "2024-05-01 12:00:00+00" style values
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Ok(date);
        }
    }
    Err(DriftError::InvalidTimestamp(raw.to_string()))
}

/// Parse `achieved_at` to a UTC instant; a bare date means midnight UTC
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Postgres text form, e.g. "2024-05-01 12:00:00+00"
    for format in ["%Y-%m-%d %H:%M:%S%#z", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    let date = parse_date(raw)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a feed of achievement rows
pub fn parse_feed(json: &str) -> Result<Vec<Achievement>> {
    let rows: Vec<Achievement> = serde_json::from_str(json)?;
    log::debug!("Parsed achievement feed ({} rows)", rows.len());
    Ok(rows)
}

/// Most recent `limit` achievements, newest first
///
/// Rows with unparsable timestamps sort after all dated rows; ties keep
/// their input order.
pub fn recent(list: &[Achievement], limit: usize) -> Vec<Achievement> {
    let mut dated: Vec<(Option<DateTime<Utc>>, &Achievement)> =
        list.iter().map(|a| (a.achieved_instant().ok(), a)).collect();

    dated.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    dated.into_iter().take(limit).map(|(_, a)| a.clone()).collect()
}
