//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Viewport size (read live each frame)
//! - Animation frame scheduling and cancellation
//! - Where the achievement feed comes from

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::achievement::{Achievement, parse_feed};

/// Element holding the server-rendered achievement feed
pub const FEED_ELEMENT_ID: &str = "achievements-data";

/// Load a feed from a JSON file (native binary)
#[cfg(not(target_arch = "wasm32"))]
pub fn read_feed_file(path: &std::path::Path) -> crate::Result<Vec<Achievement>> {
    let json = std::fs::read_to_string(path)?;
    let rows = parse_feed(&json)?;
    log::info!("Read {} achievements from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse a feed, treating a missing or broken one as empty
///
/// The landing page still renders without cards.
pub fn feed_or_empty(json: Option<&str>) -> Vec<Achievement> {
    match json.map(parse_feed) {
        Some(Ok(rows)) => rows,
        Some(Err(e)) => {
            log::warn!("{}", e);
            Vec::new()
        }
        None => {
            log::info!("No achievement feed on this page");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_or_empty() {
        assert!(feed_or_empty(None).is_empty());
        assert!(feed_or_empty(Some("oops")).is_empty());
        let rows = feed_or_empty(Some(r#"[{"id":"1","title":"T","achieved_at":"2026-01-01"}]"#));
        assert_eq!(rows.len(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_read_feed_file_missing() {
        let err = read_feed_file(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, crate::DriftError::Io(_)));
    }
}
