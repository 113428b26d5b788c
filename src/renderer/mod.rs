//! Card rendering
//!
//! `placement` and `style` are platform independent; `dom` applies them
//! to the page.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod placement;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub use dom::DomOverlay;
pub use placement::{CardPlacement, css_percent, placements};
