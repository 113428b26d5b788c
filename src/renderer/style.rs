//! Inline styles the overlay depends on
//!
//! Positioning and visibility are set inline so the cards move correctly
//! without any page stylesheet. Colors and fonts stay with the page.

/// A CSS property/value pair
pub type Declaration = (&'static str, String);

fn decl(prop: &'static str, value: &str) -> Declaration {
    (prop, value.to_string())
}

/// Full-viewport, click-through layer behind the page content
pub fn overlay_style() -> Vec<Declaration> {
    vec![
        decl("position", "fixed"),
        decl("inset", "0"),
        decl("pointer-events", "none"),
        decl("overflow", "hidden"),
        decl("z-index", "0"),
    ]
}

/// One card; `left`/`top` are written every frame
pub fn card_style(card_width: f32, accent: &str) -> Vec<Declaration> {
    vec![
        decl("position", "absolute"),
        decl("width", &format!("{}px", card_width)),
        decl("box-sizing", "border-box"),
        decl("pointer-events", "auto"),
        decl("cursor", "pointer"),
        decl("border-left", &format!("3px solid {}", accent)),
    ]
}

/// Hover tooltip above a card, hidden until hovered
pub fn tooltip_style() -> Vec<Declaration> {
    vec![
        decl("position", "absolute"),
        decl("bottom", "100%"),
        decl("left", "50%"),
        decl("transform", "translateX(-50%)"),
        decl("width", "16rem"),
        decl("z-index", "50"),
        display(false),
    ]
}

/// Detail modal backdrop
pub fn detail_style() -> Vec<Declaration> {
    vec![
        decl("position", "fixed"),
        decl("inset", "0"),
        decl("align-items", "center"),
        decl("justify-content", "center"),
        decl("background", "rgba(0, 0, 0, 0.6)"),
        decl("z-index", "50"),
        display(false),
    ]
}

/// Show or hide an element; shown elements use flex so the modal centers
pub fn display(visible: bool) -> Declaration {
    decl("display", if visible { "flex" } else { "none" })
}

/// Show or hide a text block inside a card or the modal
pub fn block_display(visible: bool) -> Declaration {
    decl("display", if visible { "block" } else { "none" })
}
