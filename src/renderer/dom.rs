//! DOM overlay for the floating cards (wasm32 only)
//!
//! One absolutely positioned element per card inside a fixed, click-through
//! container, plus a detail modal that is shown on selection.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::placement::CardPlacement;
use super::style::{
    Declaration, block_display, card_style, detail_style, display, overlay_style, tooltip_style,
};
use crate::selection::{DetailView, Tooltip};

/// Container element id
pub const OVERLAY_ID: &str = "drift-overlay";
/// Detail modal element id
pub const DETAIL_ID: &str = "drift-detail";
/// Detail panel (clicks inside it do not close the modal)
pub const DETAIL_PANEL_ID: &str = "drift-detail-panel";
/// Close button id
pub const DETAIL_CLOSE_ID: &str = "drift-detail-close";

type HoverListener = Closure<dyn FnMut(web_sys::Event)>;

/// Mounted overlay
pub struct DomOverlay {
    container: HtmlElement,
    cards: Vec<HtmlElement>,
    /// mouseenter/mouseleave listeners, dropped with their cards
    hover_listeners: Vec<HoverListener>,
    detail: HtmlElement,
}

fn div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element("div")?;
    el.set_attribute("class", class)?;
    Ok(el.dyn_into()?)
}

fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    if let Err(e) = el.style().set_property(prop, value) {
        log::warn!("Failed to set {}: {:?}", prop, e);
    }
}

fn apply(el: &HtmlElement, style: &[Declaration]) {
    for (prop, value) in style {
        set_style(el, prop, value);
    }
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("Failed to set attribute {}: {:?}", name, e);
    }
}

fn tooltip_element(document: &Document, tooltip: &Tooltip) -> Result<HtmlElement, JsValue> {
    let el = div(document, "drift-card-tooltip")?;
    apply(&el, &tooltip_style());

    let title = div(document, "drift-tooltip-title")?;
    title.set_text_content(Some(&tooltip.title));
    el.append_child(&title)?;

    if let Some(ref description) = tooltip.description {
        let desc = div(document, "drift-tooltip-description")?;
        desc.set_text_content(Some(description));
        el.append_child(&desc)?;
    }

    let date = div(document, "drift-tooltip-date")?;
    date.set_text_content(Some(&tooltip.date));
    el.append_child(&date)?;
    Ok(el)
}

impl DomOverlay {
    /// Create the overlay container and the (hidden) detail modal
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let container = div(document, "drift-overlay")?;
        container.set_id(OVERLAY_ID);
        apply(&container, &overlay_style());
        body.append_child(&container)?;

        let detail = div(document, "drift-detail")?;
        detail.set_id(DETAIL_ID);
        apply(&detail, &detail_style());
        let panel = div(document, "drift-detail-panel")?;
        panel.set_id(DETAIL_PANEL_ID);
        for class in [
            "drift-detail-title",
            "drift-detail-description",
            "drift-detail-by",
            "drift-detail-team",
            "drift-detail-date",
        ] {
            panel.append_child(&div(document, class)?)?;
        }
        let close = document.create_element("button")?;
        close.set_id(DETAIL_CLOSE_ID);
        close.set_text_content(Some("Close"));
        panel.append_child(&close)?;
        detail.append_child(&panel)?;
        body.append_child(&detail)?;

        log::info!("Drift overlay mounted");
        Ok(Self {
            container,
            cards: Vec::new(),
            hover_listeners: Vec::new(),
            detail,
        })
    }

    /// Replace all card elements (new achievement snapshot)
    pub fn rebuild(
        &mut self,
        document: &Document,
        placements: &[CardPlacement],
        card_width: f32,
    ) -> Result<(), JsValue> {
        for card in self.cards.drain(..) {
            card.remove();
        }
        self.hover_listeners.clear();

        for (index, placement) in placements.iter().enumerate() {
            let card = div(document, "drift-card")?;
            card.set_attribute("data-index", &index.to_string())?;
            card.set_attribute("data-id", &placement.id)?;
            apply(&card, &card_style(card_width, &placement.accent));

            let title = div(document, "drift-card-title")?;
            title.set_text_content(Some(&placement.title));
            card.append_child(&title)?;

            if !placement.byline.is_empty() {
                let byline = div(document, "drift-card-byline")?;
                byline.set_text_content(Some(&placement.byline));
                card.append_child(&byline)?;
            }

            if let Some(ref tooltip) = placement.tooltip {
                let tip = tooltip_element(document, tooltip)?;
                card.append_child(&tip)?;
                self.watch_hover(&card, tip)?;
            }

            self.container.append_child(&card)?;
            self.cards.push(card);
        }

        self.update(placements);
        Ok(())
    }

    /// Reveal `tip` while the pointer is over `card`
    fn watch_hover(&mut self, card: &HtmlElement, tip: HtmlElement) -> Result<(), JsValue> {
        for (event, visible) in [("mouseenter", true), ("mouseleave", false)] {
            let tip = tip.clone();
            let listener = HoverListener::new(move |_event: web_sys::Event| {
                let (prop, value) = display(visible);
                set_style(&tip, prop, &value);
            });
            card.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
            self.hover_listeners.push(listener);
        }
        Ok(())
    }

    /// Move cards to their latest positions
    pub fn update(&self, placements: &[CardPlacement]) {
        for (card, placement) in self.cards.iter().zip(placements) {
            set_style(card, "left", &placement.left);
            set_style(card, "top", &placement.top);
        }
    }

    /// Show the detail modal, or hide it with `None`
    pub fn show_detail(&self, view: Option<&DetailView>) {
        let Some(view) = view else {
            let (prop, value) = display(false);
            set_style(&self.detail, prop, &value);
            return;
        };

        let set = |class: &str, text: Option<&str>| {
            let Ok(Some(el)) = self.detail.query_selector(&format!(".{}", class)) else {
                return;
            };
            el.set_text_content(text);
            match el.dyn_into::<HtmlElement>() {
                Ok(el) => {
                    let (prop, value) = block_display(text.is_some());
                    set_style(&el, prop, &value);
                }
                Err(el) => set_attr(&el, "hidden", ""),
            }
        };

        set("drift-detail-title", Some(&view.title));
        set("drift-detail-description", view.description.as_deref());
        set("drift-detail-by", view.achieved_by.as_deref());
        set("drift-detail-team", view.team_name.as_deref());
        set("drift-detail-date", Some(&view.date));

        if let Ok(Some(team)) = self.detail.query_selector(".drift-detail-team") {
            if let Ok(team) = team.dyn_into::<HtmlElement>() {
                set_style(&team, "color", &view.accent);
            }
        }

        let (prop, value) = display(true);
        set_style(&self.detail, prop, &value);
    }

    /// Remove everything this overlay created
    pub fn unmount(self) {
        for card in &self.cards {
            card.remove();
        }
        self.container.remove();
        self.detail.remove();
        log::info!("Drift overlay removed");
    }
}
