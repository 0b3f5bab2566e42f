//! In-page anchor scrolling and scroll-triggered reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is long-form: anchors scroll smoothly under the fixed
//! header, and cards fade in as they enter the viewport. Both are installed
//! once after hydration by [`install_page_effects`]; on the server they do
//! nothing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed header, in pixels.
pub const HEADER_OFFSET: f64 = 80.0;

pub const REVEAL_SELECTOR: &str = ".animate-up, .card, .feature-card, .coach-card, .program-card, .progress-fill";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const CLASS_HIDDEN: &str = "scroll-hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_PROGRESS: &str = "progress-fill";

/// Element id an in-page link points at; `None` for bare `#` and for links
/// leaving the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document-space scroll position that puts an element `element_top` px
/// below the viewport top just under the header.
pub fn scroll_destination(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

/// CSS width for a revealed progress bar from its `data-width` attribute.
pub fn progress_width(data_width: Option<&str>) -> Option<String> {
    data_width.map(str::trim).filter(|w| !w.is_empty()).map(|w| format!("{w}%"))
}

/// Smooth-scroll to `#id` if it exists. Returns whether a scroll happened,
/// so callers only cancel the default jump when it did.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let top = element.get_bounding_client_rect().top();
        let offset = window.page_y_offset().unwrap_or(0.0);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_destination(top, offset));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Hide every reveal target and show each one once it scrolls into view.
pub fn install_page_effects() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        let mut targets = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                let _ = element.class_list().add_1(CLASS_HIDDEN);
                targets.push(element);
            }
        }
        super::observe::observe_once(&targets, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, reveal);
    }
}

#[cfg(feature = "hydrate")]
fn reveal(element: &web_sys::Element) {
    use wasm_bindgen::JsCast;

    let _ = element.class_list().add_1(CLASS_VISIBLE);
    if !element.class_list().contains(CLASS_PROGRESS) {
        return;
    }
    if let (Some(width), Some(html)) =
        (progress_width(element.get_attribute("data-width").as_deref()), element.dyn_ref::<web_sys::HtmlElement>())
    {
        let _ = html.style().set_property("width", &width);
    }
}
