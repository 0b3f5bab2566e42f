//! One-shot viewport visibility callbacks over `IntersectionObserver`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Call `on_visible` for each target the first time it intersects the
/// viewport, then stop observing it.
///
/// The observer lives for the rest of the page; its callback is leaked.
pub fn observe_once<F>(targets: &[Element], threshold: f64, root_margin: &str, on_visible: F)
where
    F: Fn(&Element) + 'static,
{
    if targets.is_empty() {
        return;
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(e) => tracing::warn!(error = ?e, "intersection observer unavailable"),
    }
}
