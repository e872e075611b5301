use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("could not set {} on reveal target: {:?}", property, e);
        }
    }
}

fn hide(el: &HtmlElement) {
    set_styles(el, &[
        ("opacity", "0"),
        ("transform", "translateY(30px)"),
        ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
    ]);
}

fn show(el: &HtmlElement) {
    set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")]);
}

fn install(selector: &str) -> Option<Reveal> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                show(&el);
                // Revealed once, never hidden again.
                observer.unobserve(&el);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, skipping reveal: {:?}", e);
            return None;
        }
    };

    let nodes = document.query_selector_all(selector).ok()?;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            hide(&el);
            observer.observe(&el);
        }
    }
    log::debug!("observing {} elements for reveal", nodes.length());

    Some(Reveal { observer, _callback: callback })
}

/// Fades matching elements in the first time they scroll into view.
#[hook]
pub fn use_scroll_reveal(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let reveal = install(selector);
            move || {
                if let Some(reveal) = reveal {
                    reveal.observer.disconnect();
                }
            }
        },
        (),
    );
}
