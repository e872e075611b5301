use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::mobile_menu::{use_menu_dismissal, MenuState};
use crate::config;
use crate::content::NavEntry;
use crate::utils::rate_limit::Throttle;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLLED_AFTER_PX
}

/// Section under the scroll-spy probe. Overlapping ranges resolve to the
/// later section; `None` means the caller keeps its previous active link.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + config::SCROLL_SPY_PROBE_PX;
    sections
        .iter()
        .filter(|s| {
            let top = s.top - config::SECTION_LEAD_PX;
            probe >= top && probe < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

fn measure_sections(document: &web_sys::Document) -> Vec<SectionBounds> {
    let mut bounds = Vec::new();
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return bounds;
    };
    for i in 0..nodes.length() {
        if let Some(section) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            bounds.push(SectionBounds {
                id: section.id(),
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            });
        }
    }
    bounds
}

fn smooth_scroll_to(section_id: &str, header: &NodeRef) {
    let Some(window) = web_sys::window() else { return };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(section_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        log::warn!("no section #{} to scroll to", section_id);
        return;
    };
    let header_height = header
        .cast::<HtmlElement>()
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(target.offset_top() as f64, header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub entries: &'static [NavEntry],
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| None::<String>);
    let menu = use_state_eq(MenuState::default);
    let header_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let links_ref = use_node_ref();

    use_menu_dismissal(menu.clone(), toggle_ref.clone(), links_ref.clone());

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();
            let throttle = Throttle::new(config::SCROLL_THROTTLE_MS);

            let scroll_callback = Closure::wrap(Box::new(move || {
                let window = window_clone.clone();
                let document = document.clone();
                let is_scrolled = is_scrolled.clone();
                let active_section = active_section.clone();
                throttle.call(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(header_scrolled(scroll_y));
                    let sections = measure_sections(&document);
                    if let Some(id) = current_section(scroll_y, &sections) {
                        active_section.set(Some(id.to_string()));
                    }
                });
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            log::debug!("menu {}", if next.open { "opened" } else { "closed" });
            menu.set(next);
        })
    };

    let links = props.entries.iter().map(|entry| {
        let onclick = {
            let menu = menu.clone();
            let header_ref = header_ref.clone();
            let section_id = entry.section_id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                smooth_scroll_to(section_id, &header_ref);
                menu.set(menu.closed());
            })
        };
        let is_active = active_section.as_deref() == Some(entry.section_id);
        html! {
            <li>
                <a
                    class={classes!("nav-link", is_active.then_some("active"))}
                    href={format!("#{}", entry.section_id)}
                    {onclick}
                >
                    {entry.label}
                </a>
            </li>
        }
    }).collect::<Html>();

    html! {
        <header id="header" ref={header_ref} class={classes!("header", (*is_scrolled).then_some("scrolled"))}>
            <nav class="nav-container">
                <a class="logo" href="#home">{"Sir Qubair"}</a>
                <button
                    ref={toggle_ref}
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-controls="nav-links"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    {menu.glyph()}
                </button>
                <ul id="nav-links" ref={links_ref} class={menu.links_class()}>
                    { links }
                </ul>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id: id.to_string(), top, height }
    }

    fn page() -> Vec<SectionBounds> {
        vec![
            section("home", 0.0, 700.0),
            section("about", 700.0, 600.0),
            section("faq", 1300.0, 500.0),
        ]
    }

    #[test]
    fn test_header_scrolled_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(51.0));
    }

    #[test]
    fn test_probe_range_uses_lead_and_offset() {
        let sections = page();
        // probe = 450 + 100 = 550, about starts at 700 - 150 = 550
        assert_eq!(current_section(450.0, &sections), Some("about"));
        assert_eq!(current_section(449.0, &sections), Some("home"));
        assert_eq!(current_section(0.0, &sections), Some("home"));
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 200.0, 400.0)];
        assert_eq!(current_section(100.0, &sections), Some("b"));
    }

    #[test]
    fn test_gap_below_last_section_matches_nothing() {
        let sections = page();
        // faq covers probe [1150, 1650)
        assert_eq!(current_section(1549.0, &sections), Some("faq"));
        assert_eq!(current_section(1550.0, &sections), None);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1300.0, 80.0), 1220.0);
    }
}
