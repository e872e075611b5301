//! Campus picker with two layouts: desktop shows one active card beside the
//! option list, mobile (≤ 480px) expands an accordion under the tapped option.
//!
//! [`LocationSelection`] is the single source of truth. Which layout renders the
//! selection is derived from its `viewport`, so card and accordion states can
//! never both be active.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::content::Campus;
use crate::utils::rate_limit::Debounce;

pub const GENERIC_ENROLL_LABEL: &str = "Enroll for Classes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width <= config::MOBILE_MAX_WIDTH_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Read from the window each time, never cached.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(Self::from_width)
            .unwrap_or(ViewportClass::Desktop)
    }
}

/// Value written into the enrollment form's `#mode` field for a location.
pub fn mode_for_location(slug: &str) -> Option<&'static str> {
    match slug {
        "dha" => Some("DHA"),
        "bahadurabad" => Some("Bahadurabad"),
        "gulshan" => Some("Gulshan"),
        "johar" => Some("Johar"),
        "online" => Some("Online"),
        _ => None,
    }
}

fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What a click does to the shared mode field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeWrite {
    Set(&'static str),
    /// Back to the empty "choose a mode" default.
    Reset,
    Untouched,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationSelection {
    slugs: Vec<&'static str>,
    pub viewport: ViewportClass,
    pub selected: Option<usize>,
}

impl LocationSelection {
    pub fn new(slugs: Vec<&'static str>, viewport: ViewportClass) -> Self {
        let mut selection = Self { slugs, viewport, selected: None };
        if viewport == ViewportClass::Desktop {
            selection.ensure_desktop_default();
        }
        selection
    }

    fn ensure_desktop_default(&mut self) {
        if self.selected.is_none() && !self.slugs.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn selected_slug(&self) -> Option<&'static str> {
        self.selected.map(|i| self.slugs[i])
    }

    /// Crossing into desktop guarantees an active card. Crossing into mobile
    /// keeps the selection, shown as that option's open accordion.
    pub fn resize(&mut self, viewport: ViewportClass) {
        if viewport == self.viewport {
            return;
        }
        log::debug!("location selector switching to {:?}", viewport);
        self.viewport = viewport;
        if viewport == ViewportClass::Desktop {
            self.ensure_desktop_default();
        }
    }

    pub fn click(&mut self, slug: &str, viewport: ViewportClass) -> ModeWrite {
        self.resize(viewport);
        let Some(index) = self.slugs.iter().position(|s| *s == slug) else {
            log::warn!("click on unknown location {}", slug);
            return ModeWrite::Untouched;
        };

        match self.viewport {
            ViewportClass::Mobile if self.selected == Some(index) => {
                self.selected = None;
                return ModeWrite::Reset;
            }
            _ => self.selected = Some(index),
        }

        mode_for_location(slug).map(ModeWrite::Set).unwrap_or(ModeWrite::Untouched)
    }

    pub fn option_active(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn accordion_open(&self, index: usize) -> bool {
        self.viewport == ViewportClass::Mobile && self.option_active(index)
    }

    pub fn card_active(&self, index: usize) -> bool {
        self.viewport == ViewportClass::Desktop && self.option_active(index)
    }

    pub fn enroll_label(&self, index: usize) -> String {
        if self.accordion_open(index) {
            format!("Enroll for {} Classes", capitalize(self.slugs[index]))
        } else {
            GENERIC_ENROLL_LABEL.to_string()
        }
    }
}

/// An event that reached a `.location-option`, possibly bubbled from inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTrigger<'a> {
    Click { from_enroll_link: bool },
    Key { key: &'a str, on_option: bool },
}

impl OptionTrigger<'_> {
    /// Clicks anywhere in the option toggle it except on its enroll link.
    /// Enter and Space only count while the option itself has focus.
    pub fn activates(&self) -> bool {
        match *self {
            OptionTrigger::Click { from_enroll_link } => !from_enroll_link,
            OptionTrigger::Key { key, on_option } => on_option && (key == "Enter" || key == " "),
        }
    }
}

fn event_element(e: &Event) -> Option<Element> {
    e.target()?.dyn_into::<Element>().ok()
}

fn from_enroll_link(e: &Event) -> bool {
    event_element(e)
        .and_then(|el| el.closest(".enroll-btn").ok().flatten())
        .is_some()
}

fn on_option(e: &Event) -> bool {
    event_element(e)
        .and_then(|el| el.matches(".location-option").ok())
        .unwrap_or(false)
}

pub enum LocationAction {
    Click { slug: &'static str, viewport: ViewportClass },
    Resize(ViewportClass),
}

impl Reducible for LocationSelection {
    type Action = LocationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LocationAction::Click { slug, viewport } => {
                next.click(slug, viewport);
            }
            LocationAction::Resize(viewport) => next.resize(viewport),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LocationSelectorProps {
    pub campuses: &'static [Campus],
    pub on_mode_change: Callback<String>,
}

#[function_component(LocationSelector)]
pub fn location_selector(props: &LocationSelectorProps) -> Html {
    let campuses = props.campuses;
    let selection = use_reducer(move || {
        LocationSelection::new(campuses.iter().map(|c| c.slug).collect(), ViewportClass::current())
    });

    {
        let dispatcher = selection.dispatcher();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let debounce = Debounce::new(config::RESIZE_DEBOUNCE_MS);
            let debounce_clone = debounce.clone();

            let resize_callback = Closure::wrap(Box::new(move || {
                let dispatcher = dispatcher.clone();
                debounce_clone.call(move || {
                    dispatcher.dispatch(LocationAction::Resize(ViewportClass::current()));
                });
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                debounce.cancel();
                window.remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let options = campuses.iter().enumerate().map(|(i, campus)| {
        let activate = {
            let selection = selection.clone();
            let on_mode_change = props.on_mode_change.clone();
            let slug = campus.slug;
            Callback::from(move |_: ()| {
                let viewport = ViewportClass::current();
                // Preview on a copy to learn what the mode field should show;
                // the reducer applies the same transition to the live state.
                let mut preview = (*selection).clone();
                let write = preview.click(slug, viewport);
                selection.dispatch(LocationAction::Click { slug, viewport });
                log::info!("location {:?} selected ({:?})", preview.selected_slug(), viewport);
                match write {
                    ModeWrite::Set(mode) => on_mode_change.emit(mode.to_string()),
                    ModeWrite::Reset => on_mode_change.emit(String::new()),
                    ModeWrite::Untouched => {}
                }
            })
        };
        let onclick = {
            let activate = activate.clone();
            Callback::from(move |e: MouseEvent| {
                if (OptionTrigger::Click { from_enroll_link: from_enroll_link(&e) }).activates() {
                    activate.emit(());
                }
            })
        };
        let onkeydown = Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if (OptionTrigger::Key { key: &key, on_option: on_option(&e) }).activates() {
                e.prevent_default();
                activate.emit(());
            }
        });

        html! {
            <div
                class={classes!("location-option", selection.option_active(i).then_some("active"))}
                data-location={campus.slug}
                role="button"
                tabindex="0"
                aria-pressed={if selection.option_active(i) { "true" } else { "false" }}
                {onclick}
                {onkeydown}
            >
                <span class="location-name">{campus.name}</span>
                <div class={classes!("location-details-accordion", selection.accordion_open(i).then_some("active"))}>
                    <p class="location-address">{campus.address}</p>
                    <p class="location-schedule">{campus.schedule}</p>
                    <a class="enroll-btn" href="#enroll">{selection.enroll_label(i)}</a>
                </div>
            </div>
        }
    }).collect::<Html>();

    let cards = campuses.iter().enumerate().map(|(i, campus)| {
        html! {
            <div
                id={format!("{}-card", campus.slug)}
                class={classes!("location-card", selection.card_active(i).then_some("active"))}
            >
                <h3>{campus.name}</h3>
                <p class="location-address">{campus.address}</p>
                <p class="location-schedule">{campus.schedule}</p>
                <a class="enroll-btn" href="#enroll">{format!("Enroll for {} Classes", campus.name)}</a>
            </div>
        }
    }).collect::<Html>();

    html! {
        <div class="location-selector">
            <div class="location-options">{ options }</div>
            <div class="location-cards">{ cards }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs() -> Vec<&'static str> {
        vec!["dha", "bahadurabad", "gulshan", "johar", "online"]
    }

    fn no_double_render(s: &LocationSelection) -> bool {
        (0..5).all(|i| !(s.accordion_open(i) && s.card_active(i)))
            && (0..5).filter(|&i| s.accordion_open(i)).count() <= 1
            && (0..5).filter(|&i| s.card_active(i)).count() <= 1
            && ((0..5).any(|i| s.accordion_open(i)) as u8 + (0..5).any(|i| s.card_active(i)) as u8) <= 1
    }

    #[test]
    fn test_viewport_threshold() {
        assert_eq!(ViewportClass::from_width(480.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(481.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_desktop_load_activates_first_card() {
        let s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        assert_eq!(s.selected_slug(), Some("dha"));
        assert!(s.card_active(0));
    }

    #[test]
    fn test_mobile_load_starts_closed() {
        let s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        assert_eq!(s.selected, None);
        assert_eq!(s.enroll_label(0), GENERIC_ENROLL_LABEL);
    }

    #[test]
    fn test_mobile_tap_twice_toggles_off() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        assert_eq!(s.click("dha", ViewportClass::Mobile), ModeWrite::Set("DHA"));
        assert!(s.accordion_open(0));
        assert_eq!(s.enroll_label(0), "Enroll for Dha Classes");

        assert_eq!(s.click("dha", ViewportClass::Mobile), ModeWrite::Reset);
        assert_eq!(s.selected, None);
        assert_eq!(s.enroll_label(0), "Enroll for Classes");
    }

    #[test]
    fn test_mobile_tap_other_moves_accordion() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        s.click("dha", ViewportClass::Mobile);
        s.click("johar", ViewportClass::Mobile);
        assert!(!s.accordion_open(0));
        assert!(s.accordion_open(3));
        assert_eq!(s.enroll_label(3), "Enroll for Johar Classes");
        assert_eq!(s.enroll_label(0), GENERIC_ENROLL_LABEL);
    }

    #[test]
    fn test_desktop_click_activates_matching_card() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        assert_eq!(s.click("gulshan", ViewportClass::Desktop), ModeWrite::Set("Gulshan"));
        let active: Vec<usize> = (0..5).filter(|&i| s.card_active(i)).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(format!("{}-card", s.selected_slug().unwrap()), "gulshan-card");
    }

    #[test]
    fn test_desktop_click_never_toggles_off() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        s.click("online", ViewportClass::Desktop);
        assert_eq!(s.click("online", ViewportClass::Desktop), ModeWrite::Set("Online"));
        assert_eq!(s.selected_slug(), Some("online"));
    }

    #[test]
    fn test_unknown_location_leaves_mode_untouched() {
        let mut s = LocationSelection::new(vec!["dha", "clifton"], ViewportClass::Desktop);
        assert_eq!(s.click("clifton", ViewportClass::Desktop), ModeWrite::Untouched);
        assert_eq!(s.selected_slug(), Some("clifton"));
        assert_eq!(s.click("nowhere", ViewportClass::Desktop), ModeWrite::Untouched);
        assert_eq!(s.selected_slug(), Some("clifton"));
    }

    #[test]
    fn test_resize_to_desktop_defaults_when_nothing_selected() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        s.resize(ViewportClass::Desktop);
        assert!(s.card_active(0));
        assert!((0..5).all(|i| !s.accordion_open(i)));
    }

    #[test]
    fn test_resize_to_desktop_keeps_selection() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        s.click("johar", ViewportClass::Mobile);
        s.resize(ViewportClass::Desktop);
        assert!(s.card_active(3));
        assert!(!s.accordion_open(3));
    }

    #[test]
    fn test_resize_to_mobile_hides_cards() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        s.click("bahadurabad", ViewportClass::Desktop);
        s.resize(ViewportClass::Mobile);
        assert!((0..5).all(|i| !s.card_active(i)));
        assert!(s.accordion_open(1));
        assert!((0..5).filter(|&i| i != 1).all(|i| !s.accordion_open(i)));
    }

    #[test]
    fn test_click_after_unobserved_resize_uses_current_viewport() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        // dha is desktop-active; the first mobile tap on it closes it
        assert_eq!(s.click("dha", ViewportClass::Mobile), ModeWrite::Reset);
        assert_eq!(s.viewport, ViewportClass::Mobile);
        assert_eq!(s.selected, None);
    }

    #[test]
    fn test_single_representation_through_mixed_sequence() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Desktop);
        let steps = [
            LocationAction::Click { slug: "gulshan", viewport: ViewportClass::Desktop },
            LocationAction::Resize(ViewportClass::Mobile),
            LocationAction::Click { slug: "gulshan", viewport: ViewportClass::Mobile },
            LocationAction::Click { slug: "online", viewport: ViewportClass::Mobile },
            LocationAction::Resize(ViewportClass::Desktop),
            LocationAction::Resize(ViewportClass::Desktop),
        ];
        for step in steps {
            match step {
                LocationAction::Click { slug, viewport } => {
                    s.click(slug, viewport);
                }
                LocationAction::Resize(viewport) => s.resize(viewport),
            }
            assert!(no_double_render(&s));
        }
        assert_eq!(s.selected_slug(), Some("online"));
    }

    #[test]
    fn test_enroll_link_inside_option_does_not_toggle() {
        assert!(OptionTrigger::Click { from_enroll_link: false }.activates());
        assert!(!OptionTrigger::Click { from_enroll_link: true }.activates());
        assert!(!OptionTrigger::Key { key: "Enter", on_option: false }.activates());
        assert!(!OptionTrigger::Key { key: " ", on_option: false }.activates());
    }

    #[test]
    fn test_enter_and_space_activate_focused_option() {
        assert!(OptionTrigger::Key { key: "Enter", on_option: true }.activates());
        assert!(OptionTrigger::Key { key: " ", on_option: true }.activates());
        assert!(!OptionTrigger::Key { key: "Tab", on_option: true }.activates());
        assert!(!OptionTrigger::Key { key: "a", on_option: true }.activates());
    }

    #[test]
    fn test_enter_on_open_accordion_link_keeps_it_open() {
        let mut s = LocationSelection::new(slugs(), ViewportClass::Mobile);
        s.click("dha", ViewportClass::Mobile);
        let trigger = OptionTrigger::Key { key: "Enter", on_option: false };
        if trigger.activates() {
            s.click("dha", ViewportClass::Mobile);
        }
        assert!(s.accordion_open(0));
        assert_eq!(s.enroll_label(0), "Enroll for Dha Classes");
    }

    #[test]
    fn test_reducer_skips_rerender_on_same_class_resize() {
        let s = Rc::new(LocationSelection::new(slugs(), ViewportClass::Desktop));
        let next = s.clone().reduce(LocationAction::Resize(ViewportClass::Desktop));
        assert!(Rc::ptr_eq(&s, &next));
    }
}
