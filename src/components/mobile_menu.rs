use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn glyph(&self) -> &'static str {
        if self.open { "✕" } else { "☰" }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn links_class(&self) -> Classes {
        classes!("nav-links", self.open.then_some("active"))
    }
}

/// Closes the menu on clicks outside both `toggle` and `menu`, and on Escape
/// (which also hands focus back to the toggle button).
#[hook]
pub fn use_menu_dismissal(menu: UseStateHandle<MenuState>, toggle: NodeRef, region: NodeRef) {
    {
        let menu = menu.clone();
        let toggle = toggle.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map(|node| node.contains(target.as_ref()))
                    .unwrap_or(false)
            };
            if menu.open && !inside(&toggle) && !inside(&region) {
                log::debug!("closing menu on outside click");
                menu.set(menu.closed());
            }
        });
    }

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" && menu.open {
            log::debug!("closing menu on escape");
            menu.set(menu.closed());
            if let Some(button) = toggle.cast::<HtmlElement>() {
                if let Err(e) = button.focus() {
                    log::warn!("could not return focus to menu toggle: {:?}", e);
                }
            }
        }
    });
}
