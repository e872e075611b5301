use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::{window, ErrorEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod content;
mod utils {
    pub mod rate_limit;
}
mod components {
    pub mod enroll_form;
    pub mod faq;
    pub mod location;
    pub mod mobile_menu;
    pub mod nav;
    pub mod reveal;
    pub mod slideshow;
    pub mod toast;
    pub mod typing;
    pub mod validator;
}
mod pages {
    pub mod landing;
}

use components::toast::ToastProvider;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn page_error_summary(message: &str, filename: &str, lineno: u32) -> String {
    if filename.is_empty() {
        message.to_string()
    } else {
        format!("{} ({}:{})", message, filename, lineno)
    }
}

/// Logs uncaught script errors for the rest of the page's lifetime.
fn install_error_listener() {
    let Some(window) = window() else { return };

    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        let summary = page_error_summary(&e.message(), &e.filename(), e.lineno());
        gloo_console::error!("JavaScript error:", summary);
    }) as Box<dyn FnMut(ErrorEvent)>);

    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not attach page error listener");
    }
    on_error.forget();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    install_error_listener();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
