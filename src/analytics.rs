use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

#[derive(Serialize)]
pub struct FormSubmitEvent {
    pub form_name: &'static str,
    pub form_type: &'static str,
}

#[derive(Serialize)]
pub struct WhatsappClickEvent {
    pub button_location: &'static str,
    pub action: &'static str,
}

pub const ENROLL_FORM_SUBMIT: FormSubmitEvent = FormSubmitEvent {
    form_name: "enroll_form",
    form_type: "enrollment",
};

pub const ENROLL_WHATSAPP_CLICK: WhatsappClickEvent = WhatsappClickEvent {
    button_location: "enroll_form",
    action: "contact",
};

fn global_function(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Forwards to the page's tag-manager globals (`gtag`, `fbq`) when present.
pub fn track_event<T: Serialize>(event_name: &str, event_data: &T) {
    let data = match serde_wasm_bindgen::to_value(event_data) {
        Ok(data) => data,
        Err(e) => {
            log::error!("failed to serialize {} event: {}", event_name, e);
            return;
        }
    };
    let name = JsValue::from_str(event_name);

    if let Some(gtag) = global_function("gtag") {
        if let Err(e) = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &name, &data) {
            log::warn!("gtag rejected {}: {:?}", event_name, e);
        }
    }
    if let Some(fbq) = global_function("fbq") {
        if let Err(e) = fbq.call3(&JsValue::NULL, &JsValue::from_str("track"), &name, &data) {
            log::warn!("fbq rejected {}: {:?}", event_name, e);
        }
    }
    log::debug!("tracked {}", event_name);
}
