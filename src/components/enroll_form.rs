use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FocusEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::analytics::{self, ENROLL_FORM_SUBMIT, ENROLL_WHATSAPP_CLICK};
use crate::components::toast::{use_toaster, ToastKind};
use crate::components::validator::{validate_field, should_revalidate_on_input, FieldError, FieldKind, FieldSpec};
use crate::config;

pub const MODE_FIELD: &str = "mode";
pub const REQUIRED_FIELDS_TOAST: &str = "Please fill in all required fields.";
pub const SUBMIT_SUCCESS_TOAST: &str = "Thank you for your interest! We will contact you soon.";

pub type FieldErrors = BTreeMap<&'static str, FieldError>;

/// Field values gathered at submit/handoff time. Missing fields read as "".
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

/// Validates every required field; an empty map means the draft can be sent.
pub fn check_submission(fields: &[FieldSpec], draft: &FormDraft) -> Result<(), FieldErrors> {
    let errors: FieldErrors = fields
        .iter()
        .filter(|f| f.required)
        .filter_map(|f| validate_field(f, draft.get(f.name)).err().map(|e| (f.name, e)))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn whatsapp_message(draft: &FormDraft) -> String {
    format!(
        "Hi Sir Qubair, I'd like to enroll in a group class. Here are my details:\n\n\
         - Name: {}\n\
         - Contact Number: {}\n\
         - City/Country: {}\n\
         - Level (AS/A2/O Levels/IGCSE/Edexcel): {}\n\
         - Mode (DHA/Bahadurabad/Gulshan/Johar/Online): {}\n\
         - Exam Board (Cambridge/Edexcel): {}\n\
         \nMessage: {}",
        draft.get("full-name"),
        draft.get("contact-number"),
        draft.get("country-city"),
        draft.get("curriculum-focus"),
        draft.get(MODE_FIELD),
        draft.get("exam-board"),
        draft.get("message"),
    )
}

/// Percent-encodes like the browser's `encodeURIComponent`, which leaves
/// `!'()*` alone on top of the unreserved set `urlencoding` keeps.
pub fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

pub fn whatsapp_url(draft: &FormDraft) -> String {
    format!(
        "{}?text={}",
        config::whatsapp_base_url(),
        encode_uri_component(&whatsapp_message(draft))
    )
}

/// Value each `<select>` must show. Option `selected` attributes stop
/// applying once the user has picked by hand, so these are pushed onto the
/// elements after every render that changes them.
pub fn select_values(fields: &[FieldSpec], draft: &FormDraft) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter(|f| matches!(f.kind, FieldKind::Select(_)))
        .map(|f| (f.name, draft.get(f.name).to_string()))
        .collect()
}

fn sync_selects(form: &Element, values: &[(&'static str, String)]) {
    for (name, value) in values {
        let select = form
            .query_selector(&format!("select[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
        match select {
            Some(select) if select.value() != *value => select.set_value(value),
            Some(_) => {}
            None => log::warn!("select {} not found in enrollment form", name),
        }
    }
}

fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("could not open WhatsApp link: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct EnrollFormProps {
    pub fields: &'static [FieldSpec],
    /// Shared with the location selector.
    pub mode: String,
    pub on_mode_change: Callback<String>,
}

#[function_component(EnrollForm)]
pub fn enroll_form(props: &EnrollFormProps) -> Html {
    let draft = use_state(FormDraft::default);
    let errors = use_state(FieldErrors::new);
    let toaster = use_toaster();

    let form_ref = use_node_ref();

    let current_draft = (*draft).clone().with(MODE_FIELD, props.mode.clone());

    {
        let form_ref = form_ref.clone();
        use_effect_with_deps(
            move |values: &Vec<(&'static str, String)>| {
                if let Some(form) = form_ref.cast::<Element>() {
                    sync_selects(&form, values);
                }
                || ()
            },
            select_values(props.fields, &current_draft),
        );
    }

    // Shared gate for submit and the WhatsApp handoff.
    let gate = {
        let errors = errors.clone();
        let toaster = toaster.clone();
        let fields = props.fields;
        move |draft: &FormDraft| -> bool {
            match check_submission(fields, draft) {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    true
                }
                Err(found) => {
                    log::info!("enrollment blocked, {} invalid field(s)", found.len());
                    errors.set(found);
                    toaster.show(REQUIRED_FIELDS_TOAST, ToastKind::Error);
                    false
                }
            }
        }
    };

    let onsubmit = {
        let draft = draft.clone();
        let toaster = toaster.clone();
        let on_mode_change = props.on_mode_change.clone();
        let gate = gate.clone();
        let submitted = current_draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !gate(&submitted) {
                return;
            }
            match serde_json::to_string(&submitted) {
                Ok(json) => log::info!("enrollment submitted: {}", json),
                Err(err) => log::warn!("could not serialize enrollment: {}", err),
            }
            analytics::track_event("form_submit", &ENROLL_FORM_SUBMIT);
            toaster.show(SUBMIT_SUCCESS_TOAST, ToastKind::Success);
            draft.set(FormDraft::default());
            on_mode_change.emit(String::new());
        })
    };

    let on_whatsapp = {
        let handoff = current_draft.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !gate(&handoff) {
                return;
            }
            log::info!("handing enrollment off to WhatsApp");
            open_in_new_tab(&whatsapp_url(&handoff));
            analytics::track_event("whatsapp_click", &ENROLL_WHATSAPP_CLICK);
        })
    };

    let field_groups = props.fields.iter().map(|spec| {
        let spec = *spec;
        let value = current_draft.get(spec.name).to_string();
        let error = errors.get(spec.name).copied();

        let on_value = {
            let draft = draft.clone();
            let errors = errors.clone();
            let on_mode_change = props.on_mode_change.clone();
            Callback::from(move |e: Event| {
                let Some(value) = event_value(&e) else { return };
                if should_revalidate_on_input(errors.contains_key(spec.name)) {
                    let mut next = (*errors).clone();
                    match validate_field(&spec, &value) {
                        Ok(()) => next.remove(spec.name),
                        Err(err) => next.insert(spec.name, err),
                    };
                    errors.set(next);
                }
                if spec.name == MODE_FIELD {
                    on_mode_change.emit(value);
                } else {
                    let mut next = (*draft).clone();
                    next.set(spec.name, value);
                    draft.set(next);
                }
            })
        };
        let onblur = {
            let errors = errors.clone();
            let value = value.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = (*errors).clone();
                match validate_field(&spec, &value) {
                    Ok(()) => next.remove(spec.name),
                    Err(err) => next.insert(spec.name, err),
                };
                errors.set(next);
            })
        };
        let oninput = on_value.reform(|e: InputEvent| Event::from(e));
        let error_class = error.is_some().then_some("error");

        let control = match spec.kind {
            FieldKind::Select(choices) => html! {
                <select
                    id={spec.name}
                    name={spec.name}
                    required={spec.required}
                    class={classes!("form-control", error_class)}
                    onchange={on_value}
                    {onblur}
                >
                    <option value="" selected={value.is_empty()}>{format!("Select {}", spec.label)}</option>
                    { for choices.iter().map(|choice| html! {
                        <option value={*choice} selected={value == *choice}>{*choice}</option>
                    }) }
                </select>
            },
            FieldKind::TextArea => html! {
                <textarea
                    id={spec.name}
                    name={spec.name}
                    rows="4"
                    required={spec.required}
                    class={classes!("form-control", error_class)}
                    value={value.clone()}
                    {oninput}
                    {onblur}
                />
            },
            _ => html! {
                <input
                    id={spec.name}
                    name={spec.name}
                    type={spec.kind.input_type()}
                    required={spec.required}
                    class={classes!("form-control", error_class)}
                    value={value.clone()}
                    {oninput}
                    {onblur}
                />
            },
        };

        html! {
            <div class="form-group">
                <label for={spec.name}>
                    {spec.label}
                    { if spec.required { html! { <span class="required">{" *"}</span> } } else { html! {} } }
                </label>
                { control }
                {
                    if let Some(err) = error {
                        html! {
                            <div class="field-error" style="color: #dc3545; font-size: 0.875rem; margin-top: 0.25rem;">
                                {err.to_string()}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }).collect::<Html>();

    html! {
        <form id="enroll-form" class="enroll-form" novalidate=true ref={form_ref} {onsubmit}>
            { field_groups }
            <div class="form-actions">
                <button type="submit" class="btn btn-primary">{"Submit Enrollment"}</button>
                <button id="whatsapp-btn" type="button" class="btn btn-whatsapp" onclick={on_whatsapp}>
                    {"Enroll via WhatsApp"}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ENROLL_FIELDS;

    fn complete_draft() -> FormDraft {
        FormDraft::default()
            .with("full-name", "Ali")
            .with("email", "ali@example.com")
            .with("contact-number", "0300")
            .with("country-city", "Karachi")
            .with("curriculum-focus", "IGCSE")
            .with(MODE_FIELD, "DHA")
    }

    #[test]
    fn test_missing_required_field_blocks_submission() {
        let draft = complete_draft().with("full-name", "  ");
        let errors = check_submission(ENROLL_FIELDS, &draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("full-name"), Some(&FieldError::MissingRequiredField));
    }

    #[test]
    fn test_email_without_tld_blocks_submission() {
        let draft = complete_draft().with("email", "a@b");
        let errors = check_submission(ENROLL_FIELDS, &draft).unwrap_err();
        assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmailFormat));

        let draft = complete_draft().with("email", "a@b.com");
        assert!(check_submission(ENROLL_FIELDS, &draft).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        assert!(check_submission(ENROLL_FIELDS, &complete_draft()).is_ok());
    }

    #[test]
    fn test_message_defaults_blank_fields() {
        let draft = FormDraft::default()
            .with("full-name", "Ali")
            .with("contact-number", "0300");
        let message = whatsapp_message(&draft);
        assert!(message.contains("- Name: Ali\n"));
        assert!(message.contains("- Contact Number: 0300\n"));
        assert!(message.contains("- City/Country: \n"));
        assert!(message.contains("- Exam Board (Cambridge/Edexcel): \n"));
        assert!(message.ends_with("\nMessage: "));
        assert!(!message.contains("undefined"));
    }

    #[test]
    fn test_message_template_layout() {
        let message = whatsapp_message(&complete_draft().with("message", "See you"));
        assert_eq!(
            message,
            "Hi Sir Qubair, I'd like to enroll in a group class. Here are my details:\n\n\
             - Name: Ali\n\
             - Contact Number: 0300\n\
             - City/Country: Karachi\n\
             - Level (AS/A2/O Levels/IGCSE/Edexcel): IGCSE\n\
             - Mode (DHA/Bahadurabad/Gulshan/Johar/Online): DHA\n\
             - Exam Board (Cambridge/Edexcel): \n\
             \nMessage: See you"
        );
    }

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("I'd like (A*) levels!"), "I'd%20like%20(A*)%20levels!");
        assert_eq!(encode_uri_component("a/b\n- c: d"), "a%2Fb%0A-%20c%3A%20d");
        assert_eq!(encode_uri_component("100%27"), "100%2527");
        assert_eq!(encode_uri_component("DHA & Co"), "DHA%20%26%20Co");
    }

    #[test]
    fn test_select_values_follow_mode_and_reset() {
        let draft = complete_draft().with(MODE_FIELD, "Online");
        let values = select_values(ENROLL_FIELDS, &draft);
        assert!(values.contains(&(MODE_FIELD, "Online".to_string())));
        assert!(values.contains(&("curriculum-focus", "IGCSE".to_string())));
        assert!(values.iter().all(|(name, _)| *name != "full-name"));

        let cleared = select_values(ENROLL_FIELDS, &FormDraft::default().with(MODE_FIELD, ""));
        assert!(cleared.iter().all(|(_, value)| value.is_empty()));
        assert_eq!(cleared.len(), values.len());
    }

    #[test]
    fn test_whatsapp_url_shape() {
        let url = whatsapp_url(&FormDraft::default().with("full-name", "Ali"));
        assert!(url.starts_with("https://wa.me/923368920131?text=Hi%20Sir%20Qubair%2C%20I'd%20like"));
        assert!(url.contains("-%20Name%3A%20Ali%0A"));
        assert!(!url.contains(' '));
    }
}
