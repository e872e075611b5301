use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FaqEntry;

/// Single-open accordion. Both the question's `aria-expanded` and the
/// answer's `active` class are rendered from `expanded`, so they cannot drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    pub expanded: Option<usize>,
}

impl FaqAccordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.expanded == Some(index) {
            Self { expanded: None }
        } else {
            Self { expanded: Some(index) }
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state_eq(FaqAccordion::default);

    html! {
        <div class="faq-list">
            {
                props.entries.iter().enumerate().map(|(i, entry)| {
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggle(i));
                        })
                    };
                    let open = accordion.is_expanded(i);
                    html! {
                        <div class="faq-item">
                            <button
                                class="faq-question"
                                aria-expanded={if open { "true" } else { "false" }}
                                onclick={toggle}
                            >
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                            </button>
                            <div class={classes!("faq-answer", open.then_some("active"))}>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
