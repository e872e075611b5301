use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// One rendered step of the typing loop and how long to wait before the next.
#[derive(Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TypingState {
    pub phrase_index: usize,
    pub char_index: usize,
    pub deleting: bool,
}

impl TypingState {
    /// Advances by one character. `phrases` must be non-empty.
    pub fn tick(&mut self, phrases: &[&str]) -> Frame {
        let phrase = phrases[self.phrase_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = prefix(phrase, self.char_index);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % phrases.len();
                return Frame { text, delay_ms: config::NEXT_PHRASE_PAUSE_MS };
            }
            Frame { text, delay_ms: config::DELETE_SPEED_MS }
        } else {
            self.char_index = (self.char_index + 1).min(len);
            let text = prefix(phrase, self.char_index);
            if self.char_index == len {
                // Hold the full phrase, the next tick starts deleting.
                self.deleting = true;
                return Frame { text, delay_ms: config::HOLD_FULL_PHRASE_MS };
            }
            Frame { text, delay_ms: config::TYPE_SPEED_MS }
        }
    }

    /// Next step of the loop. While the page is hidden nothing advances and
    /// the caller re-checks after the poll delay.
    pub fn poll(&mut self, phrases: &[&str], page_hidden: bool) -> Step {
        if page_hidden {
            return Step { text: None, delay_ms: config::HIDDEN_POLL_MS };
        }
        let frame = self.tick(phrases);
        Step { text: Some(frame.text), delay_ms: frame.delay_ms }
    }
}

/// Outcome of [`TypingState::poll`]; `text` is `None` when the display must not change.
#[derive(Debug, PartialEq)]
pub struct Step {
    pub text: Option<String>,
    pub delay_ms: u32,
}

fn prefix(phrase: &str, chars: usize) -> String {
    phrase.chars().take(chars).collect()
}

fn page_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

/// Owns the typing loop and its single pending timer.
pub struct TypingAnimator {
    phrases: &'static [&'static str],
    state: RefCell<TypingState>,
    timer: RefCell<Option<Timeout>>,
    on_frame: Callback<String>,
}

impl TypingAnimator {
    pub fn new(phrases: &'static [&'static str], on_frame: Callback<String>) -> Rc<Self> {
        Rc::new(Self {
            phrases,
            state: RefCell::new(TypingState::default()),
            timer: RefCell::new(None),
            on_frame,
        })
    }

    pub fn start(self: &Rc<Self>) {
        self.stop();
        if self.phrases.is_empty() {
            log::warn!("typing animator started without phrases");
            return;
        }
        self.step();
    }

    pub fn stop(&self) {
        // Dropping the Timeout clears it.
        self.timer.borrow_mut().take();
    }

    fn step(self: &Rc<Self>) {
        let step = self.state.borrow_mut().poll(self.phrases, page_hidden());
        if let Some(text) = step.text {
            self.on_frame.emit(text);
        }
        self.schedule(step.delay_ms);
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(animator) = weak.upgrade() {
                animator.step();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub phrases: &'static [&'static str],
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        let phrases = props.phrases;
        use_effect_with_deps(
            move |_| {
                let animator = TypingAnimator::new(phrases, Callback::from(move |t: String| text.set(t)));
                animator.start();
                move || animator.stop()
            },
            (),
        );
    }

    html! {
        <span
            id="rotating-text"
            class="rotating-text"
            style="display: inline-block; min-height: 1.2em; width: 100%;"
        >
            { (*text).clone() }
        </span>
    }
}
