use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::content::Slide;

#[derive(Clone, Debug, PartialEq)]
pub struct SlideDeck {
    pub index: usize,
    pub len: usize,
    /// Bumped on every navigation so the autoplay timer restarts even when
    /// the index does not change (clicking the current dot).
    pub generation: u64,
}

pub enum SlideAction {
    Advance(isize),
    Jump(usize),
}

impl SlideDeck {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, generation: 0 }
    }

    pub fn advance(&self, offset: isize) -> Self {
        self.show(self.index as isize + offset)
    }

    pub fn jump(&self, index: usize) -> Self {
        self.show(index as isize)
    }

    fn show(&self, n: isize) -> Self {
        if self.len == 0 {
            return self.clone();
        }
        Self {
            index: n.rem_euclid(self.len as isize) as usize,
            len: self.len,
            generation: self.generation + 1,
        }
    }

    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }
}

impl Reducible for SlideDeck {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SlideAction::Advance(offset) => self.advance(offset),
            SlideAction::Jump(index) => self.jump(index),
        };
        log::debug!("slide {} of {}", next.index + 1, next.len);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub slides: &'static [Slide],
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let slide_count = props.slides.len();
    let deck = use_reducer(move || SlideDeck::new(slide_count));

    // One autoplay interval per navigation; the teardown of the previous
    // generation drops (and clears) the old one.
    {
        let dispatcher = deck.dispatcher();
        let has_slides = deck.len > 0;
        use_effect_with_deps(
            move |_| {
                let interval = has_slides.then(|| {
                    Interval::new(config::SLIDE_INTERVAL_MS, move || {
                        dispatcher.dispatch(SlideAction::Advance(1));
                    })
                });
                move || drop(interval)
            },
            deck.generation,
        );
    }

    if props.slides.is_empty() {
        return html! {};
    }

    let prev = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| deck.dispatch(SlideAction::Advance(-1)))
    };
    let next = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| deck.dispatch(SlideAction::Advance(1)))
    };

    html! {
        <div class="slideshow-container" aria-live="polite">
            {
                props.slides.iter().enumerate().map(|(i, slide)| {
                    let display = if deck.is_active(i) { "display: block;" } else { "display: none;" };
                    html! {
                        <div class="mySlides fade" style={display}>
                            <img src={slide.image} alt={slide.caption} style="width: 100%;" />
                            <div class="slide-caption">{slide.caption}</div>
                        </div>
                    }
                }).collect::<Html>()
            }
            <button class="prev" aria-label="Previous slide" onclick={prev}>{"❮"}</button>
            <button class="next" aria-label="Next slide" onclick={next}>{"❯"}</button>
            <div class="slide-dots">
                {
                    (0..props.slides.len()).map(|i| {
                        let onclick = {
                            let deck = deck.clone();
                            Callback::from(move |_: MouseEvent| deck.dispatch(SlideAction::Jump(i)))
                        };
                        html! {
                            <span
                                class={classes!("dot", deck.is_active(i).then_some("active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                {onclick}
                            ></span>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_wraps_to_first() {
        let deck = SlideDeck { index: 3, len: 4, generation: 0 };
        assert_eq!(deck.advance(1).index, 0);
    }

    #[test]
    fn test_backward_wraps_to_last() {
        let deck = SlideDeck::new(4);
        assert_eq!(deck.advance(-1).index, 3);
    }

    #[test]
    fn test_exactly_one_active_after_each_step() {
        let mut deck = SlideDeck::new(5);
        for offset in [1, 1, -3, 7, -1] {
            deck = deck.advance(offset);
            let active = (0..deck.len).filter(|&i| deck.is_active(i)).count();
            assert_eq!(active, 1);
        }
        deck = deck.jump(2);
        assert_eq!((0..deck.len).filter(|&i| deck.is_active(i)).count(), 1);
        assert_eq!(deck.index, 2);
    }

    #[test]
    fn test_jump_to_current_still_restarts_autoplay() {
        let deck = SlideDeck::new(3);
        let again = deck.jump(0);
        assert_eq!(again.index, 0);
        assert_eq!(again.generation, deck.generation + 1);
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let deck = SlideDeck::new(0);
        assert_eq!(deck.advance(1), deck);
    }
}
