use yew::prelude::*;

use crate::components::enroll_form::EnrollForm;
use crate::components::faq::Faq;
use crate::components::location::LocationSelector;
use crate::components::nav::Nav;
use crate::components::reveal::use_scroll_reveal;
use crate::components::slideshow::Slideshow;
use crate::components::typing::TypingText;
use crate::content::{
    CAMPUSES, CLASS_OFFERINGS, ENROLL_FIELDS, FAQ_ENTRIES, HERO_PHRASES, NAV_ENTRIES, REVEAL_SELECTOR, SLIDES,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Value of the form's #mode field, also written by the location picker.
    let mode = use_state(String::new);

    use_scroll_reveal(REVEAL_SELECTOR);

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |value: String| mode.set(value))
    };

    html! {
        <>
            <Nav entries={NAV_ENTRIES} />
            <main>
                <section id="home" class="hero">
                    <h1 class="hero-title">
                        {"Expert tutoring for "}
                        <TypingText phrases={HERO_PHRASES} />
                    </h1>
                    <p class="hero-subtitle">
                        {"Small group Mathematics and Physics classes across Karachi and online."}
                    </p>
                    <a href="#enroll" class="btn btn-primary">{"Enroll Now"}</a>
                </section>

                <section id="about" class="about-section">
                    <div class="section-header">
                        <h2>{"Inside the Classroom"}</h2>
                    </div>
                    <Slideshow slides={SLIDES} />
                </section>

                <section id="classes" class="classes-section">
                    <div class="section-header">
                        <h2>{"Classes"}</h2>
                    </div>
                    <div class="class-grid">
                        { for CLASS_OFFERINGS.iter().map(|offering| html! {
                            <div class="class-card">
                                <h3>{offering.title}</h3>
                                <p>{offering.blurb}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="locations" class="locations-section">
                    <div class="section-header">
                        <h2>{"Choose Your Campus"}</h2>
                    </div>
                    <LocationSelector campuses={CAMPUSES} on_mode_change={on_mode_change.clone()} />
                </section>

                <section id="faq" class="faq-section">
                    <div class="section-header">
                        <h2>{"Frequently Asked Questions"}</h2>
                    </div>
                    <Faq entries={FAQ_ENTRIES} />
                </section>

                <section id="enroll" class="enroll-section">
                    <div class="section-header">
                        <h2>{"Enroll"}</h2>
                    </div>
                    <EnrollForm fields={ENROLL_FIELDS} mode={(*mode).clone()} {on_mode_change} />
                </section>
            </main>
            <footer class="footer">
                <p>{"© Sir Qubair Tutoring"}</p>
            </footer>
        </>
    }
}
