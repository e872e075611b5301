//! Static page copy shared by the landing page components.

use crate::components::validator::{FieldKind, FieldSpec};

pub const HERO_PHRASES: &[&str] = &["O Level", "A Level", "Edexcel", "IGCSE"];

#[derive(PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Home", section_id: "home" },
    NavEntry { label: "About", section_id: "about" },
    NavEntry { label: "Classes", section_id: "classes" },
    NavEntry { label: "Locations", section_id: "locations" },
    NavEntry { label: "FAQ", section_id: "faq" },
    NavEntry { label: "Enroll", section_id: "enroll" },
];

#[derive(PartialEq)]
pub struct ClassOffering {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const CLASS_OFFERINGS: &[ClassOffering] = &[
    ClassOffering { title: "O Level", blurb: "Concept-first lessons with weekly topical tests." },
    ClassOffering { title: "AS / A2", blurb: "Exam technique and past paper marathons ahead of May/June." },
    ClassOffering { title: "IGCSE", blurb: "Core and extended syllabus covered side by side." },
    ClassOffering { title: "Edexcel", blurb: "Unit-wise preparation matched to the Pearson calendar." },
];

#[derive(PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub caption: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide { image: "/assets/classroom-dha.jpg", caption: "Small group classes in DHA" },
    Slide { image: "/assets/results-board.jpg", caption: "Straight A's, year after year" },
    Slide { image: "/assets/online-session.jpg", caption: "Live online sessions from anywhere" },
    Slide { image: "/assets/exam-prep.jpg", caption: "Past paper drills before every exam" },
];

#[derive(PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Which curricula do you teach?",
        answer: "Cambridge O Level, AS and A2, IGCSE and Edexcel. Classes are grouped by exam board so every session follows your syllabus.",
    },
    FaqEntry {
        question: "How big are the groups?",
        answer: "Groups are kept small so every student gets individual attention during problem solving.",
    },
    FaqEntry {
        question: "Can I join in the middle of the year?",
        answer: "Yes. New students get a catch-up plan covering the topics the group has already finished.",
    },
    FaqEntry {
        question: "Do you offer online classes?",
        answer: "Every campus schedule has an online mirror with the same notes, tests and recorded walkthroughs.",
    },
    FaqEntry {
        question: "How do I enroll?",
        answer: "Fill in the enrollment form and send it, or tap the WhatsApp button to message us your details directly.",
    },
];

#[derive(PartialEq)]
pub struct Campus {
    pub slug: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub schedule: &'static str,
}

pub const CAMPUSES: &[Campus] = &[
    Campus {
        slug: "dha",
        name: "DHA",
        address: "Phase 6, DHA, Karachi",
        schedule: "Mon / Wed / Fri, 4pm - 8pm",
    },
    Campus {
        slug: "bahadurabad",
        name: "Bahadurabad",
        address: "Bahadurabad Chowrangi, Karachi",
        schedule: "Tue / Thu, 5pm - 9pm",
    },
    Campus {
        slug: "gulshan",
        name: "Gulshan",
        address: "Block 13-D, Gulshan-e-Iqbal, Karachi",
        schedule: "Mon / Thu, 4pm - 7pm",
    },
    Campus {
        slug: "johar",
        name: "Johar",
        address: "Block 15, Gulistan-e-Johar, Karachi",
        schedule: "Sat / Sun, 10am - 2pm",
    },
    Campus {
        slug: "online",
        name: "Online",
        address: "Live on Zoom, recordings included",
        schedule: "Daily evening slots",
    },
];

pub const CURRICULUM_OPTIONS: &[&str] = &["AS", "A2", "O Levels", "IGCSE", "Edexcel"];
pub const MODE_OPTIONS: &[&str] = &["DHA", "Bahadurabad", "Gulshan", "Johar", "Online"];
pub const EXAM_BOARD_OPTIONS: &[&str] = &["Cambridge", "Edexcel"];

pub const ENROLL_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "full-name", label: "Full Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", label: "Email", kind: FieldKind::Email, required: true },
    FieldSpec { name: "contact-number", label: "Contact Number", kind: FieldKind::Tel, required: true },
    FieldSpec { name: "country-city", label: "City / Country", kind: FieldKind::Text, required: true },
    FieldSpec {
        name: "curriculum-focus",
        label: "Level",
        kind: FieldKind::Select(CURRICULUM_OPTIONS),
        required: true,
    },
    FieldSpec { name: "mode", label: "Mode", kind: FieldKind::Select(MODE_OPTIONS), required: true },
    FieldSpec {
        name: "exam-board",
        label: "Exam Board",
        kind: FieldKind::Select(EXAM_BOARD_OPTIONS),
        required: false,
    },
    FieldSpec { name: "message", label: "Message", kind: FieldKind::TextArea, required: false },
];

pub const REVEAL_SELECTOR: &str =
    ".section-header, .class-card, .achievement-card, .affiliation-card, .testimonial-card";
