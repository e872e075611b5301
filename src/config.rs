use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Hero typing effect
pub const TYPE_SPEED_MS: u32 = 100;
pub const DELETE_SPEED_MS: u32 = 60;
pub const HOLD_FULL_PHRASE_MS: u32 = 2500;
pub const NEXT_PHRASE_PAUSE_MS: u32 = 500;
pub const HIDDEN_POLL_MS: u32 = 1000;

pub const SLIDE_INTERVAL_MS: u32 = 5000;

// Header and scroll-spy
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;
pub const SCROLL_SPY_PROBE_PX: f64 = 100.0;
pub const SECTION_LEAD_PX: f64 = 150.0;
pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps

/// Viewports at or below this width use the accordion layout.
pub const MOBILE_MAX_WIDTH_PX: f64 = 480.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub const TOAST_LIFETIME_MS: u32 = 5000;
pub const TOAST_FADE_MS: u32 = 300;

pub const WHATSAPP_NUMBER: &str = "923368920131";

pub fn whatsapp_base_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}
