//! Shared UI crate for the Bangla School Vista site. Content, state machines
//! and every section live here; `web` and `desktop` only host [`views::Home`].

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Fixed top bar with submenus and the language toggle (components/navigation.rs)
    pub mod navigation;
    pub use navigation::Navigation;

    // Contact acknowledgement toast (components/toast.rs)
    pub mod toast;
    pub use toast::{ToastHost, ToastSlot};

    // Small shared pieces: icon glyphs, section headers (components/icon.rs)
    mod icon;
    pub use icon::{IconGlyph, SectionHeader};
}

/// Site stylesheet, bundled by the Dioxus asset pipeline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
