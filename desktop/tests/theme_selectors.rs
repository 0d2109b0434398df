#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the class names the section components emit still exist in the shared
  theme (ui/assets/theme/main.css).
- Fail fast if a refactor renames a class on one side only; the embedded
  desktop build would otherwise render that block unstyled.

How it works:
- The theme is embedded with `include_str!` (mirrors `desktop/src/main.rs`).
- Each selector below is a plain substring check.

Extending:
- When a component gets a new structural class, add it here.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens the ui components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".site__main",
    ".section {",
    ".section__header",
    ".section__title",
    ".section__subtitle",
    ".card {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--hero",
    ".button--outline-light",
    // Navigation
    ".navbar {",
    ".navbar__link",
    ".navbar__submenu",
    ".navbar__locale",
    ".navbar__menu-button",
    ".navbar__drawer",
    // Hero
    ".hero {",
    ".hero__bubble",
    ".hero__stats",
    // Academics
    ".academics__tab--active",
    ".academics__programs",
    ".program--blue",
    ".program--green",
    ".program--orange",
    ".academics__facilities",
    // Carousels
    ".carousel__track",
    ".carousel__dot--active",
    ".gallery__slide--active",
    ".gallery__thumb--active",
    // Contact + toast
    ".contact__form",
    ".contact__input",
    ".toast {",
    ".toast__close",
    // Footer
    ".footer {",
    ".footer__columns",
    ".social--facebook",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn active_modifiers_have_base_rules() {
    // Every `--active` modifier needs the base block it modifies.
    for (base, active) in [
        (".academics__tab {", ".academics__tab--active"),
        (".carousel__dot {", ".carousel__dot--active"),
        (".gallery__slide {", ".gallery__slide--active"),
        (".gallery__thumb {", ".gallery__thumb--active"),
    ] {
        assert!(
            THEME_CSS.contains(base) && THEME_CSS.contains(active),
            "Expected both `{base}` and `{active}` in the theme"
        );
    }
}
