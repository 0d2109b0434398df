//! Internationalization (i18n) support for `vista-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + language negotiation)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vista-ui.ftl   (fallback/reference)
//!   bn-BD/vista-ui.ftl   (default site language)
//! ```
//!
//! Unlike a single global loader that gets re-pointed on every language
//! switch, the site keeps one loader per [`Language`]. A lookup is therefore
//! a pure function of `(language, message id)` and any number of sections
//! can render in different languages side by side (handy in tests).
//!
//! Usage in a content bundle:
//! ```ignore
//! use crate::t;
//! let title = t!(lang, "hero-title");
//! let alt = t!(lang, "gallery-image-alt", index = 3);
//! ```
//!
//! Public API surface:
//! - `init()` – build both loaders and validate catalog parity (idempotent).
//! - `loader(lang)` – the loader backing `t!` for one language.
//! - `validate()` – check that every locale defines exactly the fallback ids.
//! - `available_languages()` – embedded locale folders.
//! - `fl` macro re-export (for direct keyed access when needed).
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "nav-home")
///     t!(lang, "teachers-page-label", page = 2)
///
/// This expands to `fl!(loader(lang), ...)` so message ids are still checked
/// against the fallback catalog at compile time.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "vista-ui";

/// Locale folder holding the reference catalog.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

struct Loaders {
    bn: FluentLanguageLoader,
    en: FluentLanguageLoader,
}

static LOADERS: Lazy<Loaders> = Lazy::new(|| Loaders {
    bn: build_loader(Language::Bn),
    en: build_loader(Language::En),
});

static INIT: Once = Once::new();

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain text only; bidi isolation marks would leak into alt text and tests.
    loader.set_use_isolating(false);

    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.langid()]) {
        warn!("[i18n] failed loading {} ({err}); continuing with fallback", lang.locale());
    }
    loader
}

/// Loader for one language. Every `t!` lookup goes through here.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::Bn => &LOADERS.bn,
        Language::En => &LOADERS.en,
    }
}

/// Initialize i18n (idempotent). Forces both loaders and logs catalog drift.
pub fn init() {
    INIT.call_once(|| {
        Lazy::force(&LOADERS);
        match validate() {
            Ok(count) => debug!("[i18n] catalogs loaded ({count} messages per locale)"),
            Err(err) => warn!("[i18n] catalog validation failed: {err}"),
        }
    });
}

/// List available (embedded) locale folders, e.g. `["bn-BD", "en-US"]`.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Errors raised while loading or checking the embedded catalogs.
#[derive(Debug)]
pub enum CatalogError {
    /// `i18n-embed` could not load a locale.
    Load(I18nEmbedError),
    /// A locale folder or its `.ftl` file is not embedded.
    MissingLocale(String),
    /// The `.ftl` file is not valid UTF-8.
    Encoding(String),
    /// A message id is defined twice in one locale.
    Duplicate { locale: String, key: String },
    /// A locale's id set differs from the fallback.
    Parity {
        locale: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Load(err) => write!(f, "Load error: {}", err),
            CatalogError::MissingLocale(locale) => write!(f, "Missing locale: {}", locale),
            CatalogError::Encoding(locale) => write!(f, "Catalog for {} is not UTF-8", locale),
            CatalogError::Duplicate { locale, key } => {
                write!(f, "Duplicate message `{}` in {}", key, locale)
            }
            CatalogError::Parity {
                locale,
                missing,
                extra,
            } => write!(
                f,
                "{} differs from {}: missing [{}], extra [{}]",
                locale,
                FALLBACK_LOCALE,
                missing.join(", "),
                extra.join(", ")
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<I18nEmbedError> for CatalogError {
    fn from(err: I18nEmbedError) -> Self {
        CatalogError::Load(err)
    }
}

/// Check that every supported locale defines exactly the fallback's message
/// ids. Returns the number of messages per locale.
///
/// The `fl!` macro only checks ids against the fallback; this closes the
/// "missing translation" hole for the other locale at startup.
pub fn validate() -> Result<usize, CatalogError> {
    let fallback = message_ids(FALLBACK_LOCALE)?;

    for lang in Language::ALL {
        let locale = lang.locale();
        if locale == FALLBACK_LOCALE {
            continue;
        }
        let ids = message_ids(locale)?;
        let missing: Vec<String> = fallback.difference(&ids).cloned().collect();
        let extra: Vec<String> = ids.difference(&fallback).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(CatalogError::Parity {
                locale: locale.to_string(),
                missing,
                extra,
            });
        }
    }

    Ok(fallback.len())
}

fn message_ids(locale: &str) -> Result<BTreeSet<String>, CatalogError> {
    let path = format!("{locale}/{DOMAIN}.ftl");
    let file =
        Localizations::get(&path).ok_or_else(|| CatalogError::MissingLocale(locale.to_string()))?;
    let source =
        std::str::from_utf8(&file.data).map_err(|_| CatalogError::Encoding(locale.to_string()))?;

    let mut ids = BTreeSet::new();
    for key in parse_message_ids(source) {
        if !ids.insert(key.to_string()) {
            return Err(CatalogError::Duplicate {
                locale: locale.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(ids)
}

/// Message ids defined in a Fluent source, in file order.
///
/// Line based: any non-indented `id = ...` line is a message. Comments,
/// terms (`-id`), attributes and continuation lines are skipped.
pub fn parse_message_ids(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_id_char))
        .collect()
}

fn valid_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
