use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::language::Language;
use crate::i18n;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "vista-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    i18n::parse_message_ids(content)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Extract every `t!(<lang>, "...")` literal from source files under `src/`.
/// Only a direct literal second argument is recognised; ids built at
/// runtime are not (the site has none).
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    stack.push(entry.path());
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(") {
            // Skip `assert!(`, `format!(` and other macros ending in `t`.
            let inside_ident = rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
            rest = &rest[pos + 3..];
            if inside_ident {
                continue;
            }
            // The language expression never contains quotes or parens.
            let Some(comma) = rest.find(',') else { break };
            let head = &rest[..comma];
            if head.contains('"') || head.contains(')') {
                continue;
            }
            let after = rest[comma + 1..].trim_start();
            let Some(literal) = after.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = literal.find('"') {
                let key = &literal[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs = Vec::new();
    if let Ok(read_dir) = fs::read_dir(i18n_root) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    if name.contains('-') {
                        dirs.push(name.to_string());
                    }
                }
            }
        }
    }
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Fallback locale (en-US) must exist
    let fallback_file = i18n_root.join(i18n::FALLBACK_LOCALE).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    // 2. Gather all referenced keys in Rust sources.
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.len() > 100,
        "Suspiciously few t! call sites found ({}); did the macro shape change?",
        referenced_keys.len()
    );

    // 3. Report any referenced keys missing in fallback.
    let mut missing_in_fallback: Vec<_> = referenced_keys
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing_in_fallback.sort();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    // 4. Every locale folder must match the fallback exactly.
    let locales = collect_locale_dirs(&i18n_root);
    for lang in Language::ALL {
        assert!(
            locales.iter().any(|l| l == lang.locale()),
            "No locale folder for {}",
            lang.locale()
        );
    }

    let mut per_locale_drift: HashMap<String, Vec<String>> = HashMap::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Locale {locale}: cannot read {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let drift: Vec<String> = fallback_keys
            .symmetric_difference(&keys)
            .cloned()
            .collect();
        if !drift.is_empty() {
            per_locale_drift.insert(locale, drift);
        }
    }

    if !per_locale_drift.is_empty() {
        let mut report = String::from("Locales whose ids differ from the fallback:\n");
        for (loc, ids) in per_locale_drift.iter() {
            report.push_str(&format!("  {loc} ({} differing)\n", ids.len()));
            for k in ids {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }

    // 5. Unused fallback keys are only reported.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources:\n{}",
            unused.len(),
            unused.join(", ")
        );
    }
}
