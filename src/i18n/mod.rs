// SPDX-License-Identifier: MPL-2.0
//! Internationalization: locale registry, translation catalog, and
//! locale-aware formatting.
//!
//! Dictionaries are nested JSON trees embedded in the binary
//! (`assets/locales/<code>.json`), loaded lazily per locale and cached
//! immutably. Lookups use dotted paths (`"form.invoiceNumber"`) and return
//! the key verbatim on any miss, so a missing translation never breaks the
//! UI.
//!
//! The registry below is ordered: primary-subtag resolution picks the first
//! match, so `pt` resolves to `pt-BR` and `en-GB` to `en-US`.

pub mod catalog;
pub mod format;

pub use catalog::Catalog;

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Supported locales in resolution order: code, self-name, flag.
const LOCALE_TABLE: [(&str, &str, &str); 15] = [
    ("en-US", "English (US)", "🇺🇸"),
    ("pt-BR", "Português (Brasil)", "🇧🇷"),
    ("pt-PT", "Português (Portugal)", "🇵🇹"),
    ("es", "Español", "🇪🇸"),
    ("fr", "Français", "🇫🇷"),
    ("nl", "Nederlands", "🇳🇱"),
    ("ja", "日本語", "🇯🇵"),
    ("zh", "中文", "🇨🇳"),
    ("ar", "العربية", "🇸🇦"),
    ("he", "עברית", "🇮🇱"),
    ("de", "Deutsch", "🇩🇪"),
    ("it", "Italiano", "🇮🇹"),
    ("ru", "Русский", "🇷🇺"),
    ("uk", "Українська", "🇺🇦"),
    ("hi", "हिन्दी", "🇮🇳"),
];

/// Languages rendered right-to-left.
const RTL_LANGUAGES: [&str; 2] = ["ar", "he"];

/// One supported locale as shown in the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub code: LanguageIdentifier,
    /// The language's own name for itself.
    pub display_name: &'static str,
    /// Flag emoji shown beside the name.
    pub flag: &'static str,
}

impl fmt::Display for LocaleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.display_name)
    }
}

/// Text layout direction of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Builds the supported-locale registry in resolution order.
pub fn locale_registry() -> Vec<LocaleEntry> {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, display_name, flag)| {
            code.parse::<LanguageIdentifier>().ok().map(|code| LocaleEntry {
                code,
                display_name,
                flag,
            })
        })
        .collect()
}

/// The locale everything falls back to.
pub fn default_locale() -> LanguageIdentifier {
    "en-US".parse().expect("en-US is a valid locale")
}

/// Returns the text direction for a locale.
pub fn text_direction_of(locale: &LanguageIdentifier) -> TextDirection {
    if RTL_LANGUAGES.contains(&locale.language.as_str()) {
        TextDirection::RightToLeft
    } else {
        TextDirection::LeftToRight
    }
}

/// Resolves the startup locale. Pure: all inputs are parameters.
///
/// Priority:
/// 1. A saved code that is in `supported` wins verbatim.
/// 2. The system locale verbatim, if supported.
/// 3. The system locale's primary subtag (text before the first `-`),
///    prefix-matched against supported codes; first registry match wins.
/// 4. The fixed default locale.
pub fn resolve_initial_locale(
    saved: Option<&str>,
    system: Option<&str>,
    supported: &[LocaleEntry],
) -> LanguageIdentifier {
    if let Some(code) = saved {
        if let Some(entry) = find_exact(supported, code) {
            return entry.code.clone();
        }
    }

    if let Some(code) = system {
        if let Some(entry) = find_exact(supported, code) {
            return entry.code.clone();
        }

        let language = code.split('-').next().unwrap_or("");
        if !language.is_empty() {
            let needle = language.to_ascii_lowercase();
            let prefix_match = supported.iter().find(|entry| {
                entry
                    .code
                    .to_string()
                    .to_ascii_lowercase()
                    .starts_with(&needle)
            });
            if let Some(entry) = prefix_match {
                return entry.code.clone();
            }
        }
    }

    default_locale()
}

fn find_exact<'a>(supported: &'a [LocaleEntry], code: &str) -> Option<&'a LocaleEntry> {
    let parsed: LanguageIdentifier = code.parse().ok()?;
    supported.iter().find(|entry| entry.code == parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_all_table_entries() {
        let registry = locale_registry();
        assert_eq!(registry.len(), LOCALE_TABLE.len());
        assert_eq!(registry[0].code, default_locale());
    }

    #[test]
    fn saved_locale_beats_system_locale() {
        let registry = locale_registry();
        let resolved = resolve_initial_locale(Some("pt-BR"), Some("fr"), &registry);
        assert_eq!(resolved.to_string(), "pt-BR");
    }

    #[test]
    fn system_locale_matches_by_primary_subtag() {
        let registry = locale_registry();
        let resolved = resolve_initial_locale(None, Some("en-GB"), &registry);
        assert_eq!(resolved.to_string(), "en-US");
    }

    #[test]
    fn bare_primary_subtag_picks_first_registry_match() {
        let registry = locale_registry();
        // pt-BR precedes pt-PT in the registry
        let resolved = resolve_initial_locale(None, Some("pt"), &registry);
        assert_eq!(resolved.to_string(), "pt-BR");
    }

    #[test]
    fn unknown_system_locale_falls_back_to_default() {
        let registry = locale_registry();
        let resolved = resolve_initial_locale(None, Some("xx-YY"), &registry);
        assert_eq!(resolved, default_locale());
    }

    #[test]
    fn no_inputs_resolve_to_default() {
        let registry = locale_registry();
        let resolved = resolve_initial_locale(None, None, &registry);
        assert_eq!(resolved, default_locale());
    }

    #[test]
    fn unsaved_unsupported_saved_code_is_ignored() {
        let registry = locale_registry();
        let resolved = resolve_initial_locale(Some("tlh"), Some("de"), &registry);
        assert_eq!(resolved.to_string(), "de");
    }

    #[test]
    fn arabic_and_hebrew_are_right_to_left() {
        let ar: LanguageIdentifier = "ar".parse().unwrap();
        let he: LanguageIdentifier = "he".parse().unwrap();
        let fr: LanguageIdentifier = "fr".parse().unwrap();
        assert_eq!(text_direction_of(&ar), TextDirection::RightToLeft);
        assert_eq!(text_direction_of(&he), TextDirection::RightToLeft);
        assert_eq!(text_direction_of(&fr), TextDirection::LeftToRight);
    }

    #[test]
    fn locale_entry_display_includes_flag_and_name() {
        let registry = locale_registry();
        let entry = &registry[0];
        assert_eq!(format!("{}", entry), "🇺🇸 English (US)");
    }
}
