// SPDX-License-Identifier: MPL-2.0
//! The translation catalog: lazy per-locale dictionaries with dotted-path
//! lookup.

use super::{
    default_locale, format, locale_registry, resolve_initial_locale, text_direction_of,
    LocaleEntry, TextDirection,
};
use crate::app::config::Config;
use crate::error::LocaleError;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Lazily loaded translation dictionaries plus the active locale.
///
/// A dictionary is read from the embedded assets at most once per locale
/// and cached immutably. Lookups never fail: a miss of any kind returns
/// the key itself, which callers can use as a "missing" sentinel.
pub struct Catalog {
    trees: HashMap<LanguageIdentifier, serde_json::Value>,
    current_locale: LanguageIdentifier,
    available_locales: Vec<LocaleEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(None, &Config::default()).0
    }
}

impl Catalog {
    /// Creates the catalog and loads the startup locale's dictionary.
    ///
    /// The startup locale is resolved from the CLI argument, the config
    /// file, and the system locale, in that order. If its dictionary fails
    /// to load, the catalog falls back to the default locale and the error
    /// is returned alongside so the caller can surface it. If even the
    /// default dictionary fails, the catalog starts empty and every lookup
    /// returns its key.
    pub fn new(cli_lang: Option<String>, config: &Config) -> (Self, Option<LocaleError>) {
        let available_locales = locale_registry();
        let system = sys_locale::get_locale();

        let initial = match cli_lang
            .as_deref()
            .and_then(|code| exact_supported(&available_locales, code))
        {
            Some(code) => code,
            None => resolve_initial_locale(
                config.general.language.as_deref(),
                system.as_deref(),
                &available_locales,
            ),
        };

        let mut catalog = Self {
            trees: HashMap::new(),
            current_locale: initial.clone(),
            available_locales,
        };

        let warning = match catalog.ensure_loaded(&initial) {
            Ok(()) => None,
            Err(error) => {
                let fallback = default_locale();
                if catalog.ensure_loaded(&fallback).is_ok() {
                    catalog.current_locale = fallback;
                }
                Some(error)
            }
        };

        (catalog, warning)
    }

    /// The supported locales, in registry order.
    pub fn available_locales(&self) -> &[LocaleEntry] {
        &self.available_locales
    }

    /// The active locale code.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// The registry entry for the active locale.
    pub fn current_entry(&self) -> Option<&LocaleEntry> {
        self.available_locales
            .iter()
            .find(|entry| entry.code == self.current_locale)
    }

    /// Whether a dictionary is already cached for the locale.
    pub fn is_loaded(&self, locale: &LanguageIdentifier) -> bool {
        self.trees.contains_key(locale)
    }

    /// Text direction of the active locale.
    pub fn text_direction(&self) -> TextDirection {
        text_direction_of(&self.current_locale)
    }

    /// Loads the dictionary for a locale unless it is already cached.
    ///
    /// A failed load leaves the cache untouched for that locale, so a later
    /// retry starts clean.
    pub fn ensure_loaded(&mut self, locale: &LanguageIdentifier) -> Result<(), LocaleError> {
        if !self
            .available_locales
            .iter()
            .any(|entry| entry.code == *locale)
        {
            return Err(LocaleError::Unsupported(locale.to_string()));
        }

        if self.trees.contains_key(locale) {
            return Ok(());
        }

        let filename = format!("{}.json", locale);
        let Some(content) = Asset::get(&filename) else {
            return Err(LocaleError::MissingAsset(locale.to_string()));
        };

        let tree: serde_json::Value = serde_json::from_slice(content.data.as_ref())
            .map_err(|_| LocaleError::Parse(locale.to_string()))?;

        self.trees.insert(locale.clone(), tree);
        Ok(())
    }

    /// Switches the active locale, loading its dictionary if needed.
    ///
    /// On failure the active locale is unchanged. Returns the text
    /// direction of the new locale so the caller can adjust layout.
    pub fn set_active_locale(
        &mut self,
        locale: &LanguageIdentifier,
    ) -> Result<TextDirection, LocaleError> {
        self.ensure_loaded(locale)?;
        self.current_locale = locale.clone();
        Ok(self.text_direction())
    }

    /// Looks up a dotted-path key in the active dictionary.
    ///
    /// Returns the key verbatim on any miss: unloaded locale, missing
    /// segment, or a non-string leaf. Never panics.
    pub fn tr(&self, key: &str) -> String {
        self.trees
            .get(&self.current_locale)
            .and_then(|tree| lookup(tree, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Catalog::tr`], substituting `{name}` placeholders afterwards.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut value = self.tr(key);
        for (name, replacement) in args {
            value = value.replace(&format!("{{{}}}", name), replacement);
        }
        value
    }

    /// The effective default currency of the active locale.
    ///
    /// Dictionaries carry a top-level `defaultCurrency` leaf. When the
    /// lookup misses (the key comes back verbatim), `USD` applies.
    pub fn default_currency(&self) -> String {
        let currency = self.tr("defaultCurrency");
        if currency == "defaultCurrency" {
            "USD".to_string()
        } else {
            currency
        }
    }

    /// Formats an amount in the given currency for the active locale.
    ///
    /// Exactly two fraction digits. Unknown currency codes fall back to
    /// `"<code> <amount>"`.
    pub fn format_currency(&self, amount: f64, currency: &str) -> String {
        format::format_currency(amount, currency, &self.current_locale)
    }
}

/// Walks a nested JSON tree along `.`-separated segments down to a string
/// leaf.
fn lookup<'a>(tree: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    let mut node = tree;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

fn exact_supported(supported: &[LocaleEntry], code: &str) -> Option<LanguageIdentifier> {
    let parsed: LanguageIdentifier = code.parse().ok()?;
    supported
        .iter()
        .find(|entry| entry.code == parsed)
        .map(|entry| entry.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_at(code: &str) -> Catalog {
        let (catalog, warning) = Catalog::new(Some(code.to_string()), &Config::default());
        assert!(warning.is_none(), "dictionary for {} should load", code);
        catalog
    }

    #[test]
    fn every_registry_locale_has_a_loadable_dictionary() {
        let mut catalog = catalog_at("en-US");
        for entry in locale_registry() {
            assert!(
                catalog.ensure_loaded(&entry.code).is_ok(),
                "dictionary for {} should parse",
                entry.code
            );
        }
    }

    #[test]
    fn dictionaries_load_lazily() {
        let catalog = catalog_at("en-US");
        let pt_br: LanguageIdentifier = "pt-BR".parse().unwrap();
        assert!(catalog.is_loaded(&default_locale()));
        assert!(!catalog.is_loaded(&pt_br));
    }

    #[test]
    fn tr_resolves_nested_keys() {
        let catalog = catalog_at("en-US");
        assert_eq!(catalog.tr("form.invoiceNumber"), "Invoice Number");
    }

    #[test]
    fn tr_returns_key_verbatim_on_any_miss() {
        let catalog = catalog_at("en-US");
        assert_eq!(catalog.tr("form.doesNotExist"), "form.doesNotExist");
        assert_eq!(catalog.tr("nothing"), "nothing");
        // A path that runs past a string leaf is a miss, not a panic
        assert_eq!(
            catalog.tr("form.invoiceNumber.extra"),
            "form.invoiceNumber.extra"
        );
    }

    #[test]
    fn tr_with_args_substitutes_placeholders() {
        let catalog = catalog_at("en-US");
        let line = catalog.tr_with_args("preview.zipCode", &[("zip", "10001")]);
        assert!(line.contains("10001"));
        assert!(!line.contains("{zip}"));
    }

    #[test]
    fn set_active_locale_switches_translations() {
        let mut catalog = catalog_at("en-US");
        let pt_br: LanguageIdentifier = "pt-BR".parse().unwrap();

        let direction = catalog
            .set_active_locale(&pt_br)
            .expect("pt-BR should load");

        assert_eq!(direction, TextDirection::LeftToRight);
        assert_eq!(catalog.current_locale().to_string(), "pt-BR");
        assert_ne!(catalog.tr("form.invoiceNumber"), "Invoice Number");
    }

    #[test]
    fn set_active_locale_rejects_unsupported_codes() {
        let mut catalog = catalog_at("en-US");
        let klingon: LanguageIdentifier = "tlh".parse().unwrap();

        let result = catalog.set_active_locale(&klingon);

        assert!(matches!(result, Err(LocaleError::Unsupported(_))));
        assert_eq!(catalog.current_locale(), &default_locale());
    }

    #[test]
    fn rtl_locales_report_right_to_left() {
        let mut catalog = catalog_at("en-US");
        let ar: LanguageIdentifier = "ar".parse().unwrap();
        let he: LanguageIdentifier = "he".parse().unwrap();

        assert_eq!(
            catalog.set_active_locale(&ar),
            Ok(TextDirection::RightToLeft)
        );
        assert_eq!(
            catalog.set_active_locale(&he),
            Ok(TextDirection::RightToLeft)
        );
    }

    #[test]
    fn default_currency_follows_active_dictionary() {
        let mut catalog = catalog_at("en-US");
        assert_eq!(catalog.default_currency(), "USD");

        let de: LanguageIdentifier = "de".parse().unwrap();
        catalog.set_active_locale(&de).expect("de should load");
        assert_eq!(catalog.default_currency(), "EUR");
    }

    #[test]
    fn current_entry_matches_active_locale() {
        let catalog = catalog_at("en-US");
        let entry = catalog.current_entry().expect("registry entry exists");
        assert_eq!(entry.display_name, "English (US)");
    }
}
