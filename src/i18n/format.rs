// SPDX-License-Identifier: MPL-2.0
//! Locale-aware number, currency, and date formatting.
//!
//! Hand-rolled tables instead of a full CLDR dependency: the product only
//! needs two-decimal currency amounts with per-locale separators and
//! symbol placement, plus numeric calendar dates. Anything outside the
//! tables falls back to `"<code> <amount>"` and day-first dates.

use chrono::NaiveDate;
use unic_langid::LanguageIdentifier;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    /// `$1,234.56`
    Before,
    /// `R$ 1.234,56`
    BeforeWithSpace,
    /// `1 234,56 €`
    After,
}

/// Digit grouping and decimal separators for one language.
struct NumberStyle {
    group: char,
    decimal: char,
    placement: SymbolPlacement,
}

fn number_style(locale: &LanguageIdentifier) -> NumberStyle {
    let (group, decimal, placement) = match locale.language.as_str() {
        "pt" => ('.', ',', SymbolPlacement::BeforeWithSpace),
        "nl" => ('.', ',', SymbolPlacement::BeforeWithSpace),
        "de" | "es" | "it" => ('.', ',', SymbolPlacement::After),
        "fr" => (' ', ',', SymbolPlacement::After),
        "ru" | "uk" => (' ', ',', SymbolPlacement::After),
        "ar" => (',', '.', SymbolPlacement::After),
        _ => (',', '.', SymbolPlacement::Before),
    };
    NumberStyle {
        group,
        decimal,
        placement,
    }
}

/// Symbols for the currencies the picker offers. Codes outside this table
/// take the plain `"<code> <amount>"` fallback.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "BRL" => Some("R$"),
        "JPY" => Some("¥"),
        "CNY" => Some("¥"),
        "SAR" => Some("ر.س"),
        "ILS" => Some("₪"),
        "RUB" => Some("₽"),
        "UAH" => Some("₴"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Formats an amount with exactly two fraction digits for the locale.
///
/// Unknown currency codes fall back to `"<code> <amount>"` with a plain
/// decimal point.
pub fn format_currency(amount: f64, currency: &str, locale: &LanguageIdentifier) -> String {
    let Some(symbol) = currency_symbol(currency) else {
        return format!("{} {:.2}", currency, amount);
    };

    let style = number_style(locale);
    let number = shape(amount, &style);

    match style.placement {
        SymbolPlacement::Before => format!("{}{}", symbol, number),
        SymbolPlacement::BeforeWithSpace => format!("{} {}", symbol, number),
        SymbolPlacement::After => format!("{} {}", number, symbol),
    }
}

/// Renders `amount` as a grouped two-decimal number in the given style.
fn shape(amount: f64, style: &NumberStyle) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let int_part = cents / 100;
    let frac_part = cents % 100;

    let grouped = group_digits(&int_part.to_string(), style.group);
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}{:02}", sign, grouped, style.decimal, frac_part)
}

/// Renders a calendar date in the locale's numeric convention.
///
/// Day-first for most of Europe, month-first for US English, year-first
/// for East Asia. `NaiveDate` carries no timezone, so the rendered day is
/// always the stored day.
pub fn format_date(date: NaiveDate, locale: &LanguageIdentifier) -> String {
    let pattern = match locale.language.as_str() {
        "en" => "%m/%d/%Y",
        "de" | "ru" | "uk" => "%d.%m.%Y",
        "ja" | "zh" => "%Y/%m/%d",
        _ => "%d/%m/%Y",
    };
    date.format(pattern).to_string()
}

/// Inserts a grouping separator every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(len + len / 3);
    let first_group = len % 3;
    if first_group > 0 {
        result.push_str(&digits[..first_group]);
        result.push(separator);
    }

    for (i, ch) in digits[first_group..].chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str) -> LanguageIdentifier {
        code.parse().expect("valid locale")
    }

    #[test]
    fn us_dollars_use_comma_grouping_and_leading_symbol() {
        assert_eq!(format_currency(2250.0, "USD", &locale("en-US")), "$2,250.00");
        assert_eq!(format_currency(0.0, "USD", &locale("en-US")), "$0.00");
    }

    #[test]
    fn german_euros_use_dot_grouping_and_trailing_symbol() {
        assert_eq!(format_currency(2250.0, "EUR", &locale("de")), "2.250,00 €");
    }

    #[test]
    fn french_euros_group_with_spaces() {
        assert_eq!(
            format_currency(1234567.89, "EUR", &locale("fr")),
            "1 234 567,89 €"
        );
    }

    #[test]
    fn brazilian_reais_lead_with_spaced_symbol() {
        assert_eq!(
            format_currency(1234.5, "BRL", &locale("pt-BR")),
            "R$ 1.234,50"
        );
    }

    #[test]
    fn russian_rubles_trail_the_symbol() {
        assert_eq!(format_currency(1234.5, "RUB", &locale("ru")), "1 234,50 ₽");
    }

    #[test]
    fn unknown_currency_falls_back_to_code_prefix() {
        assert_eq!(format_currency(1234.5, "XYZ", &locale("en-US")), "XYZ 1234.50");
    }

    #[test]
    fn fractions_round_to_two_digits() {
        assert_eq!(format_currency(0.005, "USD", &locale("en-US")), "$0.01");
        assert_eq!(format_currency(99.999, "USD", &locale("en-US")), "$100.00");
    }

    #[test]
    fn grouping_handles_exact_multiples_of_three() {
        assert_eq!(
            format_currency(123456.0, "USD", &locale("en-US")),
            "$123,456.00"
        );
        assert_eq!(format_currency(100.0, "USD", &locale("en-US")), "$100.00");
    }

    #[test]
    fn dates_follow_the_locale_field_order() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(format_date(date, &locale("en-US")), "08/23/2026");
        assert_eq!(format_date(date, &locale("de")), "23.08.2026");
        assert_eq!(format_date(date, &locale("fr")), "23/08/2026");
        assert_eq!(format_date(date, &locale("ja")), "2026/08/23");
    }

    #[test]
    fn formatting_does_not_shift_day_of_month() {
        // No timezone conversion happens anywhere in the pipeline, so the
        // rendered day must match the stored day even at month boundaries.
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_date(date, &locale("en-US")), "03/01/2026");
        assert_ne!(format_date(date, &locale("en-US")), "03/02/2026");
    }
}
