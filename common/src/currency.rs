//! Locale-aware price formatting for chips and product cards.

use crate::{localization::I18nLocale, storefront_model::Money};

const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberStyle {
    decimal: char,
    group: char,
    symbol_first: bool,
}

fn number_style(language: &str) -> NumberStyle {
    match language.to_uppercase().as_str() {
        "EN" => NumberStyle { decimal: '.', group: ',', symbol_first: true },
        "DE" => NumberStyle { decimal: ',', group: '.', symbol_first: false },
        _ => NumberStyle { decimal: ',', group: NBSP, symbol_first: false },
    }
}

fn currency_symbol(currency_code: &str) -> Option<&'static str> {
    match currency_code.to_uppercase().as_str() {
        "CZK" => Some("Kč"),
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "PLN" => Some("zł"),
        _ => None,
    }
}

fn group_digits(integer: &str, group: char) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(group);
        }
        grouped.push(digit);
    }
    grouped
}

fn format_with(amount: f64, currency_code: &str, language: &str, trim_zero_fraction: bool) -> String {
    let style = number_style(language);
    let formatted = format!("{:.2}", amount.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let mut number = group_digits(integer, style.group);
    if !(trim_zero_fraction && fraction.chars().all(|c| c == '0')) {
        number.push(style.decimal);
        number.push_str(fraction);
    }
    let sign = if amount < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };

    match (currency_symbol(currency_code), style.symbol_first) {
        (Some(symbol), true) => format!("{sign}{symbol}{number}"),
        (None, true) => format!("{sign}{}{NBSP}{number}", currency_code.to_uppercase()),
        (Some(symbol), false) => format!("{sign}{number}{NBSP}{symbol}"),
        (None, false) => format!("{sign}{number}{NBSP}{}", currency_code.to_uppercase()),
    }
}

/// Formats `amount` in the locale's currency with two decimals.
pub fn format_currency(amount: f64, locale: &I18nLocale) -> String {
    format_with(amount, &locale.currency, &locale.language, false)
}

/// Formats a product price in its own currency, dropping a `.00` fraction.
pub fn format_money(money: &Money, locale: &I18nLocale) -> String {
    format_with(money.value(), &money.currency_code, &locale.language, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> I18nLocale {
        I18nLocale::new("EN", "US", "USD", "United States (USD $)")
    }

    #[test]
    fn formats_czech_crowns() {
        let locale = I18nLocale::default();
        assert_eq!(format_currency(100.0, &locale), "100,00\u{a0}Kč");
        assert_eq!(format_currency(1234567.5, &locale), "1\u{a0}234\u{a0}567,50\u{a0}Kč");
    }

    #[test]
    fn formats_dollars_and_euros() {
        assert_eq!(format_currency(1200.0, &en_us()), "$1,200.00");
        assert_eq!(format_currency(-5.0, &en_us()), "-$5.00");
        let german = I18nLocale::new("DE", "DE", "EUR", "Deutschland");
        assert_eq!(format_currency(1200.5, &german), "1.200,50\u{a0}€");
    }

    #[test]
    fn unknown_currency_uses_its_code() {
        let locale = I18nLocale::new("EN", "JP", "JPY", "Japan");
        assert_eq!(format_currency(10.0, &locale), "JPY\u{a0}10.00");
    }

    #[test]
    fn money_drops_trailing_zero_fraction() {
        let money = Money { amount: "25.0".into(), currency_code: "USD".into() };
        assert_eq!(format_money(&money, &en_us()), "$25");
        let money = Money { amount: "25.5".into(), currency_code: "USD".into() };
        assert_eq!(format_money(&money, &en_us()), "$25.50");
        let money = Money { amount: "499.0".into(), currency_code: "CZK".into() };
        assert_eq!(format_money(&money, &I18nLocale::default()), "499\u{a0}Kč");
    }
}
