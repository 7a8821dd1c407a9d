//! Price recovery from free-text listing fields.
//!
//! Amounts are digits with optional thousands commas and an optional
//! two-digit fraction. Text that does not match yields an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

const AMOUNT: &str = r"([\d,]+(?:\.\d{2})?)";

static APPAREL_PREVIOUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"Previous Price [€$]{AMOUNT}")).unwrap());
static APPAREL_SALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"Sale Price [€$]{AMOUNT}")).unwrap());
static APPAREL_BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"[€$]{AMOUNT}")).unwrap());
static JEWELRY_PREVIOUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"Previous Price \${AMOUNT}")).unwrap());

/// Apparel output always carries the euro sign, whatever the source used.
const APPAREL_SYMBOL: &str = "€";
const JEWELRY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricePair {
    pub original: String,
    pub sale: String,
}

fn capture_amount(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Two-field apparel variant. The page title wins over the price column.
pub fn extract_apparel_prices(price: &str, page_title: &str) -> PricePair {
    let mut original = capture_amount(&APPAREL_PREVIOUS_RE, page_title);
    let sale = capture_amount(&APPAREL_SALE_RE, page_title);

    if original.is_none() {
        original = capture_amount(&APPAREL_PREVIOUS_RE, price)
            .or_else(|| capture_amount(&APPAREL_BARE_RE, price));
    }

    let with_symbol = |amount: Option<String>| {
        amount
            .map(|a| format!("{APPAREL_SYMBOL}{a}"))
            .unwrap_or_default()
    };

    PricePair {
        original: with_symbol(original),
        sale: with_symbol(sale),
    }
}

/// Single-field jewelry variant.
///
/// `sale_raw` is the already-resolved low price. The original price falls
/// back to the sale price, and a sale price equal to the original is
/// dropped so that only real markdowns are reported.
pub fn extract_jewelry_prices(price: &str, sale_raw: &str) -> PricePair {
    let sale = if sale_raw.is_empty() || sale_raw.starts_with(JEWELRY_SYMBOL) {
        sale_raw.to_string()
    } else {
        format!("{JEWELRY_SYMBOL}{sale_raw}")
    };

    let original = capture_amount(&JEWELRY_PREVIOUS_RE, price)
        .map(|a| format!("{JEWELRY_SYMBOL}{a}"))
        .unwrap_or_else(|| sale.clone());

    let sale = if sale == original { String::new() } else { sale };

    PricePair { original, sale }
}
