//! ISO 4217 currencies the converter accepts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

const fn c(code: &'static str, name: &'static str, symbol: &'static str) -> Currency {
    Currency { code, name, symbol }
}

/// Shown first in pickers.
pub const PINNED_CURRENCIES: [&str; 5] = ["EUR", "USD", "GBP", "BRL", "CHF"];

pub const CURRENCIES: &[Currency] = &[
    c("EUR", "Euro", "€"),
    c("USD", "US Dollar", "$"),
    c("GBP", "Pound Sterling", "£"),
    c("CHF", "Swiss Franc", "Fr"),
    c("BRL", "Brazilian Real", "R$"),
    c("JPY", "Japanese Yen", "¥"),
    c("CNY", "Chinese Yuan", "¥"),
    c("AUD", "Australian Dollar", "A$"),
    c("CAD", "Canadian Dollar", "C$"),
    c("HKD", "Hong Kong Dollar", "HK$"),
    c("SGD", "Singapore Dollar", "S$"),
    c("SEK", "Swedish Krona", "kr"),
    c("KRW", "South Korean Won", "₩"),
    c("NOK", "Norwegian Krone", "kr"),
    c("NZD", "New Zealand Dollar", "NZ$"),
    c("INR", "Indian Rupee", "₹"),
    c("MXN", "Mexican Peso", "Mex$"),
    c("TWD", "New Taiwan Dollar", "NT$"),
    c("ZAR", "South African Rand", "R"),
    c("TRY", "Turkish Lira", "₺"),
    c("DKK", "Danish Krone", "kr"),
    c("PLN", "Polish Złoty", "zł"),
    c("THB", "Thai Baht", "฿"),
    c("IDR", "Indonesian Rupiah", "Rp"),
    c("HUF", "Hungarian Forint", "Ft"),
    c("CZK", "Czech Koruna", "Kč"),
    c("ILS", "Israeli New Shekel", "₪"),
    c("CLP", "Chilean Peso", "CLP$"),
    c("PHP", "Philippine Peso", "₱"),
    c("AED", "UAE Dirham", "د.إ"),
    c("COP", "Colombian Peso", "COL$"),
    c("SAR", "Saudi Riyal", "﷼"),
    c("MYR", "Malaysian Ringgit", "RM"),
    c("RON", "Romanian Leu", "lei"),
    c("ARS", "Argentine Peso", "AR$"),
    c("UYU", "Uruguayan Peso", "$U"),
    c("PYG", "Paraguayan Guaraní", "₲"),
    c("PEN", "Peruvian Sol", "S/"),
    c("AOA", "Angolan Kwanza", "Kz"),
    c("MZN", "Mozambican Metical", "MT"),
    c("CVE", "Cape Verdean Escudo", "Esc"),
];

pub fn find(code: &str) -> Option<&'static Currency> {
    let upper = code.trim().to_ascii_uppercase();
    CURRENCIES.iter().find(|currency| currency.code == upper)
}

pub fn is_valid_currency(code: &str) -> bool {
    find(code).is_some()
}

/// Falls back to the code itself for unknown currencies.
pub fn currency_name(code: &str) -> String {
    find(code).map_or_else(|| code.to_string(), |currency| currency.name.to_string())
}

pub fn currency_symbol(code: &str) -> String {
    find(code).map_or_else(|| code.to_string(), |currency| currency.symbol.to_string())
}
