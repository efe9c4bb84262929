use crate::domain::ports::RateProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_currency_code, validate_positive_amount};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub advice: String,
}

pub struct CurrencyConverter<R: RateProvider> {
    rates: R,
}

impl<R: RateProvider> CurrencyConverter<R> {
    pub fn new(rates: R) -> Self {
        Self { rates }
    }

    /// Converts `amount` of `from` into `to`. Same-currency conversions never
    /// hit the rate provider.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<ConversionResult> {
        validate_positive_amount(amount)?;
        validate_currency_code(from)?;
        validate_currency_code(to)?;

        let from = from.trim().to_ascii_uppercase();
        let to = to.trim().to_ascii_uppercase();

        if from == to {
            return Ok(ConversionResult {
                from_currency: from,
                to_currency: to,
                amount,
                converted_amount: amount,
                exchange_rate: 1.0,
                advice: "Both currencies are the same. No conversion needed.".to_string(),
            });
        }

        tracing::debug!("Fetching {} → {} rate", from, to);
        let exchange_rate = self.rates.fetch_rate(&from, &to).await?;
        let converted_amount = amount * exchange_rate;
        tracing::info!(
            "💱 {:.2} {} = {:.2} {} (rate {:.4})",
            amount,
            from,
            converted_amount,
            to,
            exchange_rate
        );

        let advice = format!("Current rate: 1 {} = {:.4} {}", from, exchange_rate, to);
        Ok(ConversionResult {
            from_currency: from,
            to_currency: to,
            amount,
            converted_amount,
            exchange_rate,
            advice,
        })
    }
}
