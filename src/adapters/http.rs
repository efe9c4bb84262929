//! HTTP clients for the two public rate services the app talks to.

use crate::domain::ports::{ConfigProvider, RateProvider};
use crate::utils::error::{PlanError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest";
pub const DEFAULT_QUOTE_URL: &str = "https://economia.awesomeapi.com.br/last";

/// Pair requested from the quote service: euro against the tourism real.
pub const EURO_QUOTE_PAIR: &str = "EUR-BRLT";
const EURO_QUOTE_KEY: &str = "EURBRLT";

// the quote service rejects requests without a browser-like agent
const USER_AGENT: &str = "Mozilla/5.0 (compatible; restarta/0.1)";

fn build_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?)
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    rates: Option<HashMap<String, f64>>,
    base_code: Option<String>,
    error: Option<String>,
}

/// exchangerate-api.com `latest/{BASE}` endpoint.
pub struct ExchangeRateApiClient {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.rates_endpoint(), config.request_timeout_secs())
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/{}", self.base_url, from);
        tracing::debug!("Making rate request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Rate API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PlanError::RateServiceError {
                message: format!("rate service answered {}", response.status()),
            });
        }

        let body: LatestRatesResponse = response.json().await?;
        if let Some(base) = body.base_code.as_deref() {
            tracing::debug!("Rates quoted against {}", base);
        }
        let rates = match (body.result.as_deref(), body.rates) {
            (Some("error"), _) | (_, None) => {
                return Err(PlanError::RateServiceError {
                    message: body
                        .error
                        .unwrap_or_else(|| "rate service returned no rates".to_string()),
                });
            }
            (_, Some(rates)) => rates,
        };

        match rates.get(to) {
            Some(rate) if *rate > 0.0 => Ok(*rate),
            _ => Err(PlanError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    bid: String,
    ask: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    create_date: Option<String>,
}

/// Live commercial euro quote in BRL.
#[derive(Debug, Clone, PartialEq)]
pub struct EuroQuote {
    pub bid: f64,
    pub ask: f64,
    pub name: Option<String>,
    pub quoted_at: Option<String>,
}

/// economia.awesomeapi.com.br `last/{PAIR}` endpoint.
pub struct AwesomeQuoteClient {
    client: Client,
    base_url: String,
}

impl AwesomeQuoteClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.quote_endpoint(), config.request_timeout_secs())
    }

    pub async fn euro_quote(&self) -> Result<EuroQuote> {
        let url = format!("{}/{}", self.base_url, EURO_QUOTE_PAIR);
        tracing::debug!("Making quote request to: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PlanError::RateServiceError {
                message: format!("upstream quote service failed with status {}", response.status()),
            });
        }

        let mut body: HashMap<String, RawQuote> = response.json().await?;
        let raw = body
            .remove(EURO_QUOTE_KEY)
            .ok_or_else(|| PlanError::RateServiceError {
                message: format!("invalid quote payload: {} missing", EURO_QUOTE_KEY),
            })?;

        Ok(EuroQuote {
            bid: parse_price("bid", &raw.bid)?,
            ask: parse_price("ask", &raw.ask)?,
            name: raw.name,
            quoted_at: raw.create_date,
        })
    }
}

fn parse_price(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| PlanError::RateServiceError {
            message: format!("invalid {} price '{}'", field, raw),
        })
}
