use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Source of "today". Date-only so day differences never depend on the
/// time of day or the offset of the machine.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn rates_endpoint(&self) -> &str;
    fn quote_endpoint(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}

/// Third-party exchange rate lookup.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Units of `to` bought by one unit of `from`. Codes arrive upper-cased.
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64>;
}

/// Remembers which suggestions a user has hidden, keyed by
/// `(user_id, rule_id)`.
#[async_trait]
pub trait DismissalStore: Send + Sync {
    async fn dismissed(&self, user_id: &str) -> Result<HashSet<String>>;
    async fn dismiss(&self, user_id: &str, rule_id: &str) -> Result<()>;
    async fn restore_all(&self, user_id: &str) -> Result<()>;
}
