pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::clock::{AnyClock, FixedClock, SystemClock};
pub use adapters::http::{AwesomeQuoteClient, ExchangeRateApiClient};
pub use config::cli::LocalStorage;
pub use config::plan_file::PlanFile;
pub use core::converter::CurrencyConverter;
pub use core::engine::{ReadinessEngine, ReadinessReport};
pub use core::progress::compute_progress;
pub use core::suggestions::generate_suggestions;
pub use utils::error::{PlanError, Result};
