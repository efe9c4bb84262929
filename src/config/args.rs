use crate::adapters::http::{DEFAULT_QUOTE_URL, DEFAULT_RATES_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "restarta")]
#[command(about = "Relocation readiness planner for moving to Portugal")]
pub struct CliConfig {
    /// Path to the TOML plan file
    #[arg(long, short, global = true, default_value = "plan.toml")]
    pub plan: String,

    /// Directory for dismissed suggestions and written reports
    #[arg(long, global = true, default_value = "./.restarta")]
    pub data_dir: String,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[arg(long, global = true, default_value = DEFAULT_RATES_URL)]
    pub rates_url: String,

    #[arg(long, global = true, default_value = DEFAULT_QUOTE_URL)]
    pub quote_url: String,

    #[arg(long, global = true, default_value = "10")]
    pub timeout_secs: u64,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Weighted checklist progress and trip countdown
    Status,
    /// Advisory messages for the current plan
    Suggest {
        /// Include suggestions you dismissed earlier
        #[arg(long)]
        all: bool,
    },
    /// Hide a suggestion by its rule id
    Dismiss {
        rule_id: String,
    },
    /// Bring back every dismissed suggestion
    Restore,
    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    /// Live commercial euro quote compared with your base rate
    Quote,
    /// Post-arrival budget projection
    Budget {
        /// Months to project; defaults to the last planned month
        #[arg(long)]
        months: Option<u32>,
        /// Use the default newcomer expense template
        #[arg(long)]
        seed_template: bool,
    },
    /// Printable summary of the whole plan
    Report {
        /// Write to this file under the data dir instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

impl ConfigProvider for CliConfig {
    fn rates_endpoint(&self) -> &str {
        &self.rates_url
    }

    fn quote_endpoint(&self) -> &str {
        &self.quote_url
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("plan", &self.plan)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_url("rates_url", &self.rates_url)?;
        validate_url("quote_url", &self.quote_url)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        if let Command::Budget {
            months: Some(months),
            ..
        } = &self.command
        {
            validate_range("months", *months, 1, 120)?;
        }
        Ok(())
    }
}
