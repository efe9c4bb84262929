use crate::core::finance::DEFAULT_BASE_RATE;
use crate::core::planning::BudgetPlan;
use crate::domain::model::{ChecklistItem, PlannedEntry, Purchase, UserContext};
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{
    validate_currency_code, validate_non_empty_string, validate_non_negative_amount,
    validate_range, validate_unique_ids, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub user: UserSettings,
    /// Absent table means the caller has no trip context at all.
    pub trip: Option<UserContext>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    #[serde(default)]
    pub expenses: Vec<PlannedEntry>,
    #[serde(default)]
    pub incomes: Vec<PlannedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_user_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Euros the user wants to have bought before flying.
    #[serde(default)]
    pub target_amount: f64,
    /// BRL per EUR the user considers a fair price.
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_base_rate() -> f64 {
    DEFAULT_BASE_RATE
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            id: default_user_id(),
            name: None,
            target_amount: 0.0,
            base_rate: default_base_rate(),
            currency: default_currency(),
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl PlanFile {
    /// Loads a plan from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a plan from TOML text, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn context(&self) -> Option<&UserContext> {
        self.trip.as_ref()
    }

    pub fn budget(&self) -> BudgetPlan {
        BudgetPlan::new(self.expenses.clone(), self.incomes.clone())
    }

    pub fn validate_plan(&self) -> Result<()> {
        validate_non_empty_string("user.id", &self.user.id)?;
        validate_non_negative_amount("user.target_amount", self.user.target_amount)?;
        if !(self.user.base_rate.is_finite() && self.user.base_rate > 0.0) {
            return Err(PlanError::InvalidConfigValueError {
                field: "user.base_rate".to_string(),
                value: self.user.base_rate.to_string(),
                reason: "Base rate must be greater than zero".to_string(),
            });
        }
        validate_currency_code(&self.user.currency)?;

        validate_unique_ids("checklist.id", self.checklist.iter().map(|i| i.id.as_str()))?;
        for item in &self.checklist {
            validate_non_empty_string(&format!("checklist.{}.title", item.id), &item.title)?;
        }

        for (index, purchase) in self.purchases.iter().enumerate() {
            validate_non_negative_amount(&format!("purchases[{}].amount_eur", index), purchase.amount_eur)?;
            validate_non_negative_amount(&format!("purchases[{}].total_brl", index), purchase.total_brl)?;
        }

        for (table, entries) in [("expenses", &self.expenses), ("incomes", &self.incomes)] {
            for (index, entry) in entries.iter().enumerate() {
                let field = format!("{}[{}]", table, index);
                validate_non_empty_string(&format!("{}.description", field), &entry.description)?;
                validate_non_negative_amount(&format!("{}.amount_eur", field), entry.amount_eur)?;
                validate_range(&format!("{}.start_month", field), entry.start_month, 1, 120)?;
                validate_range(&format!("{}.duration_months", field), entry.duration_months, 1, 120)?;
            }
        }

        Ok(())
    }
}

impl Validate for PlanFile {
    fn validate(&self) -> Result<()> {
        self.validate_plan()
    }
}
