use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a checklist task stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Pending,
    Completed,
    /// Excluded from progress entirely.
    NotApplicable,
}

impl ItemStatus {
    pub const fn is_relevant(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// Still needs doing: neither completed nor dismissed as not applicable.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn mark(self) -> &'static str {
        match self {
            Self::Pending => "[ ]",
            Self::Completed => "[x]",
            Self::NotApplicable => "[-]",
        }
    }
}

/// Task importance. Values the plan file does not know about land in
/// `Unspecified`, which weighs the same as `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Priority {
    /// Weight used by the progress aggregator.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Low | Self::Unspecified => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unspecified => "-",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Option<String>,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: ItemStatus::default(),
            priority: Priority::default(),
            category: None,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelerProfile {
    Tourist,
    Resident,
}

impl TravelerProfile {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tourist => "Tourist",
            Self::Resident => "Resident",
        }
    }
}

/// Trip metadata that personalises suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub profile: Option<TravelerProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionKind {
    Warning,
    Info,
    Action,
}

impl SuggestionKind {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
            Self::Action => "💡",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Id of the rule that produced it; stable across calls.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
}

impl Suggestion {
    pub fn new(
        id: &str,
        kind: SuggestionKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.into(),
            description: description.into(),
            kind,
            action_label: None,
            action_link: None,
        }
    }

    pub fn with_action(mut self, label: &str, link: &str) -> Self {
        self.action_label = Some(label.to_string());
        self.action_link = Some(link.to_string());
        self
    }
}

/// One BRL→EUR currency purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub date: NaiveDate,
    pub amount_eur: f64,
    pub total_brl: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl Purchase {
    /// BRL paid per euro in this purchase.
    pub fn rate(&self) -> f64 {
        if self.amount_eur > 0.0 {
            self.total_brl / self.amount_eur
        } else {
            0.0
        }
    }
}

/// Recurring post-arrival expense or income, in euros per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedEntry {
    pub description: String,
    pub amount_eur: f64,
    /// 1-based month after arrival.
    pub start_month: u32,
    pub duration_months: u32,
}

impl PlannedEntry {
    pub fn new(description: &str, amount_eur: f64, start_month: u32, duration_months: u32) -> Self {
        Self {
            description: description.to_string(),
            amount_eur,
            start_month,
            duration_months,
        }
    }

    pub fn total(&self) -> f64 {
        self.amount_eur * f64::from(self.duration_months)
    }

    pub fn is_active_in(&self, month: u32) -> bool {
        month >= self.start_month && month < self.start_month + self.duration_months
    }
}
