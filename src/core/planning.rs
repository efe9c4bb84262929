//! Post-arrival budget: recurring expenses and incomes laid out month by month.

use crate::domain::model::PlannedEntry;
use serde::Serialize;

/// Typical first-year costs for a newcomer in Lisbon, used to seed an empty budget.
pub fn default_expense_template() -> Vec<PlannedEntry> {
    vec![
        PlannedEntry::new("Temporary lodging (Airbnb/hotel)", 800.0, 1, 1),
        PlannedEntry::new("Rent (first month + deposit)", 1600.0, 2, 1),
        PlannedEntry::new("Rent (monthly)", 800.0, 3, 10),
        PlannedEntry::new("Groceries", 300.0, 1, 12),
        PlannedEntry::new("Transport (Navegante pass)", 40.0, 1, 12),
        PlannedEntry::new("Mobile + internet", 25.0, 1, 12),
        PlannedEntry::new("Initial fees (NIF/NISS/other)", 50.0, 1, 1),
    ]
}

pub fn total_of(entries: &[PlannedEntry]) -> f64 {
    entries.iter().map(PlannedEntry::total).sum()
}

fn active_sum(entries: &[PlannedEntry], month: u32) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.is_active_in(month))
        .map(|entry| entry.amount_eur)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthProjection {
    /// 1-based month after arrival.
    pub month: u32,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
    /// Savings left at the end of the month.
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub expenses: Vec<PlannedEntry>,
    pub incomes: Vec<PlannedEntry>,
}

impl BudgetPlan {
    pub fn new(expenses: Vec<PlannedEntry>, incomes: Vec<PlannedEntry>) -> Self {
        Self { expenses, incomes }
    }

    pub fn total_expenses(&self) -> f64 {
        total_of(&self.expenses)
    }

    pub fn total_incomes(&self) -> f64 {
        total_of(&self.incomes)
    }

    /// Last month any entry is still running, 0 for an empty plan.
    pub fn horizon(&self) -> u32 {
        self.expenses
            .iter()
            .chain(&self.incomes)
            .filter(|entry| entry.duration_months > 0)
            .map(|entry| entry.start_month + entry.duration_months - 1)
            .max()
            .unwrap_or(0)
    }

    /// Month-by-month cash flow starting from `opening_balance` euros.
    pub fn monthly_projection(&self, months: u32, opening_balance: f64) -> Vec<MonthProjection> {
        let mut balance = opening_balance;
        (1..=months)
            .map(|month| {
                let income = active_sum(&self.incomes, month);
                let expense = active_sum(&self.expenses, month);
                let net = income - expense;
                balance += net;
                MonthProjection {
                    month,
                    income,
                    expense,
                    net,
                    balance,
                }
            })
            .collect()
    }

    /// First month in which savings run out, if they do within `months`.
    pub fn runway_exhausted_at(&self, months: u32, opening_balance: f64) -> Option<u32> {
        self.monthly_projection(months, opening_balance)
            .into_iter()
            .find(|m| m.balance < 0.0)
            .map(|m| m.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_total() {
        // 800 + 1600 + 8000 + 3600 + 480 + 300 + 50
        assert_eq!(total_of(&default_expense_template()), 14_830.0);
    }

    #[test]
    fn test_projection_respects_windows() {
        let plan = BudgetPlan::new(
            vec![
                PlannedEntry::new("Lodging", 800.0, 1, 1),
                PlannedEntry::new("Rent", 700.0, 2, 2),
            ],
            vec![PlannedEntry::new("Salary", 1000.0, 2, 12)],
        );

        let months = plan.monthly_projection(4, 1000.0);
        assert_eq!(months.len(), 4);
        assert_eq!((months[0].income, months[0].expense, months[0].balance), (0.0, 800.0, 200.0));
        assert_eq!((months[1].income, months[1].expense, months[1].net), (1000.0, 700.0, 300.0));
        assert_eq!(months[2].balance, 800.0);
        assert_eq!(months[3].expense, 0.0);
        assert_eq!(months[3].balance, 1800.0);
    }

    #[test]
    fn test_horizon_and_runway() {
        let plan = BudgetPlan::new(default_expense_template(), vec![]);
        assert_eq!(plan.horizon(), 12);
        assert_eq!(plan.runway_exhausted_at(12, 20_000.0), None);
        assert_eq!(plan.runway_exhausted_at(12, 1500.0), Some(2));
        assert_eq!(BudgetPlan::new(vec![], vec![]).horizon(), 0);
    }
}
