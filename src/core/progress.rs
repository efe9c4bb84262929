//! Weighted checklist progress.
//!
//! Every relevant item contributes its priority weight to the total, and
//! completed ones to the numerator as well. Items marked not applicable are
//! left out of both sides.

use crate::domain::model::{ChecklistItem, ItemStatus};
use serde::Serialize;
use std::fmt;

/// Weighted completion percentage in `0..=100`.
///
/// Rounds half up (12.5 → 13) using integer arithmetic, so the result never
/// depends on float formatting. A list with no relevant items scores 0.
pub fn compute_progress(items: &[ChecklistItem]) -> u8 {
    let (total_weight, completed_weight) = items
        .iter()
        .filter(|item| item.status.is_relevant())
        .fold((0u64, 0u64), |(total, done), item| {
            let weight = u64::from(item.priority.weight());
            let done = if item.status == ItemStatus::Completed {
                done + weight
            } else {
                done
            };
            (total + weight, done)
        });

    if total_weight == 0 {
        return 0;
    }

    let rounded = (200 * completed_weight + total_weight) / (2 * total_weight);
    rounded.min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadinessBand {
    AtStart,
    InProgress,
    AlmostReady,
    ReadyToTravel,
}

impl ReadinessBand {
    pub fn from_percentage(percentage: u8) -> Self {
        // thresholds are checked in ascending order, the last hit wins
        let mut band = Self::AtStart;
        if percentage > 25 {
            band = Self::InProgress;
        }
        if percentage > 75 {
            band = Self::AlmostReady;
        }
        if percentage == 100 {
            band = Self::ReadyToTravel;
        }
        band
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AtStart => "At start",
            Self::InProgress => "In progress",
            Self::AlmostReady => "Almost ready",
            Self::ReadyToTravel => "Ready to travel",
        }
    }
}

impl fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Figures shown next to the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub percentage: u8,
    pub band: ReadinessBand,
    pub relevant_items: usize,
    pub completed_items: usize,
}

impl ProgressSummary {
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        let percentage = compute_progress(items);
        let relevant_items = items.iter().filter(|i| i.status.is_relevant()).count();
        let completed_items = items
            .iter()
            .filter(|i| i.status == ItemStatus::Completed)
            .count();

        Self {
            percentage,
            band: ReadinessBand::from_percentage(percentage),
            relevant_items,
            completed_items,
        }
    }

    /// False when nothing on the list counts, so callers can hide the bar.
    pub fn has_data(&self) -> bool {
        self.relevant_items > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Priority;

    fn item(id: &str, status: ItemStatus, priority: Priority) -> ChecklistItem {
        ChecklistItem::new(id, format!("task {id}"))
            .with_status(status)
            .with_priority(priority)
    }

    #[test]
    fn test_empty_list_scores_zero() {
        assert_eq!(compute_progress(&[]), 0);
    }

    #[test]
    fn test_all_not_applicable_scores_zero() {
        let items = vec![
            item("1", ItemStatus::NotApplicable, Priority::Critical),
            item("2", ItemStatus::NotApplicable, Priority::Low),
        ];
        assert_eq!(compute_progress(&items), 0);
        assert!(!ProgressSummary::from_items(&items).has_data());
    }

    #[test]
    fn test_all_relevant_completed_scores_hundred() {
        let items = vec![
            item("1", ItemStatus::Completed, Priority::High),
            item("2", ItemStatus::Completed, Priority::Low),
            item("3", ItemStatus::NotApplicable, Priority::Critical),
        ];
        assert_eq!(compute_progress(&items), 100);
    }

    #[test]
    fn test_critical_outweighs_low() {
        let items = vec![
            item("1", ItemStatus::Completed, Priority::Critical),
            item("2", ItemStatus::Pending, Priority::Low),
        ];
        // 100 * 5/6 = 83.33
        assert_eq!(compute_progress(&items), 83);
    }

    #[test]
    fn test_unspecified_priority_weighs_one() {
        let items = vec![
            item("1", ItemStatus::Completed, Priority::Unspecified),
            item("2", ItemStatus::Pending, Priority::Low),
        ];
        assert_eq!(compute_progress(&items), 50);
    }

    #[test]
    fn test_rounds_half_up() {
        // 1 of 8 → 12.5
        let low_done = vec![
            item("1", ItemStatus::Completed, Priority::Low),
            item("2", ItemStatus::Pending, Priority::Critical),
            item("3", ItemStatus::Pending, Priority::Medium),
        ];
        assert_eq!(compute_progress(&low_done), 13);

        // 7 of 8 → 87.5
        let mostly_done = vec![
            item("1", ItemStatus::Pending, Priority::Low),
            item("2", ItemStatus::Completed, Priority::Critical),
            item("3", ItemStatus::Completed, Priority::Medium),
        ];
        assert_eq!(compute_progress(&mostly_done), 88);
    }

    #[test]
    fn test_monotonic_when_adding_items() {
        let mut items = vec![
            item("1", ItemStatus::Completed, Priority::Medium),
            item("2", ItemStatus::Pending, Priority::High),
        ];
        let base = compute_progress(&items);

        for priority in [Priority::Low, Priority::Medium, Priority::High, Priority::Critical] {
            let mut with_done = items.clone();
            with_done.push(item("done", ItemStatus::Completed, priority));
            assert!(compute_progress(&with_done) >= base);

            let mut with_pending = items.clone();
            with_pending.push(item("todo", ItemStatus::Pending, priority));
            assert!(compute_progress(&with_pending) <= base);
        }

        items.push(item("3", ItemStatus::NotApplicable, Priority::Critical));
        assert_eq!(compute_progress(&items), base);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ReadinessBand::from_percentage(0), ReadinessBand::AtStart);
        assert_eq!(ReadinessBand::from_percentage(25), ReadinessBand::AtStart);
        assert_eq!(ReadinessBand::from_percentage(26), ReadinessBand::InProgress);
        assert_eq!(ReadinessBand::from_percentage(75), ReadinessBand::InProgress);
        assert_eq!(ReadinessBand::from_percentage(76), ReadinessBand::AlmostReady);
        assert_eq!(ReadinessBand::from_percentage(99), ReadinessBand::AlmostReady);
        assert_eq!(ReadinessBand::from_percentage(100), ReadinessBand::ReadyToTravel);
    }

    #[test]
    fn test_summary_counts() {
        let items = vec![
            item("1", ItemStatus::Completed, Priority::Critical),
            item("2", ItemStatus::Pending, Priority::Critical),
            item("3", ItemStatus::NotApplicable, Priority::Low),
        ];
        let summary = ProgressSummary::from_items(&items);
        assert_eq!(summary.percentage, 50);
        assert_eq!(summary.band, ReadinessBand::InProgress);
        assert_eq!(summary.relevant_items, 2);
        assert_eq!(summary.completed_items, 1);
    }
}
