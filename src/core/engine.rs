use crate::core::progress::ProgressSummary;
use crate::core::suggestions::generate_suggestions;
use crate::domain::model::{ChecklistItem, Suggestion, UserContext};
use crate::domain::ports::Clock;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    pub as_of: NaiveDate,
    pub progress: ProgressSummary,
    pub suggestions: Vec<Suggestion>,
}

/// Progress plus suggestions, evaluated against an injected clock.
pub struct ReadinessEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> ReadinessEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn assess(&self, items: &[ChecklistItem], context: Option<&UserContext>) -> ReadinessReport {
        let as_of = self.clock.today();

        tracing::debug!("Assessing {} checklist items as of {}", items.len(), as_of);
        let progress = ProgressSummary::from_items(items);
        tracing::debug!(
            "Progress {}% ({}), {}/{} relevant items done",
            progress.percentage,
            progress.band,
            progress.completed_items,
            progress.relevant_items
        );

        if context.is_none() {
            tracing::debug!("No trip context supplied, skipping trip advisory");
        }
        let suggestions = generate_suggestions(items, progress.percentage, context, as_of);
        tracing::info!("Generated {} suggestions", suggestions.len());

        ReadinessReport {
            as_of,
            progress,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::core::progress::ReadinessBand;
    use crate::domain::model::{ItemStatus, Priority};

    #[test]
    fn test_assess_uses_injected_date() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let engine = ReadinessEngine::new(FixedClock::new(today));
        let context = UserContext {
            travel_date: NaiveDate::from_ymd_opt(2026, 5, 6),
            ..UserContext::default()
        };

        let report = engine.assess(&[], Some(&context));
        assert_eq!(report.as_of, today);
        assert_eq!(report.suggestions[0].id, "trip-this-week");
    }

    #[test]
    fn test_assess_end_to_end() {
        let engine = ReadinessEngine::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        ));
        let items = vec![
            ChecklistItem::new("1", "Visa")
                .with_status(ItemStatus::Completed)
                .with_priority(Priority::Critical),
            ChecklistItem::new("2", "Flights").with_priority(Priority::Critical),
        ];

        let report = engine.assess(&items, None);
        assert_eq!(report.progress.percentage, 50);
        assert_eq!(report.progress.band, ReadinessBand::InProgress);
        let ids: Vec<_> = report.suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["add-passport", "critical-items"]);
    }
}
