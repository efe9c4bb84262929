//! Rule-based advisory messages.
//!
//! Rules run in a fixed order and each appends at most one suggestion, so the
//! output order is the rule order. Nothing here reads the clock: `today` is
//! passed in by the caller.

use crate::core::season::Season;
use crate::core::travel::days_to_travel;
use crate::domain::model::{
    ChecklistItem, Priority, Suggestion, SuggestionKind, TravelerProfile, UserContext,
};
use chrono::NaiveDate;

pub const TRIP_SETTINGS_LINK: &str = "/dashboard/trip";

/// Every id a rule can emit, in rule order.
pub const RULE_IDS: [&str; 9] = [
    "set-travel-date",
    "trip-this-week",
    "trip-approaching",
    "winter-prep",
    "residency-docs",
    "keep-planning",
    "add-passport",
    "boost-progress",
    "critical-items",
];

/// Title keywords that count as "the passport is already on the list".
const PASSPORT_KEYWORDS: [&str; 2] = ["passport", "passaporte"];

pub fn generate_suggestions(
    items: &[ChecklistItem],
    progress: u8,
    context: Option<&UserContext>,
    today: NaiveDate,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // a missing context skips the trip rule; an empty one asks for a date
    if let Some(context) = context {
        suggestions.push(trip_advisory(context, today));
    }

    if !mentions_passport(items) {
        suggestions.push(Suggestion::new(
            "add-passport",
            SuggestionKind::Action,
            "Essential documents",
            "Don't forget to check your passport's expiry date. Add it to your documents list.",
        ));
    }

    if progress > 0 && progress < 30 {
        suggestions.push(Suggestion::new(
            "boost-progress",
            SuggestionKind::Info,
            "Speed up your planning",
            "You are just getting started. How about sorting out your lodging this week?",
        ));
    }

    let critical_pending = items
        .iter()
        .filter(|item| item.status.is_pending() && item.priority == Priority::Critical)
        .count();
    if critical_pending > 0 {
        let noun = if critical_pending == 1 { "item" } else { "items" };
        suggestions.push(Suggestion::new(
            "critical-items",
            SuggestionKind::Warning,
            "Critical items pending",
            format!(
                "You have {} critical {} still open. Give them priority!",
                critical_pending, noun
            ),
        ));
    }

    suggestions
}

/// Exactly one of the trip branches, first match wins.
fn trip_advisory(context: &UserContext, today: NaiveDate) -> Suggestion {
    let Some(travel_date) = context.travel_date else {
        return Suggestion::new(
            "set-travel-date",
            SuggestionKind::Action,
            "Set your travel date",
            "Tell us when you are flying so we can tailor the checklist to your trip.",
        )
        .with_action("Configure trip", TRIP_SETTINGS_LINK);
    };

    let days = days_to_travel(travel_date, today);
    let destination = context.city.as_deref().unwrap_or("Portugal");

    if (-1..=7).contains(&days) {
        Suggestion::new(
            "trip-this-week",
            SuggestionKind::Warning,
            "Your trip is this week",
            format!(
                "You leave for {} in {} days. Double-check tickets, documents and cash for the first days.",
                destination,
                days.max(0)
            ),
        )
    } else if days > 7 && days <= 30 {
        Suggestion::new(
            "trip-approaching",
            SuggestionKind::Action,
            "Your trip is approaching",
            format!(
                "{} days to go. Confirm your lodging and close the critical items on the checklist.",
                days
            ),
        )
    } else if Season::of(travel_date) == Season::Winter {
        Suggestion::new(
            "winter-prep",
            SuggestionKind::Info,
            "Arriving in winter",
            format!(
                "You will land in {} during winter. {}",
                destination,
                Season::Winter.tip()
            ),
        )
    } else if context.profile == Some(TravelerProfile::Resident) {
        Suggestion::new(
            "residency-docs",
            SuggestionKind::Action,
            "Residency paperwork",
            "Moving for good? Start gathering NIF, NISS and visa documents early.",
        )
    } else {
        Suggestion::new(
            "keep-planning",
            SuggestionKind::Info,
            "Keep planning",
            "Take a moment to review your expenses and documents.",
        )
    }
}

fn mentions_passport(items: &[ChecklistItem]) -> bool {
    items.iter().any(|item| {
        let title = item.title.to_lowercase();
        PASSPORT_KEYWORDS.iter().any(|keyword| title.contains(keyword))
    })
}
