//! Plain-text summary meant for printing.

use crate::core::engine::ReadinessReport;
use crate::core::finance::PurchaseSummary;
use crate::core::season::Season;
use crate::core::travel::{countdown_label, days_to_travel};
use crate::domain::model::{ChecklistItem, Purchase, Suggestion, UserContext};
use std::collections::BTreeMap;
use std::fmt::Write;

const RULE: &str = "------------------------------------------------------------";
const UNCATEGORISED: &str = "Other";

pub struct ReportInput<'a> {
    pub user_name: Option<&'a str>,
    pub context: Option<&'a UserContext>,
    pub readiness: &'a ReadinessReport,
    pub checklist: &'a [ChecklistItem],
    pub purchases: &'a [Purchase],
    pub purchase_summary: &'a PurchaseSummary,
    /// Already filtered for dismissals.
    pub suggestions: &'a [Suggestion],
}

pub fn render_report(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, input);
    out
}

fn write_report(out: &mut String, input: &ReportInput<'_>) -> std::fmt::Result {
    let today = input.readiness.as_of;

    match input.user_name {
        Some(name) => writeln!(out, "RELOCATION PLAN: {}", name)?,
        None => writeln!(out, "RELOCATION PLAN")?,
    }
    writeln!(out, "Generated on {}", today.format("%Y-%m-%d"))?;
    writeln!(out, "{}", RULE)?;

    write_trip(out, input.context, today)?;
    writeln!(out, "{}", RULE)?;

    let progress = &input.readiness.progress;
    writeln!(
        out,
        "Readiness: {}% ({})  {} active tasks, {} done",
        progress.percentage, progress.band, progress.relevant_items, progress.completed_items
    )?;
    writeln!(out)?;
    write_checklist(out, input.checklist)?;
    writeln!(out, "{}", RULE)?;

    write_purchases(out, input.purchases, input.purchase_summary)?;

    if !input.suggestions.is_empty() {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Suggestions")?;
        for suggestion in input.suggestions {
            writeln!(
                out,
                "  {} {}: {}",
                suggestion.kind.icon(),
                suggestion.title,
                suggestion.description
            )?;
        }
    }

    Ok(())
}

fn write_trip(
    out: &mut String,
    context: Option<&UserContext>,
    today: chrono::NaiveDate,
) -> std::fmt::Result {
    let Some(context) = context else {
        return writeln!(out, "Trip: not configured");
    };

    let city = context.city.as_deref().unwrap_or("Not set");
    let profile = context.profile.map_or("Not set", |p| p.label());

    match context.travel_date {
        Some(date) => {
            let season = Season::of(date);
            writeln!(
                out,
                "Trip: {} to {} ({})",
                date.format("%Y-%m-%d"),
                city,
                countdown_label(days_to_travel(date, today))
            )?;
            writeln!(out, "Profile: {}", profile)?;
            writeln!(out, "Season on arrival: {}. {}", season, season.tip())
        }
        None => {
            writeln!(out, "Trip: date not set, destination {}", city)?;
            writeln!(out, "Profile: {}", profile)
        }
    }
}

fn write_checklist(out: &mut String, items: &[ChecklistItem]) -> std::fmt::Result {
    if items.is_empty() {
        return writeln!(out, "Checklist is empty.");
    }

    let mut by_category: BTreeMap<&str, Vec<&ChecklistItem>> = BTreeMap::new();
    for item in items {
        let category = item.category.as_deref().unwrap_or(UNCATEGORISED);
        by_category.entry(category).or_default().push(item);
    }

    for (category, items) in by_category {
        writeln!(out, "{}", category)?;
        for item in items {
            writeln!(
                out,
                "  {} {} [{}]",
                item.status.mark(),
                item.title,
                item.priority
            )?;
        }
    }
    Ok(())
}

fn write_purchases(
    out: &mut String,
    purchases: &[Purchase],
    summary: &PurchaseSummary,
) -> std::fmt::Result {
    writeln!(out, "Currency purchases")?;
    if purchases.is_empty() {
        writeln!(out, "  none yet")?;
    }
    for purchase in purchases {
        writeln!(
            out,
            "  {}  € {:>10.2}  R$ {:>11.2}  @ {:.3}{}",
            purchase.date.format("%Y-%m-%d"),
            purchase.amount_eur,
            purchase.total_brl,
            purchase.rate(),
            purchase
                .note
                .as_deref()
                .map(|n| format!("  {}", n))
                .unwrap_or_default()
        )?;
    }
    writeln!(
        out,
        "Total: € {:.2} for R$ {:.2} (average {:.3})",
        summary.total_eur, summary.total_brl, summary.average_rate
    )?;
    if summary.target_eur > 0.0 {
        writeln!(
            out,
            "Target: € {:.2}, {:.1}% reached, € {:.2} to go",
            summary.target_eur, summary.target_progress, summary.remaining_eur
        )?;
    }
    Ok(())
}
