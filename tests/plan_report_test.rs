use anyhow::Result;
use chrono::NaiveDate;
use restarta::adapters::dismissals::JsonDismissalStore;
use restarta::core::dismissal::active_suggestions;
use restarta::core::finance::PurchaseSummary;
use restarta::core::report::{render_report, ReportInput};
use restarta::core::{DismissalStore, Storage};
use restarta::utils::validation::Validate;
use restarta::{FixedClock, LocalStorage, PlanFile, ReadinessEngine};
use tempfile::TempDir;

const PLAN: &str = r#"
[user]
id = "ana"
name = "Ana Souza"
target_amount = 10000
base_rate = 6.5

[trip]
travel_date = "2026-11-05"
city = "Lisbon"
profile = "TOURIST"

[[checklist]]
id = "flights"
title = "Book flights"
status = "COMPLETED"
priority = "HIGH"
category = "Tickets & Transport"

[[checklist]]
id = "insurance"
title = "Travel insurance"
priority = "CRITICAL"
category = "Health & Safety"

[[checklist]]
id = "sim"
title = "Portuguese SIM card"
status = "NOT_APPLICABLE"
priority = "LOW"
category = "Technology"

[[purchases]]
date = "2026-08-01"
amount_eur = 2000
total_brl = 12400
note = "bank transfer"

[[purchases]]
date = "2026-09-15"
amount_eur = 2000
total_brl = 12600
"#;

#[tokio::test]
async fn test_plan_to_report_with_dismissals() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let plan_path = temp_dir.path().join("plan.toml");
    tokio::fs::write(&plan_path, PLAN).await?;

    let plan = PlanFile::from_file(&plan_path)?;
    plan.validate()?;

    let engine = ReadinessEngine::new(FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()));
    let readiness = engine.assess(&plan.checklist, plan.context());

    // 3 of 8 weight done
    assert_eq!(readiness.progress.percentage, 38);
    let ids: Vec<_> = readiness.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["trip-approaching", "add-passport", "critical-items"]);

    let data_dir = temp_dir.path().join("data").to_string_lossy().into_owned();
    let storage = LocalStorage::new(data_dir.clone());
    let store = JsonDismissalStore::new(storage.clone());
    store.dismiss(plan.user_id(), "add-passport").await?;

    let active = active_suggestions(&store, plan.user_id(), readiness.suggestions.clone()).await?;
    let active_ids: Vec<_> = active.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(active_ids, vec!["trip-approaching", "critical-items"]);

    let summary = PurchaseSummary::from_purchases(&plan.purchases, plan.user.target_amount);
    assert_eq!(summary.total_eur, 4000.0);
    assert!((summary.average_rate - 6.25).abs() < 1e-9);

    let text = render_report(&ReportInput {
        user_name: plan.user.name.as_deref(),
        context: plan.context(),
        readiness: &readiness,
        checklist: &plan.checklist,
        purchases: &plan.purchases,
        purchase_summary: &summary,
        suggestions: &active,
    });

    storage.write_file("reports/plan.txt", text.as_bytes()).await?;
    let saved = String::from_utf8(storage.read_file("reports/plan.txt").await?)?;

    assert!(saved.starts_with("RELOCATION PLAN: Ana Souza"));
    assert!(saved.contains("Trip: 2026-11-05 to Lisbon (20 days to go)"));
    assert!(saved.contains("Readiness: 38% (In progress)  2 active tasks, 1 done"));
    assert!(saved.contains("Technology\n  [-] Portuguese SIM card [Low]"));
    assert!(saved.contains("Total: € 4000.00 for R$ 25000.00 (average 6.250)"));
    assert!(saved.contains("Target: € 10000.00, 40.0% reached, € 6000.00 to go"));
    assert!(saved.contains("Your trip is approaching"));
    assert!(!saved.contains("Essential documents"));

    Ok(())
}

#[test]
fn test_budget_from_plan_file() -> Result<()> {
    let plan = PlanFile::from_toml_str(
        r#"
[[expenses]]
description = "Rent"
amount_eur = 900
start_month = 1
duration_months = 6

[[incomes]]
description = "Remote salary"
amount_eur = 1200
start_month = 3
duration_months = 4
"#,
    )?;
    plan.validate()?;

    let budget = plan.budget();
    assert_eq!(budget.horizon(), 6);
    let months = budget.monthly_projection(6, 2000.0);
    assert_eq!(months[1].balance, 200.0);
    assert_eq!(months[2].net, 300.0);
    assert_eq!(months[5].balance, 1400.0);
    assert_eq!(budget.runway_exhausted_at(6, 2000.0), None);
    assert_eq!(budget.runway_exhausted_at(6, 1000.0), Some(2));
    Ok(())
}
