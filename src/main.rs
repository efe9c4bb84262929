use clap::Parser;
use restarta::adapters::dismissals::JsonDismissalStore;
use restarta::core::dismissal::active_suggestions;
use restarta::core::finance::{rate_advice, PurchaseSummary, DEFAULT_BASE_RATE};
use restarta::core::planning::{default_expense_template, BudgetPlan};
use restarta::core::report::{render_report, ReportInput};
use restarta::core::season::Season;
use restarta::core::suggestions::RULE_IDS;
use restarta::core::travel::{countdown_label, days_to_travel};
use restarta::core::{ConfigProvider, DismissalStore, Storage};
use restarta::utils::error::ErrorSeverity;
use restarta::utils::{logger, validation::Validate};
use restarta::{
    AnyClock, AwesomeQuoteClient, CliConfig, Command, CurrencyConverter, ExchangeRateApiClient,
    LocalStorage, PlanFile, ReadinessEngine, Result,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting restarta CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_plan(config: &CliConfig) -> Result<PlanFile> {
    tracing::debug!("📁 Loading plan from: {}", config.plan);
    let plan = PlanFile::from_file(&config.plan)?;
    plan.validate()?;
    Ok(plan)
}

async fn run(config: &CliConfig) -> Result<()> {
    let engine = ReadinessEngine::new(AnyClock::from_override(config.today));
    let storage = LocalStorage::new(config.data_dir().to_string());

    match &config.command {
        Command::Status => {
            let plan = load_plan(config)?;
            let report = engine.assess(&plan.checklist, plan.context());
            let progress = report.progress;

            if progress.has_data() {
                println!("Travel progress: {}% ({})", progress.percentage, progress.band);
                println!(
                    "{} active tasks, {} done",
                    progress.relevant_items, progress.completed_items
                );
            } else {
                println!("Travel progress: no relevant checklist items yet");
            }

            match plan.context().and_then(|c| c.travel_date) {
                Some(date) => {
                    let season = Season::of(date);
                    println!(
                        "Trip: {} ({}), {}. {}",
                        date.format("%Y-%m-%d"),
                        countdown_label(days_to_travel(date, report.as_of)),
                        season,
                        season.tip()
                    );
                }
                None => println!("Trip: travel date not set"),
            }
        }
        Command::Suggest { all } => {
            let plan = load_plan(config)?;
            let report = engine.assess(&plan.checklist, plan.context());
            let suggestions = if *all {
                report.suggestions
            } else {
                let store = JsonDismissalStore::new(storage);
                active_suggestions(&store, plan.user_id(), report.suggestions).await?
            };

            if suggestions.is_empty() {
                println!("✅ Nothing to suggest right now");
            }
            for suggestion in suggestions {
                println!(
                    "{} [{}] {}\n   {}",
                    suggestion.kind.icon(),
                    suggestion.id,
                    suggestion.title,
                    suggestion.description
                );
                if let (Some(label), Some(link)) = (&suggestion.action_label, &suggestion.action_link) {
                    println!("   → {} ({})", label, link);
                }
            }
        }
        Command::Dismiss { rule_id } => {
            let plan = load_plan(config)?;
            if !RULE_IDS.contains(&rule_id.as_str()) {
                tracing::warn!("'{}' is not a known suggestion id", rule_id);
            }
            let store = JsonDismissalStore::new(storage);
            store.dismiss(plan.user_id(), rule_id).await?;
            println!("🙈 Suggestion '{}' dismissed", rule_id);
        }
        Command::Restore => {
            let plan = load_plan(config)?;
            let store = JsonDismissalStore::new(storage);
            store.restore_all(plan.user_id()).await?;
            println!("👀 All suggestions visible again");
        }
        Command::Convert { amount, from, to } => {
            let converter = CurrencyConverter::new(ExchangeRateApiClient::from_config(config)?);
            let result = converter.convert(*amount, from, to).await?;
            println!(
                "{:.2} {} = {:.2} {}",
                result.amount, result.from_currency, result.converted_amount, result.to_currency
            );
            println!("{}", result.advice);
        }
        Command::Quote => {
            let base_rate = match load_plan(config) {
                Ok(plan) => plan.user.base_rate,
                Err(e) => {
                    tracing::warn!("Using default base rate, plan not loaded: {}", e);
                    DEFAULT_BASE_RATE
                }
            };
            let quote = AwesomeQuoteClient::from_config(config)?.euro_quote().await?;
            let advice = rate_advice(quote.ask, base_rate);
            println!(
                "Commercial euro: R$ {:.3} ({}, {:+.1}% vs your base R$ {:.2})",
                advice.current_rate, advice.signal, advice.diff_percent, advice.base_rate
            );
            if let Some(at) = quote.quoted_at {
                println!("Quoted at {}", at);
            }
        }
        Command::Budget {
            months,
            seed_template,
        } => {
            let plan = load_plan(config)?;
            let mut budget = plan.budget();
            if *seed_template || budget.expenses.is_empty() {
                tracing::info!("Using the default expense template");
                budget = BudgetPlan::new(default_expense_template(), budget.incomes);
            }
            let opening = PurchaseSummary::from_purchases(&plan.purchases, plan.user.target_amount)
                .total_eur;
            let horizon = months.unwrap_or_else(|| budget.horizon().max(12));

            println!("Month      Income    Expense        Net    Balance");
            for month in budget.monthly_projection(horizon, opening) {
                println!(
                    "{:>5} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                    month.month, month.income, month.expense, month.net, month.balance
                );
            }
            println!(
                "Planned expenses € {:.2}, incomes € {:.2}",
                budget.total_expenses(),
                budget.total_incomes()
            );
            match budget.runway_exhausted_at(horizon, opening) {
                Some(month) => println!("⚠️ Savings run out in month {}", month),
                None => println!("✅ Savings cover the whole period"),
            }
        }
        Command::Report { output } => {
            let plan = load_plan(config)?;
            let readiness = engine.assess(&plan.checklist, plan.context());
            let store = JsonDismissalStore::new(storage.clone());
            let suggestions =
                active_suggestions(&store, plan.user_id(), readiness.suggestions.clone()).await?;
            let summary = PurchaseSummary::from_purchases(&plan.purchases, plan.user.target_amount);

            let text = render_report(&ReportInput {
                user_name: plan.user.name.as_deref(),
                context: plan.context(),
                readiness: &readiness,
                checklist: &plan.checklist,
                purchases: &plan.purchases,
                purchase_summary: &summary,
                suggestions: &suggestions,
            });

            match output {
                Some(path) => {
                    storage.write_file(path, text.as_bytes()).await?;
                    println!("📁 Report saved to: {}", storage.full_path(path).display());
                }
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
