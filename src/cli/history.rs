use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use platewise_suggestion::SuggestionService;
use serde::Serialize;
use time::Date;

use crate::{Config, Snapshot};

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// JSON snapshot holding meals and plan records
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Last day of the history window, defaults to the current UTC date
    #[arg(long, value_parser = super::date_arg)]
    pub today: Option<Date>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct UsageRow<'a> {
    meal_id: &'a str,
    name: Option<&'a str>,
    uses: u32,
    last_planned: Option<Date>,
}

#[tracing::instrument(skip_all, fields(snapshot = %args.snapshot.display()))]
pub async fn run(config: &Config, args: HistoryArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let today = args.today.unwrap_or_else(platewise_shared::today);
    let store = Snapshot::load(&args.snapshot)?.into_store();
    let service = SuggestionService::new(store.clone(), store, config.suggestion.clone());

    let usage = service.usage(today).await?;

    if args.json {
        let rows = usage
            .iter()
            .map(|u| UsageRow {
                meal_id: &u.meal_id,
                name: u.name.as_deref(),
                uses: u.history.uses,
                last_planned: u.history.last_planned,
            })
            .collect::<Vec<_>>();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;

        return Ok(());
    }

    let since = config.suggestion.lookback_start(today);
    if usage.is_empty() {
        writeln!(out, "No meals planned since {since}")?;
        return Ok(());
    }

    writeln!(out, "Meal usage since {since}")?;
    for item in &usage {
        let name = item
            .name
            .to_owned()
            .unwrap_or_else(|| format!("(deleted meal {})", item.meal_id));
        let last = item
            .history
            .last_planned
            .map(|d| d.to_string())
            .unwrap_or_default();

        writeln!(out, "{:>3}x  {:<32} last {}", item.history.uses, name, last)?;
    }

    Ok(())
}
