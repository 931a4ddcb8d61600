use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use platewise_shared::MealType;
use platewise_suggestion::{
    EmptyReason, MealSuggestion, SuggestionContext, SuggestionScore, SuggestionService,
    Suggestions,
};
use serde::Serialize;
use time::Date;

use crate::{Config, Snapshot};

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    /// JSON snapshot holding meals and plan records
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Meal slot to suggest for (breakfast, lunch, dinner, snack)
    #[arg(long)]
    pub slot: MealType,

    /// Day being planned, defaults to today
    #[arg(long, value_parser = super::date_arg)]
    pub date: Option<Date>,

    /// Reference day closing the history window, defaults to the current UTC date
    #[arg(long, value_parser = super::date_arg)]
    pub today: Option<Date>,

    /// Only suggest meals carrying one of these tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Only suggest meals whose name contains this text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Meal ids to leave out
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Leave out meals already scheduled in the target date's week
    #[arg(long)]
    pub exclude_week: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SuggestionRow<'a> {
    id: &'a str,
    name: &'a str,
    score: i32,
    breakdown: &'a SuggestionScore,
    reasons: &'a [String],
    uses: u32,
    last_planned: Option<Date>,
}

impl<'a> From<&'a MealSuggestion> for SuggestionRow<'a> {
    fn from(value: &'a MealSuggestion) -> Self {
        Self {
            id: &value.meal.id,
            name: &value.meal.name,
            score: value.total(),
            breakdown: &value.score,
            reasons: &value.reasons,
            uses: value.uses,
            last_planned: value.last_planned,
        }
    }
}

#[derive(Serialize)]
struct EmptyView {
    reason: EmptyReason,
    message: &'static str,
}

#[derive(Serialize)]
struct SuggestionReport<'a> {
    date: Date,
    meal_type: MealType,
    suggestions: Vec<SuggestionRow<'a>>,
    empty: Option<EmptyView>,
}

#[tracing::instrument(skip_all, fields(slot = %args.slot, snapshot = %args.snapshot.display()))]
pub async fn run(config: &Config, args: SuggestArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let today = args.today.unwrap_or_else(platewise_shared::today);
    let target = args.date.unwrap_or(today);
    let store = Snapshot::load(&args.snapshot)?.into_store();

    let mut context = SuggestionContext::new(target, args.slot)
        .tags(args.tags)
        .search(args.search)
        .exclude(args.exclude);

    if args.exclude_week {
        let planned = store.planned_in_week(target).await;
        tracing::debug!(planned = planned.len(), "excluding meals planned this week");
        context = context.exclude(planned);
    }

    let service = SuggestionService::new(store.clone(), store, config.suggestion.clone());
    let suggestions = service.suggest(&context, today).await?;

    if args.json {
        let report = SuggestionReport {
            date: target,
            meal_type: args.slot,
            suggestions: suggestions.items().iter().map(Into::into).collect(),
            empty: suggestions.empty_reason().map(|reason| EmptyView {
                reason,
                message: reason.message(),
            }),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;

        return Ok(());
    }

    match suggestions {
        Suggestions::Empty(reason) => writeln!(out, "No suggestions: {}", reason.message())?,
        Suggestions::Ready(items) => {
            writeln!(out, "{} suggestions for {}", args.slot, target)?;
            for (i, item) in items.iter().enumerate() {
                writeln!(
                    out,
                    "{:>2}. {:<32} {:>5}  {}",
                    i + 1,
                    item.meal.name,
                    item.total(),
                    item.reasons.join(", ")
                )?;
            }
        }
    }

    Ok(())
}
