use std::sync::Arc;

use time::Date;
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    EmptyReason, MealCatalog, MealSuggestion, PlanHistory, SuggestionContext, SuggestionService,
    Suggestions,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SuggestionState {
    #[default]
    Loading,
    Ready(Vec<MealSuggestion>),
    Empty(EmptyReason),
    Failed(String),
}

impl From<platewise_shared::Result<Suggestions>> for SuggestionState {
    fn from(value: platewise_shared::Result<Suggestions>) -> Self {
        match value {
            Ok(Suggestions::Ready(items)) => SuggestionState::Ready(items),
            Ok(Suggestions::Empty(reason)) => SuggestionState::Empty(reason),
            Err(err) => SuggestionState::Failed(err.to_string()),
        }
    }
}

/// Keeps a suggestion state up to date while the request context or the
/// underlying store change.
///
/// A result computed from inputs that changed mid-flight is never published;
/// the feed recomputes with the latest inputs instead. The state starts as
/// `Loading`. After `Failed`, sending the same context again retries.
/// The task ends once both input channels close; dropping the feed stops it too.
pub struct SuggestionFeed {
    state: watch::Receiver<SuggestionState>,
    handle: JoinHandle<()>,
}

struct OpenInputs {
    context: bool,
    revision: bool,
}

impl SuggestionFeed {
    pub fn spawn<C, H, F>(
        service: Arc<SuggestionService<C, H>>,
        context: watch::Receiver<SuggestionContext>,
        revision: watch::Receiver<u64>,
        today: F,
    ) -> Self
    where
        C: MealCatalog + 'static,
        H: PlanHistory + 'static,
        F: Fn() -> Date + Send + Sync + 'static,
    {
        let (tx, state) = watch::channel(SuggestionState::Loading);
        let handle = tokio::spawn(run(service, context, revision, today, tx));

        Self { state, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.clone()
    }

    pub fn state(&self) -> SuggestionState {
        self.state.borrow().clone()
    }
}

impl Drop for SuggestionFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<C, H, F>(
    service: Arc<SuggestionService<C, H>>,
    mut context: watch::Receiver<SuggestionContext>,
    mut revision: watch::Receiver<u64>,
    today: F,
    tx: watch::Sender<SuggestionState>,
) where
    C: MealCatalog,
    H: PlanHistory,
    F: Fn() -> Date,
{
    let mut open = OpenInputs {
        context: true,
        revision: true,
    };

    loop {
        let current = context.borrow_and_update().clone();
        revision.borrow_and_update();

        let result = service.suggest(&current, today()).await;

        let stale = context.has_changed().unwrap_or(false)
            || revision.has_changed().unwrap_or(false);
        if stale {
            tracing::debug!("suggestion inputs changed during computation, discarding result");
            continue;
        }

        tx.send_replace(result.into());

        if !wait_for_change(&mut context, &mut revision, &mut open).await {
            tracing::debug!("suggestion inputs closed, stopping feed");
            return;
        }
    }
}

/// Waits until either input changes. Returns false once both are closed.
async fn wait_for_change(
    context: &mut watch::Receiver<SuggestionContext>,
    revision: &mut watch::Receiver<u64>,
    open: &mut OpenInputs,
) -> bool {
    loop {
        tokio::select! {
            changed = context.changed(), if open.context => match changed {
                Ok(()) => return true,
                Err(_) => open.context = false,
            },
            changed = revision.changed(), if open.revision => match changed {
                Ok(()) => return true,
                Err(_) => open.revision = false,
            },
            else => return false,
        }
    }
}
