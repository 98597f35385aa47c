//! Fan-out / fan-in of per-item price updates.

use std::sync::Arc;

use pricer_catalog::{CatalogClient, CatalogError, ReqwestTransport, Transport};
use pricer_core::{FailureKind, Item, PriceAdjustment};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::BatchError;
use crate::outcome::{BatchResult, BatchState, UpdateOutcome, UpdateStatus};

type Settled = Result<Option<Item>, CatalogError>;

/// Applies one percentage to a set of items, one remote update per item.
///
/// Updates run concurrently and independently: a failing item is recorded
/// and never cancels, delays or alters any other item's update. The call
/// returns only after every dispatched update has settled. Failed items are
/// not retried.
pub struct BatchUpdater<T = ReqwestTransport> {
    client: CatalogClient<T>,
    max_concurrency: Option<usize>,
}

impl<T: Transport> BatchUpdater<T> {
    /// Unbounded fan-out: every item's update is dispatched at once.
    #[must_use]
    pub const fn new(client: CatalogClient<T>) -> Self {
        Self {
            client,
            max_concurrency: None,
        }
    }

    /// Cap the number of updates in flight. `None` or `Some(0)` is unbounded.
    #[must_use]
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|n| *n > 0);
        self
    }

    #[must_use]
    pub const fn client(&self) -> &CatalogClient<T> {
        &self.client
    }

    /// Raise every item's price by `percentage` percent.
    ///
    /// Each item's `price` is replaced with the price the catalog confirms,
    /// and only for items whose update succeeded. Outcomes come back in
    /// input order. Running the same batch twice compounds the increase.
    ///
    /// An empty `items` slice returns an idle result without any request.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidArgument`] if `percentage` is outside
    /// `[0, 100]`. Nothing is dispatched in that case.
    pub async fn apply_percentage(
        &self,
        items: &mut [Item],
        percentage: f64,
        token: &str,
    ) -> Result<BatchResult, BatchError> {
        let adjustment = PriceAdjustment::new(percentage)?;
        if items.is_empty() {
            tracing::info!(percentage, "no items to update");
            return Ok(BatchResult::idle(adjustment));
        }

        tracing::info!(
            count = items.len(),
            percentage,
            state = %BatchState::Running,
            "starting batch price update"
        );

        let settled = self.dispatch(items, adjustment, token).await;

        let outcomes: Vec<UpdateOutcome> = items
            .iter_mut()
            .zip(settled)
            .map(|(item, settled)| record(item, adjustment, settled))
            .collect();

        let result = BatchResult::from_outcomes(adjustment, outcomes);
        if result.state == BatchState::Completed {
            tracing::info!(
                succeeded = result.succeeded,
                failed = result.failed,
                "batch price update completed"
            );
        } else {
            tracing::warn!(failed = result.failed, "batch price update failed for every item");
        }
        Ok(result)
    }

    /// Spawn one task per item and wait for all of them.
    ///
    /// Slot `i` of the returned vector belongs to `items[i]`; `None` means the
    /// task never reported back (panicked or aborted).
    async fn dispatch(
        &self,
        items: &[Item],
        adjustment: PriceAdjustment,
        token: &str,
    ) -> Vec<Option<Settled>> {
        let token: Arc<str> = Arc::from(token);
        let semaphore = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));
        let mut set = JoinSet::new();

        for (idx, item) in items.iter().enumerate() {
            let client = self.client.clone();
            let token = Arc::clone(&token);
            let sem = semaphore.clone();
            let item_id = item.id;
            let new_price = adjustment.apply(item.price);
            set.spawn(async move {
                let _permit = match sem {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                let settled = client.update_item_price(item_id, new_price, &token).await;
                (idx, settled)
            });
        }

        let mut settled: Vec<Option<Settled>> =
            std::iter::repeat_with(|| None).take(items.len()).collect();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, result)) => settled[idx] = Some(result),
                Err(error) => tracing::error!(%error, "price update task did not complete"),
            }
        }
        settled
    }
}

fn record(item: &mut Item, adjustment: PriceAdjustment, settled: Option<Settled>) -> UpdateOutcome {
    let previous_price = item.price;
    let requested_price = adjustment.apply(previous_price);

    let status = match settled {
        Some(Ok(Some(updated))) => {
            item.price = updated.price;
            tracing::info!(item_id = item.id, price = updated.price, "item price updated");
            UpdateStatus::Updated {
                price: updated.price,
            }
        }
        Some(Ok(None)) => {
            tracing::warn!(item_id = item.id, "catalog rejected price update");
            UpdateStatus::Failed {
                kind: FailureKind::RemoteRejected,
                reason: String::from("catalog rejected the update"),
            }
        }
        Some(Err(error)) => {
            tracing::error!(item_id = item.id, %error, "failed to update item");
            UpdateStatus::Failed {
                kind: error.kind(),
                reason: error.to_string(),
            }
        }
        None => UpdateStatus::Failed {
            kind: FailureKind::TaskAborted,
            reason: String::from("update task did not complete"),
        },
    };

    UpdateOutcome {
        item_id: item.id,
        title: item.title.clone(),
        previous_price,
        requested_price,
        status,
    }
}
