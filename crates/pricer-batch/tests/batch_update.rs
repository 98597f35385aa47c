use std::time::Duration;

use pretty_assertions::assert_eq;
use pricer_batch::{BatchError, BatchState, BatchUpdater, UpdateStatus};
use pricer_catalog::testing::{ScriptedTransport, echo_price_update, network_failure, text_reply};
use pricer_catalog::{CatalogClient, Method};
use pricer_core::{FailureKind, Item};

const TOKEN: &str = "token-abc";

fn phones(prices: &[f64]) -> Vec<Item> {
    prices
        .iter()
        .zip(1_u64..)
        .map(|(price, id)| Item::new(id, format!("phone-{id}"), *price, "smartphones"))
        .collect()
}

fn prices(items: &[Item]) -> Vec<f64> {
    items.iter().map(|item| item.price).collect()
}

fn updater(transport: ScriptedTransport) -> BatchUpdater<ScriptedTransport> {
    BatchUpdater::new(CatalogClient::new(transport))
}

#[tokio::test]
async fn ten_percent_raises_every_price() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[1000.0, 800.0, 900.0, 700.0]);

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(result.state, BatchState::Completed);
    assert_eq!((result.succeeded, result.failed), (4, 0));
    assert_eq!(prices(&items), vec![1100.0, 880.0, 990.0, 770.0]);
    assert_eq!(result.summary(), "Successfully updated 4 item prices by 10%.");
    assert_eq!(updater.client().transport().request_count(), 4);
}

#[tokio::test]
async fn requests_carry_rounded_price_and_bearer() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[19.99]);

    updater.apply_percentage(&mut items, 15.0, TOKEN).await.unwrap();

    let requests = updater.client().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].path, "/auth/products/1");
    assert_eq!(requests[0].bearer.as_deref(), Some(TOKEN));
    assert_eq!(requests[0].body, Some(serde_json::json!({ "price": 22.99 })));
    assert_eq!(items[0].price, 22.99);
}

#[tokio::test]
async fn out_of_range_percentage_dispatches_nothing() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[100.0, 200.0]);

    for percentage in [-1.0, 100.5, 150.0, f64::NAN] {
        let err = updater
            .apply_percentage(&mut items, percentage, TOKEN)
            .await
            .unwrap_err();
        assert!(matches!(err, BatchError::InvalidArgument(_)));
    }

    assert_eq!(updater.client().transport().request_count(), 0);
    assert_eq!(prices(&items), vec![100.0, 200.0]);
}

#[tokio::test]
async fn boundary_percentages_are_accepted() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[50.0]);

    updater.apply_percentage(&mut items, 0.0, TOKEN).await.unwrap();
    assert_eq!(items[0].price, 50.0);

    updater.apply_percentage(&mut items, 100.0, TOKEN).await.unwrap();
    assert_eq!(items[0].price, 100.0);
}

#[tokio::test]
async fn one_failing_item_does_not_affect_the_others() {
    let transport = ScriptedTransport::echoing_price_updates().push(
        Method::Put,
        "/auth/products/2",
        network_failure(),
    );
    let updater = updater(transport);
    let mut items = phones(&[1000.0, 800.0, 900.0, 700.0]);

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(result.state, BatchState::Completed);
    assert_eq!((result.succeeded, result.failed), (3, 1));
    assert_eq!(prices(&items), vec![1100.0, 800.0, 990.0, 770.0]);
    assert_eq!(
        result.summary(),
        "Successfully updated 3 item prices by 10%; 1 failed."
    );

    let failed = &result.outcomes[1];
    assert_eq!(failed.item_id, 2);
    assert_eq!(failed.previous_price, 800.0);
    assert_eq!(failed.requested_price, 880.0);
    assert!(matches!(
        failed.status,
        UpdateStatus::Failed {
            kind: FailureKind::NetworkFailure,
            ..
        }
    ));
}

#[tokio::test]
async fn rejected_update_is_recorded_as_remote_rejection() {
    let transport = ScriptedTransport::echoing_price_updates().push(
        Method::Put,
        "/auth/products/1",
        text_reply(404, "Product with id '1' not found"),
    );
    let updater = updater(transport);
    let mut items = phones(&[10.0, 20.0]);

    let result = updater.apply_percentage(&mut items, 50.0, TOKEN).await.unwrap();

    assert_eq!((result.succeeded, result.failed), (1, 1));
    assert!(matches!(
        result.outcomes[0].status,
        UpdateStatus::Failed {
            kind: FailureKind::RemoteRejected,
            ..
        }
    ));
    assert_eq!(prices(&items), vec![10.0, 30.0]);
}

#[tokio::test]
async fn all_failures_yield_failed_state() {
    let updater = updater(ScriptedTransport::new().with_fallback(|_| network_failure()));
    let mut items = phones(&[10.0, 20.0, 30.0]);

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(result.state, BatchState::Failed);
    assert_eq!((result.succeeded, result.failed), (0, 3));
    assert_eq!(result.summary(), "Failed to update any prices. Please try again.");
    assert_eq!(prices(&items), vec![10.0, 20.0, 30.0]);
}

#[tokio::test]
async fn repeated_batches_compound() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[100.0]);

    updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();
    updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(items[0].price, 121.0);
}

#[tokio::test]
async fn empty_set_is_idle_and_sends_nothing() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items: Vec<Item> = Vec::new();

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(result.state, BatchState::Idle);
    assert_eq!((result.succeeded, result.failed), (0, 0));
    assert_eq!(result.summary(), "No items to update.");
    assert_eq!(updater.client().transport().request_count(), 0);
}

#[tokio::test]
async fn blank_token_fails_every_item_without_requests() {
    let updater = updater(ScriptedTransport::echoing_price_updates());
    let mut items = phones(&[10.0, 20.0]);

    let result = updater.apply_percentage(&mut items, 10.0, "  ").await.unwrap();

    assert_eq!(result.state, BatchState::Failed);
    assert!(result.outcomes.iter().all(|o| matches!(
        o.status,
        UpdateStatus::Failed {
            kind: FailureKind::InvalidArgument,
            ..
        }
    )));
    assert_eq!(updater.client().transport().request_count(), 0);
}

#[tokio::test]
async fn outcomes_follow_input_order() {
    let transport =
        ScriptedTransport::echoing_price_updates().with_latency(Duration::from_millis(5));
    let updater = updater(transport);
    let mut items = vec![
        Item::new(7, "seven", 70.0, "smartphones"),
        Item::new(3, "three", 30.0, "smartphones"),
        Item::new(9, "nine", 90.0, "smartphones"),
    ];

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    let ids: Vec<u64> = result.outcomes.iter().map(|o| o.item_id).collect();
    assert_eq!(ids, vec![7, 3, 9]);
    assert_eq!(prices(&items), vec![77.0, 33.0, 99.0]);
}

#[tokio::test]
async fn updates_run_concurrently() {
    let transport =
        ScriptedTransport::echoing_price_updates().with_latency(Duration::from_millis(50));
    let updater = updater(transport);
    let mut items = phones(&[1.0, 2.0, 3.0, 4.0]);

    updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(updater.client().transport().peak_in_flight(), 4);
}

#[tokio::test]
async fn concurrency_cap_is_respected() {
    let transport =
        ScriptedTransport::echoing_price_updates().with_latency(Duration::from_millis(20));
    let updater = updater(transport).with_max_concurrency(Some(2));
    let mut items = phones(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!(result.succeeded, 5);
    assert!(updater.client().transport().peak_in_flight() <= 2);
}

#[tokio::test]
async fn panicking_update_is_reported_as_aborted() {
    let transport = ScriptedTransport::new().with_fallback(|request| {
        assert!(request.path != "/auth/products/2", "transport blew up");
        echo_price_update(request)
    });
    let updater = updater(transport);
    let mut items = phones(&[10.0, 20.0, 30.0]);

    let result = updater.apply_percentage(&mut items, 10.0, TOKEN).await.unwrap();

    assert_eq!((result.succeeded, result.failed), (2, 1));
    assert!(matches!(
        result.outcomes[1].status,
        UpdateStatus::Failed {
            kind: FailureKind::TaskAborted,
            ..
        }
    ));
    assert_eq!(prices(&items), vec![11.0, 20.0, 33.0]);
}
