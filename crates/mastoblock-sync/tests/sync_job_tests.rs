use mastoblock_sync::{SyncCycle, SyncJob};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{MockFeed, MockStore};

const INTERVAL: Duration = Duration::from_secs(300);

fn make_job(feed: &Arc<MockFeed>) -> SyncJob {
    let cycle = SyncCycle::new(feed.clone(), Arc::new(MockStore::new()));
    SyncJob::new(cycle, INTERVAL).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_runs_at_start_then_every_interval() {
    let feed = Arc::new(MockFeed::empty());
    let handle = make_job(&feed).start();

    sleep(Duration::from_secs(1)).await;
    assert_eq!(feed.fetch_count(), 1);

    sleep(INTERVAL).await;
    assert_eq!(feed.fetch_count(), 2);

    sleep(INTERVAL).await;
    assert_eq!(feed.fetch_count(), 3);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_without_run_at_start_waits_one_interval() {
    let feed = Arc::new(MockFeed::empty());
    let handle = make_job(&feed).with_run_at_start(false).start();

    sleep(Duration::from_secs(1)).await;
    assert_eq!(feed.fetch_count(), 0);

    sleep(INTERVAL).await;
    assert_eq!(feed.fetch_count(), 1);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_cycle_does_not_stop_job() {
    let feed = Arc::new(MockFeed::empty());
    feed.set_should_fail(true);
    let handle = make_job(&feed).start();

    sleep(INTERVAL * 2 + Duration::from_secs(1)).await;
    assert_eq!(feed.fetch_count(), 3);
    assert!(!handle.is_finished());

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_prevents_further_cycles() {
    let feed = Arc::new(MockFeed::empty());
    let handle = make_job(&feed).start();

    sleep(Duration::from_secs(1)).await;
    handle.stop().await;

    sleep(INTERVAL * 5).await;
    assert_eq!(feed.fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_waits_for_in_flight_cycle() {
    let feed = Arc::new(MockFeed::empty().with_delay(Duration::from_secs(10)));
    let handle = make_job(&feed).start();

    sleep(Duration::from_secs(1)).await;
    assert_eq!(feed.fetch_count(), 0);

    handle.stop().await;
    assert_eq!(feed.fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_cycles_never_overlap() {
    let feed = Arc::new(MockFeed::empty().with_delay(INTERVAL * 2 + Duration::from_secs(5)));
    let handle = make_job(&feed).start();

    sleep(INTERVAL * 10).await;
    assert!(feed.fetch_count() >= 2);
    assert_eq!(feed.max_in_flight(), 1);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_external_token_stops_job() {
    let feed = Arc::new(MockFeed::empty());
    let token = CancellationToken::new();
    let handle = make_job(&feed).with_cancellation(token.clone()).start();

    sleep(Duration::from_secs(1)).await;
    token.cancel();
    sleep(Duration::from_secs(1)).await;

    assert!(handle.is_finished());
    assert_eq!(feed.fetch_count(), 1);
}

#[test]
fn test_zero_interval_is_rejected() {
    let feed = Arc::new(MockFeed::empty());
    let cycle = SyncCycle::new(feed, Arc::new(MockStore::new()));

    let err = SyncJob::new(cycle, Duration::ZERO).err().unwrap();
    assert!(matches!(err, mastoblock_core::SyncError::Config(_)));
}
