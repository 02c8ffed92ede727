//! Integration tests for the finalized count listing.

mod common;

use crate::common::{
    create_test_count, create_test_count_on, create_test_donation, create_test_member,
    TestHarness,
};
use chrono::NaiveDate;
use platesync_core::domains::counts::actions::list_finalized_counts;
use platesync_core::domains::counts::CountStatus;
use test_context::test_context;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Only finalized counts are listed, newest first, with totals.
#[test_context(TestHarness)]
#[tokio::test]
async fn lists_finalized_counts_newest_first(ctx: &TestHarness) {
    let church = ctx.new_church().await;
    let member = create_test_member(&ctx.db_pool, &church).await.unwrap();

    let older = create_test_count_on(
        &ctx.db_pool,
        &church,
        "December Week 4",
        CountStatus::Finalized,
        date(2024, 12, 22),
    )
    .await
    .unwrap();
    let newer = create_test_count_on(
        &ctx.db_pool,
        &church,
        "December Week 5",
        CountStatus::Finalized,
        date(2024, 12, 29),
    )
    .await
    .unwrap();
    create_test_count(&ctx.db_pool, &church, "Still Open", CountStatus::Open)
        .await
        .unwrap();

    create_test_donation(&ctx.db_pool, &church, Some(member), newer, 2500)
        .await
        .unwrap();
    create_test_donation(&ctx.db_pool, &church, None, newer, 1050)
        .await
        .unwrap();

    let counts = list_finalized_counts(&church, &ctx.deps()).await.unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].id, newer.as_i32());
    assert_eq!(counts[0].donation_count, 2);
    assert_eq!(counts[0].total_amount, "35.50");
    assert_eq!(counts[1].id, older.as_i32());
    assert_eq!(counts[1].donation_count, 0);
    assert_eq!(counts[1].total_amount, "0.00");
}

/// Another church's finalized counts are never returned.
#[test_context(TestHarness)]
#[tokio::test]
async fn listing_is_scoped_to_church(ctx: &TestHarness) {
    let church = ctx.new_church().await;
    let other = ctx.new_church().await;
    create_test_count(&ctx.db_pool, &other, "Other Finalized", CountStatus::Finalized)
        .await
        .unwrap();

    let counts = list_finalized_counts(&church, &ctx.deps()).await.unwrap();

    assert!(counts.is_empty());
}
