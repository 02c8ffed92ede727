//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use chrono::NaiveDate;
use platesync_core::common::{ChurchId, CountId, MemberId};
use platesync_core::domains::counts::{Count, CountStatus};
use platesync_core::domains::donations::Donation;
use platesync_core::domains::member::Member;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Create a test member
pub async fn create_test_member(pool: &PgPool, church_id: &ChurchId) -> Result<MemberId> {
    let member = Member::create(church_id, "Test", "Member", None, pool).await?;
    Ok(member.id)
}

/// Create a count with the given status, dated 2024-01-07
pub async fn create_test_count(
    pool: &PgPool,
    church_id: &ChurchId,
    name: &str,
    status: CountStatus,
) -> Result<CountId> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 7).expect("valid date");
    create_test_count_on(pool, church_id, name, status, date).await
}

/// Create a count with the given status and date
pub async fn create_test_count_on(
    pool: &PgPool,
    church_id: &ChurchId,
    name: &str,
    status: CountStatus,
    count_date: NaiveDate,
) -> Result<CountId> {
    let count = Count::create(church_id, name, status, count_date, pool).await?;
    Ok(count.id)
}

/// Record a donation of `cents` into a count
pub async fn create_test_donation(
    pool: &PgPool,
    church_id: &ChurchId,
    member_id: Option<MemberId>,
    count_id: CountId,
    cents: i64,
) -> Result<()> {
    Donation::create(church_id, member_id, count_id, Decimal::new(cents, 2), pool).await?;
    Ok(())
}
