use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domains::counts::models::{CountStatus, CountSummary};

/// Count summary as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountSummaryData {
    pub id: i32,
    pub name: String,
    pub status: CountStatus,
    pub count_date: NaiveDate,
    pub donation_count: i64,
    /// Decimal string, e.g. "125.50"
    pub total_amount: String,
}

impl From<CountSummary> for CountSummaryData {
    fn from(summary: CountSummary) -> Self {
        Self {
            id: summary.id.as_i32(),
            name: summary.name,
            status: summary.status,
            count_date: summary.count_date,
            donation_count: summary.donation_count,
            total_amount: format_amount(summary.total_amount),
        }
    }
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
