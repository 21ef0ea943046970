//! Loan (order) models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Order status of loans that are still out
pub const ON_LOAN_STATUS: &str = "On Loan";

/// One (order, item) pair from the orders x order_details x items join
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LoanRow {
    pub order_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub order_status: String,
    pub object_id: i32,
    pub object_name: String,
    pub detail_status: String,
    pub actual_return_time: Option<DateTime<Utc>>,
}

/// An item line within a loan order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoanItemDetail {
    pub object_id: i32,
    pub object_name: String,
    /// Free-form line status, e.g. "On Loan" or "Returned"
    pub detail_status: String,
    /// Absent until the item has been returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_return_time: Option<DateTime<Utc>>,
}

/// A loan order with all of its item lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserLoanResponse {
    pub order_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub order_status: String,
    pub items: Vec<LoanItemDetail>,
}

impl LoanRow {
    /// Split the row into its order-level header and its item line.
    pub fn into_parts(self, user_id: i32) -> (UserLoanResponse, LoanItemDetail) {
        let order = UserLoanResponse {
            order_id: self.order_id,
            user_id,
            start_time: self.start_time,
            end_time: self.end_time,
            order_status: self.order_status,
            items: Vec::new(),
        };
        let item = LoanItemDetail {
            object_id: self.object_id,
            object_name: self.object_name,
            detail_status: self.detail_status,
            actual_return_time: self.actual_return_time,
        };
        (order, item)
    }
}
