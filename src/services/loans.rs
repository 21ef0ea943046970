//! Active loan queries
//!
//! The storage layer returns one row per (order, item) pair. This module folds
//! those rows back into one [`UserLoanResponse`] per order, with the order's
//! item lines nested underneath.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::loan::{LoanRow, UserLoanResponse},
    repository::Storage,
};

/// Group flat loan rows by order id.
///
/// Orders come out in the order their id was first seen in `rows`, and each
/// order's items keep their row order. Rows are not deduplicated: a repeated
/// (order, item) pair yields a repeated item line.
pub fn aggregate_loan_rows<I>(user_id: i32, rows: I) -> Vec<UserLoanResponse>
where
    I: IntoIterator<Item = LoanRow>,
{
    let mut orders: IndexMap<i32, UserLoanResponse> = IndexMap::new();

    for row in rows {
        let (order, item) = row.into_parts(user_id);
        orders
            .entry(order.order_id)
            .or_insert(order)
            .items
            .push(item);
    }

    orders.into_values().collect()
}

#[derive(Clone)]
pub struct LoansService {
    storage: Arc<dyn Storage>,
}

impl LoansService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Get the orders a user currently has on loan.
    ///
    /// An unknown user and a user without active loans both yield an empty list.
    pub async fn get_active_loans_by_user_id(&self, user_id: i32) -> AppResult<Vec<UserLoanResponse>> {
        let rows = self.storage.active_loan_rows(user_id).await?;
        let row_count = rows.len();
        let loans = aggregate_loan_rows(user_id, rows);

        tracing::debug!(user_id, rows = row_count, orders = loans.len(), "Aggregated active loans");
        Ok(loans)
    }
}
