//! Loans repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{StorageError, StorageResult},
    models::loan::{LoanRow, ON_LOAN_STATUS},
};

const ACTIVE_LOAN_ROWS: &str = r#"
    SELECT o.order_id, o.start_time, o.end_time, o.status AS order_status,
           od.object_id, i.object_name, od.detail_status, od.actual_return_time
    FROM orders o
    JOIN order_details od ON o.order_id = od.order_id
    JOIN items i ON od.object_id = i.object_id
    WHERE o.user_id = $1 AND o.status = $2
    ORDER BY o.order_id, i.object_id
"#;

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the flat order/item rows of a user's active loans
    pub async fn active_loan_rows(&self, user_id: i32) -> StorageResult<Vec<LoanRow>> {
        let rows = sqlx::query_as::<_, LoanRow>(ACTIVE_LOAN_ROWS)
            .bind(user_id)
            .bind(ON_LOAN_STATUS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::query("Failed to query active loans", e))?;

        tracing::debug!(user_id, rows = rows.len(), "Fetched active loan rows");
        Ok(rows)
    }
}
