//! In-memory storage backend (for development/testing)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{StorageError, StorageResult},
    models::{CreateUser, LoanRow, UserResponse, ON_LOAN_STATUS},
};

use super::Storage;

/// Order to seed into the in-memory tables
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

/// Item line to seed into the in-memory tables
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub object_id: i32,
    pub detail_status: String,
    pub actual_return_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    name: String,
    email: String,
}

#[derive(Debug, Clone)]
struct StoredOrder {
    order_id: i32,
    order: NewOrder,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, StoredUser>,
    items: BTreeMap<i32, String>,
    orders: Vec<StoredOrder>,
    order_items: Vec<NewOrderItem>,
}

/// Storage backed by process memory, mirroring the PostgreSQL schema
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    tables: Arc<RwLock<Tables>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Make every subsequent call fail as if the connection was refused
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    /// Add a catalog item and return its id
    pub async fn add_item(&self, name: &str) -> i32 {
        let mut tables = self.tables.write().await;
        let id = tables.items.keys().next_back().map_or(1, |id| id + 1);
        tables.items.insert(id, name.to_string());
        id
    }

    /// Add an order and return its id
    pub async fn add_order(&self, order: NewOrder) -> i32 {
        let mut tables = self.tables.write().await;
        let order_id = tables.orders.iter().map(|o| o.order_id).max().unwrap_or(0) + 1;
        tables.orders.push(StoredOrder { order_id, order });
        order_id
    }

    /// Attach an item line to an existing order
    pub async fn add_order_item(&self, item: NewOrderItem) {
        self.tables.write().await.order_items.push(item);
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn ping(&self) -> StorageResult<()> {
        self.check_available()
    }

    async fn active_loan_rows(&self, user_id: i32) -> StorageResult<Vec<LoanRow>> {
        self.check_available()?;
        let guard = self.tables.read().await;
        let tables = &*guard;

        let mut rows: Vec<LoanRow> = tables
            .orders
            .iter()
            .filter(|o| o.order.user_id == user_id && o.order.status == ON_LOAN_STATUS)
            .flat_map(|o| {
                tables
                    .order_items
                    .iter()
                    .filter(move |line| line.order_id == o.order_id)
                    .filter_map(move |line| {
                        let object_name = tables.items.get(&line.object_id)?;
                        Some(LoanRow {
                            order_id: o.order_id,
                            start_time: o.order.start_time,
                            end_time: o.order.end_time,
                            order_status: o.order.status.clone(),
                            object_id: line.object_id,
                            object_name: object_name.clone(),
                            detail_status: line.detail_status.clone(),
                            actual_return_time: line.actual_return_time,
                        })
                    })
            })
            .collect();

        rows.sort_by_key(|r| (r.order_id, r.object_id));
        Ok(rows)
    }

    async fn create_user(&self, user: &CreateUser) -> StorageResult<UserResponse> {
        self.check_available()?;
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StorageError::Conflict(format!(
                "Email {} is already registered",
                user.email
            )));
        }

        let user_id = tables.users.keys().next_back().map_or(1, |id| id + 1);
        tables.users.insert(
            user_id,
            StoredUser {
                name: user.name.clone(),
                email: user.email.clone(),
            },
        );

        Ok(UserResponse {
            user_id,
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    async fn get_user_by_id(&self, user_id: i32) -> StorageResult<UserResponse> {
        self.check_available()?;
        let tables = self.tables.read().await;
        tables
            .users
            .get(&user_id)
            .map(|u| UserResponse {
                user_id,
                name: u.name.clone(),
                email: u.email.clone(),
            })
            .ok_or(StorageError::NotFound { entity: "User", id: user_id })
    }
}
