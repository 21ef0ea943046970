//! Business logic services

pub mod loans;
pub mod system;
pub mod users;

use std::sync::Arc;

use crate::repository::Storage;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub loans: loans::LoansService,
    pub users: users::UsersService,
    pub system: system::SystemService,
}

impl Services {
    /// Create all services on top of the given storage backend
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            loans: loans::LoansService::new(storage.clone()),
            users: users::UsersService::new(storage.clone()),
            system: system::SystemService::new(storage),
        }
    }
}
