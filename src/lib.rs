//! Lending server
//!
//! A REST JSON API for an item borrowing system: users, and the orders of
//! items they currently have on loan.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: Arc<dyn repository::Storage>) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(storage)),
        }
    }
}
