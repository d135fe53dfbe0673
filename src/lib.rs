//! Librent Book Rental Server
//!
//! REST JSON API for managing users, books and the bookings that link them.
//! Records live in process memory for the lifetime of the server.

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
    /// Build the state, with fresh collections seeded according to `config.store`
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(config.store.seed);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
