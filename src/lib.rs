//! Bookshelf Book Catalog Server
//!
//! A REST JSON API for managing a catalog of books: list, look up by id or
//! ISBN, create, update and delete, with field validation on every write.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::BookStore;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire the services on top of `store`
    pub fn new(config: &AppConfig, store: Arc<dyn BookStore>) -> Self {
        Self {
            services: Arc::new(Services::new(store, &config.validation)),
        }
    }
}
