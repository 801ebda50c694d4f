//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{config::ValidationConfig, repository::BookStore, validation::BookValidator};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn BookStore>, validation: &ValidationConfig) -> Self {
        Self {
            books: books::BooksService::new(store, BookValidator::new(validation.isbn_format)),
        }
    }
}
