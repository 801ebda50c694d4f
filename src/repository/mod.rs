//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

/// Persistence operations the book service relies on.
///
/// Each call is one statement against the store; `update` and `delete`
/// report a missing row as `None` / `false` rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in ascending id order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// First book (lowest id) whose isbn equals `isbn` exactly
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Insert a book; the store assigns the id
    async fn insert(&self, data: &NewBook) -> AppResult<Book>;

    /// Overwrite every mutable field of book `id`
    async fn update(&self, id: i32, data: &NewBook) -> AppResult<Option<Book>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Round-trip to the store, for readiness checks
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
