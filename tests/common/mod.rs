//! Shared helpers for router tests

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bookshelf_server::{
    api,
    error::AppResult,
    models::{Book, NewBook},
    repository::BookStore,
    AppConfig, AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory store with sequential ids starting at 1
#[derive(Default)]
pub struct InMemoryBookStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    books: BTreeMap<i32, Book>,
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.inner.lock().unwrap().books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.inner.lock().unwrap().books.get(&id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .books
            .values()
            .find(|book| book.isbn == isbn)
            .cloned())
    }

    async fn insert(&self, data: &NewBook) -> AppResult<Book> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let book = Book::from_new(inner.next_id, data.clone());
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, data: &NewBook) -> AppResult<Option<Book>> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.books.get_mut(&id).map(|book| {
            *book = Book::from_new(id, data.clone());
            book.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.inner.lock().unwrap().books.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn app() -> Router {
    api::create_router(AppState::new(
        &AppConfig::default(),
        Arc::new(InMemoryBookStore::default()),
    ))
}

/// Form-encodes `pairs`; values in tests only need spaces escaped.
pub fn form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn hobbit() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "The Hobbit-ish"),
        ("author", "J. Tolkien"),
        ("isbn", "0261102389"),
        ("published-year", "1990"),
        ("genre", "Fantasy"),
    ]
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn submit(app: &Router, method: Method, uri: &str, pairs: &[(&str, &str)]) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form(pairs)))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
