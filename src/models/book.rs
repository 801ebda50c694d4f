//! Book model and related types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    /// Title (3 to 255 characters)
    pub title: String,
    /// Author name (3 to 100 characters)
    pub author: String,
    /// ISBN as submitted, separators included
    pub isbn: String,
    pub published_year: i32,
    /// Genre (3 to 50 characters)
    pub genre: String,
}

/// Validated book fields, ready to be written by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub genre: String,
}

impl Book {
    /// Builds the stored representation of `data` under `id`.
    pub fn from_new(id: i32, data: NewBook) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            isbn: data.isbn,
            published_year: data.published_year,
            genre: data.genre,
        }
    }
}

/// Raw book fields as submitted on create/update.
///
/// Keys are wire names (`title`, `author`, `isbn`, `published-year`,
/// `genre`); values are kept as strings until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BookInput(BTreeMap<String, String>);

impl BookInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Submitted field names in lexical order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for BookInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
