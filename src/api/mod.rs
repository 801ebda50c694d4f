//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    routing::{delete, get, post, put},
    Form, Json, Router,
};
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::BookInput, AppState};

/// Extractor for submitted book fields.
///
/// Accepts `application/json` objects as well as form-encoded bodies.
/// JSON values must be strings or numbers; numbers are kept in their
/// textual form and `null` counts as an absent field.
pub struct BookFields(pub BookInput);

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}

#[async_trait]
impl<S> FromRequest<S> for BookFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json);

        if json {
            let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            let input = object
                .into_iter()
                .filter_map(|(field, value)| match value {
                    Value::Null => None,
                    Value::String(s) => Some(Ok((field, s))),
                    Value::Number(n) => Some(Ok((field, n.to_string()))),
                    _ => Some(Err(AppError::BadRequest(format!(
                        "Field '{}' must be a string or a number",
                        field
                    )))),
                })
                .collect::<Result<BookInput, _>>()?;
            return Ok(BookFields(input));
        }

        let Form(input) = Form::<BookInput>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(BookFields(input))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/book", get(books::list_books))
        .route("/book/new", post(books::create_book))
        .route("/book/find-by-isbn/:isbn", get(books::get_book_by_isbn))
        .route("/book/:id", get(books::get_book))
        .route("/book/:id/update", put(books::update_book))
        .route("/book/:id/delete", delete(books::delete_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("Application/JSON"));
        assert!(!is_json("application/x-www-form-urlencoded"));
        assert!(!is_json("application/jsonp"));
    }
}
