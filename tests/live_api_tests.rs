//! API tests against a running server with a migrated database

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api";

fn hobbit_form() -> [(&'static str, &'static str); 5] {
    [
        ("title", "The Hobbit-ish"),
        ("author", "J. Tolkien"),
        ("isbn", "0261102389"),
        ("published-year", "1990"),
        ("genre", "Fantasy"),
    ]
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/book/new", BASE_URL))
        .form(&hobbit_form())
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["book"]["id"].as_i64().expect("No book ID");
    assert_eq!(body["book"]["publishedYear"], 1990);

    // Fetch
    let response = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["isbn"], "0261102389");

    // Update
    let mut form = hobbit_form();
    form[4] = ("genre", "Epic fantasy");
    let response = client
        .put(format!("{}/book/{}/update", BASE_URL, book_id))
        .form(&form)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["id"], book_id);
    assert_eq!(body["book"]["genre"], "Epic fantasy");

    // Delete
    let response = client
        .delete(format!("{}/book/{}/delete", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_book() {
    let client = Client::new();

    let mut form = hobbit_form();
    form[0] = ("title", "ab");
    let response = client
        .post(format!("{}/book/new", BASE_URL))
        .form(&form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["violations"][0]["field"], "title");
}

#[tokio::test]
#[ignore]
async fn test_find_by_missing_isbn() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/find-by-isbn/0000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
