//! API integration tests
//!
//! These run against a live server with the default configuration
//! (fine_per_day = 0.50). Run with: cargo test -- --ignored

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a book, returning its id
async fn create_book(client: &Client, title: &str) -> i32 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Test Author"
        }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse book response");
    body["id"].as_i64().expect("No id in book response") as i32
}

/// Helper to create a member, returning their id
async fn create_member(client: &Client, name: &str) -> i32 {
    let response = client
        .post(format!("{}/members", BASE_URL))
        .json(&json!({
            "name": name,
            "email": "test@example.org"
        }))
        .send()
        .await
        .expect("Failed to send create member request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse member response");
    body["id"].as_i64().expect("No id in member response") as i32
}

fn fine_amount(body: &Value) -> f64 {
    body["fine_amount"]
        .as_str()
        .expect("No fine_amount in response")
        .parse()
        .expect("fine_amount is not a decimal")
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
async fn test_borrow_and_return_flow() {
    let client = Client::new();

    let book_id = create_book(&client, "The Rust Programming Language").await;
    let member_id = create_member(&client, "Ada").await;
    let due_date = (Utc::now().date_naive() + Duration::days(14)).to_string();

    // Borrow the book
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "book_id": book_id,
            "member_id": member_id,
            "due_date": due_date
        }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 201);

    let loan: Value = response.json().await.expect("Failed to parse loan response");
    let loan_id = loan["id"].as_i64().expect("No id in loan response");
    assert_eq!(loan["book_id"].as_i64(), Some(book_id as i64));
    assert!(loan["return_date"].is_null());
    assert!(loan["fine_amount"].is_null());

    // The book is no longer available
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    let book: Value = response.json().await.expect("Failed to parse book response");
    assert_eq!(book["available"], false);

    // A second borrow of the same book conflicts
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "book_id": book_id,
            "member_id": member_id,
            "due_date": due_date
        }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 409);

    // The loan shows up in the member's open loans
    let response = client
        .get(format!("{}/members/{}/loans", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");

    let loans: Value = response.json().await.expect("Failed to parse loans response");
    let loans = loans.as_array().expect("Expected an array of loans");
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["id"].as_i64(), Some(loan_id));

    // Return the book on time, no fine
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send return request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse return response");
    assert_eq!(body["status"], "returned");
    assert_eq!(fine_amount(&body), 0.0);

    // The book is available again and the open-loan list is empty
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    let book: Value = response.json().await.expect("Failed to parse book response");
    assert_eq!(book["available"], true);

    let response = client
        .get(format!("{}/members/{}/loans", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");

    let loans: Value = response.json().await.expect("Failed to parse loans response");
    assert_eq!(loans.as_array().map(|l| l.len()), Some(0));

    // Returning the same loan again fails
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send return request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_overdue_return_charges_fine() {
    let client = Client::new();

    let book_id = create_book(&client, "Overdue Classics").await;
    let member_id = create_member(&client, "Grace").await;

    // Due five days ago, so returning today costs 5 * 0.50
    let due_date = (Utc::now().date_naive() - Duration::days(5)).to_string();

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "book_id": book_id,
            "member_id": member_id,
            "due_date": due_date
        }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 201);

    let loan: Value = response.json().await.expect("Failed to parse loan response");
    let loan_id = loan["id"].as_i64().expect("No id in loan response");

    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send return request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse return response");
    assert_eq!(fine_amount(&body), 2.5);
}

#[tokio::test]
#[ignore]
async fn test_borrow_nonexistent_book() {
    let client = Client::new();

    let member_id = create_member(&client, "Linus").await;
    let due_date = (Utc::now().date_naive() + Duration::days(7)).to_string();

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "book_id": 999999999,
            "member_id": member_id,
            "due_date": due_date
        }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 404);

    // No loan record was created
    let response = client
        .get(format!("{}/members/{}/loans", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");

    let loans: Value = response.json().await.expect("Failed to parse loans response");
    assert_eq!(loans.as_array().map(|l| l.len()), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_borrow_nonexistent_member() {
    let client = Client::new();

    let book_id = create_book(&client, "Unclaimed Volume").await;
    let due_date = (Utc::now().date_naive() + Duration::days(7)).to_string();

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "book_id": book_id,
            "member_id": 999999999,
            "due_date": due_date
        }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 404);

    // The book stays available
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    let book: Value = response.json().await.expect("Failed to parse book response");
    assert_eq!(book["available"], true);
}

#[tokio::test]
#[ignore]
async fn test_return_unknown_loan() {
    let client = Client::new();

    let response = client
        .post(format!("{}/loans/999999999/return", BASE_URL))
        .send()
        .await
        .expect("Failed to send return request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unknown_member_has_no_loans() {
    let client = Client::new();

    let response = client
        .get(format!("{}/members/999999999/loans", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let loans: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loans.as_array().map(|l| l.len()), Some(0));
}
