//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use librent_server::{api::create_router, config::AppConfig, AppState};

/// Router over freshly seeded collections
fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn cadieux() -> Value {
    json!({
        "id": "1281464365499",
        "lastName": "CADIEUX",
        "firstName": "Marius",
        "birthDate": "1985-10-27",
        "address": "3 Rue Henri Hure 49300 Cholet",
        "phone": "0666666666",
        "email": "mariuscadieux@gmail.com"
    })
}

fn cuisine() -> Value {
    json!({
        "isbn13": "9782879017198",
        "title": "Connaitre la Cuisine du Périgord",
        "authors": "Thibault Clementine",
        "editor": "Sud Ouest",
        "langCode": "FR",
        "price": 3.9
    })
}

#[tokio::test]
async fn test_status_check() {
    let (status, body) = send(&app(), Method::GET, "/statusCheck", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_seeded_users() {
    let (status, body) = send(&app(), Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                cadieux(),
                {
                    "id": "5643431345887",
                    "lastName": "TALON",
                    "firstName": "Alicia",
                    "birthDate": "1992-07-26",
                    "address": "3 Rue Henri Hure 49300 Cholet",
                    "phone": "0777777777",
                    "email": "talonalicia@gmail.com"
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let mut config = AppConfig::default();
    config.store.seed = false;
    let app = create_router(AppState::new(config));

    let (status, body) = send(&app, Method::GET, "/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_create_book_echoes_record() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(cuisine())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "data": cuisine() }));

    let (status, body) = send(&app, Method::GET, "/books/9782879017198", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": cuisine() }));
}

#[tokio::test]
async fn test_create_book_with_malformed_isbn() {
    let mut book = cuisine();
    book["isbn13"] = json!("77");
    let (status, body) = send(&app(), Method::POST, "/books", Some(book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ISBN of Book 77 is malformed" }));
}

#[tokio::test]
async fn test_create_book_with_string_price() {
    let app = app();
    let mut book = cuisine();
    book["price"] = json!("xr");
    let (status, body) = send(&app, Method::POST, "/books", Some(book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Price of Book 9782879017198 is malformed" }));

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_book_without_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from(cuisine().to_string()))
        .expect("Failed to build request");
    let response = app().oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_missing_book() {
    let (status, body) = send(&app(), Method::GET, "/books/1234567899999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book 1234567899999 not found" }));
}

#[tokio::test]
async fn test_update_first_user() {
    let app = app();
    let mut user = cadieux();
    user["firstName"] = json!("Mario");

    let (status, body) = send(&app, Method::PUT, "/users/1281464365499", Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": user }));

    let (_, body) = send(&app, Method::GET, "/users/1281464365499", None).await;
    assert_eq!(body["data"]["firstName"], "Mario");
}

#[tokio::test]
async fn test_update_missing_user() {
    let (status, body) = send(&app(), Method::PUT, "/users/1111111111111", Some(cadieux())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User 1111111111111 not found" }));
}

#[tokio::test]
async fn test_update_missing_user_with_malformed_body() {
    let mut user = cadieux();
    user["phone"] = json!("12");
    let (status, body) = send(&app(), Method::PUT, "/users/1111111111111", Some(user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User 1111111111111 not found" }));
}

#[tokio::test]
async fn test_update_missing_book_with_malformed_body() {
    let mut book = cuisine();
    book["price"] = json!("xr");
    let (status, body) = send(&app(), Method::PUT, "/books/1234567899999", Some(book)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book 1234567899999 not found" }));
}

#[tokio::test]
async fn test_create_user_with_malformed_email() {
    let mut user = cadieux();
    user["id"] = json!("2222222222222");
    user["email"] = json!("talonalyce@.com");
    let (status, body) = send(&app(), Method::POST, "/users", Some(user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Email of User 2222222222222 is malformed" }));
}

#[tokio::test]
async fn test_delete_user() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/users/1281464365499", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "meta": { "_deleted": cadieux() } }));

    let (status, _) = send(&app, Method::GET, "/users/1281464365499", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_booking() {
    let booking = json!({
        "id": "5749461811651",
        "rentDate": "2022-10-07",
        "returnDate": "2022-10-16",
        "book": "9782746035966",
        "user": "1281464365499"
    });
    let (status, body) = send(&app(), Method::POST, "/bookings", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "data": booking }));
}

#[tokio::test]
async fn test_create_booking_for_unknown_book() {
    let app = app();
    let booking = json!({
        "id": "5749461811651",
        "rentDate": "2022-10-07",
        "returnDate": "2022-10-16",
        "book": "Livre3",
        "user": "1281464365499"
    });
    let (status, body) = send(&app, Method::POST, "/bookings", Some(booking)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book Livre3 not found" }));

    let (status, _) = send(&app, Method::GET, "/bookings/5749461811651", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_booking_with_unknown_book() {
    let booking = json!({
        "id": "7984613166494",
        "rentDate": "2023-01-10",
        "returnDate": "2023-01-20",
        "book": "Nomdulivre",
        "user": "1281464365499"
    });
    let (status, body) = send(&app(), Method::PUT, "/bookings/222222222222", Some(booking)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Booking 222222222222 not found" }));
}

#[tokio::test]
async fn test_update_booking() {
    let app = app();
    let booking = json!({
        "id": "1236545796533",
        "rentDate": "2023-03-02",
        "returnDate": "2023-07-01",
        "book": "9782746035966",
        "user": "5643431345887"
    });
    let (status, body) = send(&app, Method::PUT, "/bookings/1236545796533", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": booking }));
}

#[tokio::test]
async fn test_create_booking_with_malformed_rent_date() {
    let booking = json!({
        "id": "5749461811651",
        "rentDate": "20221007",
        "returnDate": "2022-10-16",
        "book": "9782746035966",
        "user": "1281464365499"
    });
    let (status, body) = send(&app(), Method::POST, "/bookings", Some(booking)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Rent Date of Booking 5749461811651 is malformed" }));
}

#[tokio::test]
async fn test_delete_booking() {
    let (status, body) = send(&app(), Method::DELETE, "/bookings/1234567345843", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "meta": {
                "_deleted": {
                    "id": "1234567345843",
                    "rentDate": "2019-08-15",
                    "returnDate": "2019-11-29",
                    "book": "9782746035966",
                    "user": "5643431345887"
                }
            }
        })
    );
}

#[tokio::test]
async fn test_delete_missing_booking() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/bookings/3333333333333", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Booking 3333333333333 not found" }));

    let (_, body) = send(&app, Method::GET, "/bookings", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}
