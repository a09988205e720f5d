//! Test helper utilities for unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::client::ApiResponse;
use reqwest::Method;
use serde_json::{json, Value};

/// A Pet body as the service returns it, including fields the schema ignores
pub fn pet_body() -> Value {
    json!({
        "id": 1,
        "name": "Buddy",
        "category": {"id": 1, "name": "Dogs"},
        "photoUrls": [],
        "tags": [],
        "status": "available"
    })
}

/// An Order body with all six required fields
pub fn order_body() -> Value {
    json!({
        "id": 1,
        "petId": 1,
        "quantity": 1,
        "shipDate": "2024-05-01T10:15:30.000+00:00",
        "status": "approved",
        "complete": true
    })
}

/// Captured response for `GET /pet/1` with the given status and body
pub fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(
        Method::GET,
        "http://petstore.test/api/v3/pet/1",
        status,
        body,
    )
}
