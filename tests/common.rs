//! Test helper utilities for petstore-api-tests integration tests
//!
//! Provides an in-process stand-in for the Petstore service built on wiremock,
//! reproducing the behaviour the live deployment was observed to have
//! (including `Pet deleted` with 200 for absent pets).
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use petstore_api_tests::{PetstoreClient, PetstoreConfig};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Path prefix the fake serves under, matching the live deployment
pub const API_PREFIX: &str = "/api/v3";

const VALID_STATUSES: [&str; 3] = ["available", "pending", "sold"];

#[derive(Debug, Default)]
struct FakeState {
    pets: BTreeMap<i64, Value>,
    orders: BTreeMap<i64, Value>,
}

/// Stateful fake of the Petstore `pet` and `store` endpoints
///
/// Cloning shares state, so a test can inspect what the suite left behind.
#[derive(Debug, Clone, Default)]
pub struct FakePetstore {
    state: Arc<Mutex<FakeState>>,
}

impl FakePetstore {
    /// A fake with no pets and no orders
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fake holding one pet per status, like the live sample data
    pub fn seeded() -> Self {
        let fake = Self::empty();
        {
            let mut state = fake.state.lock().unwrap();
            let samples = [
                (10, "doggie", "available"),
                (11, "Cat 1", "pending"),
                (12, "Lion 3", "sold"),
            ];
            for (id, name, status) in samples {
                let pet = json!({"id": id, "name": name, "status": status});
                state.pets.insert(id, stored_pet(pet));
            }
        }
        fake
    }

    pub fn has_pet(&self, id: i64) -> bool {
        self.state.lock().unwrap().pets.contains_key(&id)
    }

    pub fn has_order(&self, id: i64) -> bool {
        self.state.lock().unwrap().orders.contains_key(&id)
    }

    pub fn pet(&self, id: i64) -> Option<Value> {
        self.state.lock().unwrap().pets.get(&id).cloned()
    }

    fn handle(&self, method: &str, segments: &[&str], request: &Request) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        match (method, segments) {
            ("POST", ["pet"]) => match parse_body(request) {
                Some(pet) => match pet.get("id").and_then(Value::as_i64) {
                    Some(id) => {
                        let pet = stored_pet(pet);
                        state.pets.insert(id, pet.clone());
                        ResponseTemplate::new(200).set_body_json(pet)
                    }
                    None => ResponseTemplate::new(400).set_body_string("Invalid input"),
                },
                None => ResponseTemplate::new(400).set_body_string("Invalid input"),
            },
            ("PUT", ["pet"]) => {
                let Some(pet) = parse_body(request) else {
                    return ResponseTemplate::new(400).set_body_string("Invalid input");
                };
                match pet.get("id").and_then(Value::as_i64) {
                    Some(id) if state.pets.contains_key(&id) => {
                        let pet = stored_pet(pet);
                        state.pets.insert(id, pet.clone());
                        ResponseTemplate::new(200).set_body_json(pet)
                    }
                    _ => ResponseTemplate::new(404).set_body_string("Pet not found"),
                }
            }
            ("GET", ["pet", "findByStatus"]) => {
                let status = request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "status")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                if VALID_STATUSES.contains(&status.as_str()) {
                    let pets: Vec<Value> = state
                        .pets
                        .values()
                        .filter(|pet| pet["status"] == status.as_str())
                        .cloned()
                        .collect();
                    ResponseTemplate::new(200).set_body_json(pets)
                } else {
                    ResponseTemplate::new(400).set_body_json(json!({
                        "code": 400,
                        "message": format!(
                            "Input error: query parameter `status value `{status}` is not in the allowable values `[available, pending, sold]`"
                        )
                    }))
                }
            }
            ("GET", ["pet", id]) => match id.parse::<i64>() {
                Ok(id) => match state.pets.get(&id) {
                    Some(pet) => ResponseTemplate::new(200).set_body_json(pet.clone()),
                    None => ResponseTemplate::new(404).set_body_string("Pet not found"),
                },
                Err(_) => ResponseTemplate::new(400).set_body_string("Invalid ID supplied"),
            },
            ("DELETE", ["pet", id]) => match id.parse::<i64>() {
                Ok(id) => {
                    state.pets.remove(&id);
                    ResponseTemplate::new(200).set_body_string("Pet deleted")
                }
                Err(_) => ResponseTemplate::new(400).set_body_string("Invalid pet value"),
            },
            ("POST", ["store", "order"]) => match parse_body(request) {
                Some(order) => match order.get("id").and_then(Value::as_i64) {
                    Some(id) => {
                        state.orders.insert(id, order.clone());
                        ResponseTemplate::new(200).set_body_json(order)
                    }
                    None => ResponseTemplate::new(400).set_body_string("Invalid input"),
                },
                None => ResponseTemplate::new(400).set_body_string("Invalid input"),
            },
            ("GET", ["store", "order", id]) => match id.parse::<i64>() {
                Ok(id) => match state.orders.get(&id) {
                    Some(order) => ResponseTemplate::new(200).set_body_json(order.clone()),
                    None => ResponseTemplate::new(404).set_body_string("Order not found"),
                },
                Err(_) => ResponseTemplate::new(400).set_body_string("Invalid ID supplied"),
            },
            ("DELETE", ["store", "order", id]) => match id.parse::<i64>() {
                Ok(id) => {
                    state.orders.remove(&id);
                    ResponseTemplate::new(200)
                }
                Err(_) => ResponseTemplate::new(400).set_body_json(json!({
                    "code": 400,
                    "message": format!("Input error: couldn't convert `{id}` to type `class java.lang.Long`")
                })),
            },
            ("GET", ["store", "inventory"]) => {
                let mut counts = Map::new();
                for pet in state.pets.values() {
                    if let Some(status) = pet["status"].as_str() {
                        let count = counts.get(status).and_then(Value::as_i64).unwrap_or(0);
                        counts.insert(status.to_string(), json!(count + 1));
                    }
                }
                ResponseTemplate::new(200).set_body_json(Value::Object(counts))
            }
            _ => ResponseTemplate::new(404),
        }
    }
}

impl Respond for FakePetstore {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path();
        let path = path.strip_prefix(API_PREFIX).unwrap_or(path);
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        self.handle(request.method.as_str(), &segments, request)
    }
}

fn parse_body(request: &Request) -> Option<Value> {
    serde_json::from_slice::<Value>(&request.body)
        .ok()
        .filter(Value::is_object)
}

/// Pets come back from the service with collection fields filled in
fn stored_pet(mut pet: Value) -> Value {
    if let Some(fields) = pet.as_object_mut() {
        fields.entry("photoUrls").or_insert_with(|| json!([]));
        fields.entry("tags").or_insert_with(|| json!([]));
    }
    pet
}

/// A running fake service with a client pointed at it
pub struct TestPetstore {
    pub server: MockServer,
    pub fake: FakePetstore,
    pub client: PetstoreClient,
}

/// Start a seeded fake Petstore and build a client for it
pub async fn start_petstore() -> TestPetstore {
    start_petstore_with(FakePetstore::seeded()).await
}

/// Start a fake Petstore backed by `fake` and build a client for it
///
/// The fake is mounted at default priority, so tests can override single
/// endpoints by mounting a mock with a higher priority (lower number).
pub async fn start_petstore_with(fake: FakePetstore) -> TestPetstore {
    init_test_logging();

    let server = MockServer::start().await;
    Mock::given(path_regex(format!("^{API_PREFIX}/")))
        .respond_with(fake.clone())
        .mount(&server)
        .await;

    let client = PetstoreClient::new(PetstoreConfig::with_base_url(format!(
        "{}{}",
        server.uri(),
        API_PREFIX
    )))
    .expect("Fake Petstore URL should be a valid base URL");

    TestPetstore {
        server,
        fake,
        client,
    }
}

/// Client pointed at a port nothing listens on
pub async fn unreachable_client() -> PetstoreClient {
    init_test_logging();

    // Bind then release an ephemeral port so nothing is listening on it
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Should bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Bound socket has an address")
        .port();
    drop(listener);

    PetstoreClient::new(PetstoreConfig::with_base_url(format!(
        "http://127.0.0.1:{port}{API_PREFIX}"
    )))
    .expect("URL should be a valid base URL")
}

/// Install a test-writer tracing subscriber honouring `RUST_LOG`
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
