//! # petstore-api-tests
//!
//! API test suite for a Petstore-style HTTP service's `pet` and `store` resources.
//!
//! ## Key Features
//!
//! - **Typed Client**: One method per endpoint, responses captured as [`ApiResponse`]
//! - **Schema Validation**: JSON Schema contracts for `Pet`, `Order` and the store inventory
//! - **Fixtures**: Known-good resources created through the service before a test case runs
//! - **Test Cases**: Linear request/assert sequences usable against any base URL
//!
//! ## Example
//!
//! ```rust,no_run
//! use petstore_api_tests::{cases, PetstoreClient, PetstoreConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PetstoreClient::new(PetstoreConfig::default())?;
//!
//! cases::pet::add_new_pet(&client).await?;
//! cases::store::place_order(&client).await?;
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod assertions;
pub mod cases;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::{ApiResponse, PetstoreClient};
pub use config::PetstoreConfig;
pub use error::{PetstoreError, PetstoreResult, SchemaValidationError, SchemaViolation};
pub use fixtures::{create_order, create_pet, Fixture, OrderFixture, PetFixture};
pub use models::{Order, Pet, PetStatus};
pub use schema::ResourceSchema;
