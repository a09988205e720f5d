//! Fixtures creating known-good resources before a test case runs.
//!
//! Each fixture performs exactly one create call with a fixed payload, requires
//! status 200 and hands back the decoded resource. There is no retry and no
//! teardown: the resource stays on the service after the test case finishes.

use crate::client::PetstoreClient;
use crate::error::{PetstoreError, PetstoreResult};
use crate::logging::log_debug;
use crate::models::{Order, Pet, PetStatus};
use async_trait::async_trait;
use chrono::Utc;

/// Setup routine producing one resource on the service under test
#[async_trait]
pub trait Fixture: Send + Sync {
    /// The decoded resource handed to the consuming test case
    type Resource: Send;

    /// Fixture name used in failure messages
    fn name(&self) -> &'static str;

    /// Create the resource
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::FixtureFailed`] if the create call does not
    /// answer 200, and propagates transport or decoding errors unchanged.
    async fn provide(&self, client: &PetstoreClient) -> PetstoreResult<Self::Resource>;
}

/// Creates the pet `{id: 1, name: "Non-existent Buddy", status: "available"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PetFixture;

impl PetFixture {
    pub const ID: i64 = 1;
    pub const NAME: &'static str = "Non-existent Buddy";
    pub const STATUS: PetStatus = PetStatus::Available;

    pub fn payload(&self) -> Pet {
        Pet::new(Self::ID, Self::NAME, Self::STATUS)
    }
}

#[async_trait]
impl Fixture for PetFixture {
    type Resource = Pet;

    fn name(&self) -> &'static str {
        "create_pet"
    }

    async fn provide(&self, client: &PetstoreClient) -> PetstoreResult<Pet> {
        let payload = self.payload();
        let response = client.add_pet(&payload).await?;
        if response.status() != 200 {
            return Err(PetstoreError::fixture_failed(
                self.name(),
                response.status(),
                response.text(),
            ));
        }

        let pet: Pet = response.decode()?;
        log_debug!(fixture = self.name(), pet_id = pet.id, "Fixture created pet");
        Ok(pet)
    }
}

/// Creates order 1 for pet 1, quantity 1, `approved`, complete, shipping now
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFixture;

impl OrderFixture {
    pub const ID: i64 = 1;
    pub const PET_ID: i64 = 1;
    pub const QUANTITY: i64 = 1;
    pub const STATUS: &'static str = "approved";
    pub const COMPLETE: bool = true;

    /// The order payload; `shipDate` is the current UTC time
    pub fn payload(&self) -> Order {
        Order::new(
            Self::ID,
            Self::PET_ID,
            Self::QUANTITY,
            Utc::now(),
            Self::STATUS,
            Self::COMPLETE,
        )
    }
}

#[async_trait]
impl Fixture for OrderFixture {
    type Resource = Order;

    fn name(&self) -> &'static str {
        "create_order"
    }

    async fn provide(&self, client: &PetstoreClient) -> PetstoreResult<Order> {
        let payload = self.payload();
        let response = client.place_order(&payload).await?;
        if response.status() != 200 {
            return Err(PetstoreError::fixture_failed(
                self.name(),
                response.status(),
                response.text(),
            ));
        }

        let order: Order = response.decode()?;
        log_debug!(fixture = self.name(), order_id = order.id, "Fixture created order");
        Ok(order)
    }
}

/// Run [`PetFixture`] against `client`
pub async fn create_pet(client: &PetstoreClient) -> PetstoreResult<Pet> {
    PetFixture.provide(client).await
}

/// Run [`OrderFixture`] against `client`
pub async fn create_order(client: &PetstoreClient) -> PetstoreResult<Order> {
    OrderFixture.provide(client).await
}
