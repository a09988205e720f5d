//! Test cases for the `/pet` resource

use crate::assertions::{ensure_array, ensure_field_eq, ensure_object};
use crate::client::PetstoreClient;
use crate::error::PetstoreResult;
use crate::fixtures::{create_pet, PetFixture};
use crate::logging::log_info;
use crate::models::{Pet, PetStatus};
use crate::schema::ResourceSchema;

/// An id the service is expected not to know about
pub const NONEXISTENT_PET_ID: i64 = 9999;

/// Body the service sends after any pet deletion, including of absent pets
pub const PET_DELETED: &str = "Pet deleted";

/// Body the service sends when updating an absent pet
pub const PET_NOT_FOUND: &str = "Pet not found";

/// `findByStatus` inputs and the status code each must produce
pub const FIND_BY_STATUS_CASES: [(&str, u16); 5] = [
    ("available", 200),
    ("pending", 200),
    ("sold", 200),
    ("--", 400),
    (" ", 400),
];

/// Deleting an absent pet still answers 200 with `Pet deleted`.
///
/// Other lookups of absent pets answer 404; this inconsistency is how the
/// service behaves and is asserted as-is.
pub async fn delete_nonexistent_pet(client: &PetstoreClient) -> PetstoreResult<()> {
    let response = client.delete_pet(NONEXISTENT_PET_ID).await?;
    response.expect_status(200)?.expect_text(PET_DELETED)?;
    Ok(())
}

/// Updating an absent pet answers 404 with `Pet not found`
pub async fn update_nonexistent_pet(client: &PetstoreClient) -> PetstoreResult<()> {
    let payload = Pet::new(NONEXISTENT_PET_ID, "Non-existent Pet", PetStatus::Available);
    let response = client.update_pet(&payload).await?;
    response.expect_status(404)?.expect_text(PET_NOT_FOUND)?;
    Ok(())
}

pub async fn get_nonexistent_pet(client: &PetstoreClient) -> PetstoreResult<()> {
    client.get_pet(NONEXISTENT_PET_ID).await?.expect_status(404)?;
    Ok(())
}

/// Creating a pet echoes it back and the body matches the Pet schema
pub async fn add_new_pet(client: &PetstoreClient) -> PetstoreResult<()> {
    let payload = PetFixture.payload();
    let response = client.add_pet(&payload).await?;
    response.expect_status(200)?;

    let body = response.validate(ResourceSchema::Pet)?;
    ensure_pet_fields(&body, &payload)
}

/// Create `pet`, then fetch it back: both bodies must carry the same pet
pub async fn add_and_fetch_pet(client: &PetstoreClient, pet: &Pet) -> PetstoreResult<()> {
    let created = client.add_pet(pet).await?;
    created.expect_status(200)?;
    ensure_pet_fields(&created.validate(ResourceSchema::Pet)?, pet)?;

    let fetched = client.get_pet(pet.id).await?;
    fetched.expect_status(200)?;
    ensure_pet_fields(&fetched.validate(ResourceSchema::Pet)?, pet)
}

pub async fn get_pet_by_id(client: &PetstoreClient) -> PetstoreResult<()> {
    let pet = create_pet(client).await?;

    let response = client.get_pet(pet.id).await?;
    response.expect_status(200)?;
    ensure_field_eq(&response.json()?, "id", pet.id)
}

/// Rename the fixture pet and mark it sold
pub async fn update_pet(client: &PetstoreClient) -> PetstoreResult<()> {
    let pet = create_pet(client).await?;
    let update = Pet::new(pet.id, "Buddy Updated", PetStatus::Sold);

    let response = client.update_pet(&update).await?;
    response.expect_status(200)?;

    let body = response.validate(ResourceSchema::Pet)?;
    ensure_pet_fields(&body, &update)
}

/// Delete the fixture pet, then confirm it is gone
pub async fn delete_pet_by_id(client: &PetstoreClient) -> PetstoreResult<()> {
    let pet = create_pet(client).await?;

    client
        .delete_pet(pet.id)
        .await?
        .expect_status(200)?
        .expect_text(PET_DELETED)?;

    client.get_pet(pet.id).await?.expect_status(404)?;
    Ok(())
}

/// Query by `status` and expect `expected_status`.
///
/// A 200 must carry a JSON array of pets; any other status must carry a JSON
/// error object.
pub async fn find_pets_by_status(
    client: &PetstoreClient,
    status: &str,
    expected_status: u16,
) -> PetstoreResult<()> {
    let response = client.find_pets_by_status(status).await?;
    response.expect_status(expected_status)?;

    let body = response.json()?;
    if expected_status == 200 {
        let pets = ensure_array(&body)?;
        log_info!(status = %status, count = pets.len(), "Pets found by status");
    } else {
        ensure_object(&body)?;
    }
    Ok(())
}

/// Run [`find_pets_by_status`] for every row of [`FIND_BY_STATUS_CASES`]
pub async fn find_pets_by_every_status(client: &PetstoreClient) -> PetstoreResult<()> {
    for (status, expected_status) in FIND_BY_STATUS_CASES {
        find_pets_by_status(client, status, expected_status).await?;
    }
    Ok(())
}

fn ensure_pet_fields(body: &serde_json::Value, expected: &Pet) -> PetstoreResult<()> {
    ensure_field_eq(body, "id", expected.id)?;
    ensure_field_eq(body, "name", expected.name.as_str())?;
    ensure_field_eq(body, "status", expected.status.as_str())
}
