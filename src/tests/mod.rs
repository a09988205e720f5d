// Test modules for petstore-api-tests crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behaviour verification.

// Test helper utilities
pub mod helpers;


// NOTE: Fixture and test-case flows need an HTTP server and live in
// tests/pet_cases.rs and tests/store_cases.rs against a wiremock stand-in.
