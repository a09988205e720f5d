//! Petstore test cases
//!
//! Every case is a linear sequence: build the request, send it, check the
//! status code, optionally validate the body against its schema, then compare
//! individual fields. Cases take a [`PetstoreClient`](crate::PetstoreClient) so
//! the same sequence runs against the live service or a local stand-in.
//!
//! - **pet**: create, fetch, update, delete and status queries on `/pet`
//! - **store**: order placement, lookup, deletion and inventory on `/store`

pub mod pet;
pub mod store;
