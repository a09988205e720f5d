//! JSON Schema contracts for Petstore response bodies.
//!
//! Each [`ResourceSchema`] wraps a JSON Schema document compiled once on first
//! use. Validation only reads the instance: it either accepts it or returns a
//! [`SchemaValidationError`] listing every offending location.
//!
//! Format assertions are switched on, so a `date-time` string must be RFC 3339
//! well-formed; no other meaning is attached to it.

use crate::error::{SchemaValidationError, SchemaViolation};
use crate::logging::log_trace;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::fmt;

static PET_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "name": {"type": "string"},
            "status": {
                "type": "string",
                "enum": ["available", "pending", "sold"]
            }
        },
        "required": ["id", "name", "status"]
    })
});

static ORDER_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "petId": {"type": "integer"},
            "quantity": {"type": "integer"},
            "shipDate": {"type": "string", "format": "date-time"},
            "status": {"type": "string"},
            "complete": {"type": "boolean"}
        },
        "required": ["id", "petId", "quantity", "shipDate", "status", "complete"],
        "additionalProperties": false
    })
});

static INVENTORY_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "additionalProperties": {"type": "integer"}
    })
});

static PET_VALIDATOR: Lazy<Validator> = Lazy::new(|| compile(&PET_SCHEMA));
static ORDER_VALIDATOR: Lazy<Validator> = Lazy::new(|| compile(&ORDER_SCHEMA));
static INVENTORY_VALIDATOR: Lazy<Validator> = Lazy::new(|| compile(&INVENTORY_SCHEMA));

// The documents above are fixed at compile time; a failure here is a bug in
// this module, not something a caller can recover from.
#[allow(clippy::expect_used)]
fn compile(schema: &Value) -> Validator {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .expect("built-in resource schema must compile")
}

/// The structural contracts response bodies are checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSchema {
    /// `{id: integer, name: string, status: available|pending|sold}`, extra fields allowed
    Pet,
    /// All six order fields required, no other fields allowed
    Order,
    /// Object mapping status names to integer counts
    Inventory,
}

impl ResourceSchema {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceSchema::Pet => "Pet",
            ResourceSchema::Order => "Order",
            ResourceSchema::Inventory => "Inventory",
        }
    }

    /// The raw JSON Schema document
    pub fn document(&self) -> &'static Value {
        match self {
            ResourceSchema::Pet => &PET_SCHEMA,
            ResourceSchema::Order => &ORDER_SCHEMA,
            ResourceSchema::Inventory => &INVENTORY_SCHEMA,
        }
    }

    fn validator(&self) -> &'static Validator {
        match self {
            ResourceSchema::Pet => &PET_VALIDATOR,
            ResourceSchema::Order => &ORDER_VALIDATOR,
            ResourceSchema::Inventory => &INVENTORY_VALIDATOR,
        }
    }

    /// Check `instance` against this schema, see [`validate`]
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        validate(instance, *self)
    }
}

impl fmt::Display for ResourceSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a decoded response body against a resource schema.
///
/// Returns `Ok(())` when the body conforms. Otherwise every violation is
/// collected with its JSON pointer, so missing fields, type mismatches,
/// undeclared fields and malformed `date-time` strings are all reported
/// together.
pub fn validate(instance: &Value, schema: ResourceSchema) -> Result<(), SchemaValidationError> {
    let violations: Vec<SchemaViolation> = schema
        .validator()
        .iter_errors(instance)
        .map(|error| SchemaViolation {
            instance_path: error.instance_path.to_string(),
            message: error.to_string(),
        })
        .collect();

    log_trace!(
        schema = schema.name(),
        violations = violations.len(),
        "Validated response body"
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::new(schema.name(), violations))
    }
}
