use serde_json::{Map, Value};

use crate::error::FieldError;

/// Checks the shape of every hotel field present in `body`.
///
/// Absent fields pass; the repository decides which ones are required.
pub fn validate_hotel(body: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    non_empty(body, "title", "Title is required", &mut errors);
    non_empty(body, "description", "Description is required", &mut errors);
    positive_count(body, "guestCount", "Guest count", &mut errors);
    positive_count(body, "bedroomCount", "Bedroom count", &mut errors);
    positive_count(body, "bathroomCount", "Bathroom count", &mut errors);
    array(body, "amenities", "Amenities must be an array", &mut errors);
    non_empty(body, "hostInfo", "Host info is required", &mut errors);
    non_empty(body, "address", "Address is required", &mut errors);
    decimal(body, "latitude", "Latitude", &mut errors);
    decimal(body, "longitude", "Longitude", &mut errors);
    array(body, "rooms", "Rooms must be an array", &mut errors);

    errors
}

fn present<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|value| !value.is_null())
}

fn non_empty(body: &Map<String, Value>, field: &str, msg: &str, errors: &mut Vec<FieldError>) {
    if let Some(value) = present(body, field) {
        let ok = value.as_str().is_some_and(|s| !s.trim().is_empty());
        if !ok {
            errors.push(FieldError::body(field, msg));
        }
    }
}

fn positive_count(body: &Map<String, Value>, field: &str, label: &str, errors: &mut Vec<FieldError>) {
    let Some(value) = present(body, field) else {
        return;
    };
    if !value.is_number() {
        errors.push(FieldError::body(
            field,
            format!("{label} must be a valid positive number"),
        ));
    } else if !value.as_u64().is_some_and(|n| (1..=u64::from(u32::MAX)).contains(&n)) {
        errors.push(FieldError::body(
            field,
            format!("{label} must be a positive integer"),
        ));
    }
}

fn decimal(body: &Map<String, Value>, field: &str, label: &str, errors: &mut Vec<FieldError>) {
    if let Some(value) = present(body, field) {
        if !value.as_f64().is_some_and(f64::is_finite) {
            errors.push(FieldError::body(
                field,
                format!("{label} must be a valid decimal number"),
            ));
        }
    }
}

fn array(body: &Map<String, Value>, field: &str, msg: &str, errors: &mut Vec<FieldError>) {
    if let Some(value) = present(body, field) {
        if !value.is_array() {
            errors.push(FieldError::body(field, msg));
        }
    }
}
