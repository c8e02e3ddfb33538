//! Shared helper functions for sub-reducers.

use crate::connection_dialog_state::{ConnectionDialogState, ConnectionField};
use crate::domain::ConnectionColor;

pub fn validate_field(state: &mut ConnectionDialogState, field: ConnectionField) {
    state.validation_errors.remove(&field);
    let value = state.form.value(field).trim();

    let error = if field.is_required() && value.is_empty() {
        Some("Required".to_string())
    } else {
        match field {
            ConnectionField::Port => match value.parse::<u16>() {
                Err(_) => Some("Invalid port".to_string()),
                Ok(0) => Some("Port must be > 0".to_string()),
                Ok(_) => None,
            },
            ConnectionField::Secure => value
                .parse::<bool>()
                .is_err()
                .then(|| "Must be true or false".to_string()),
            ConnectionField::Color => ConnectionColor::new(value).err().map(|e| e.to_string()),
            // Optional, or only required to be non-empty.
            ConnectionField::Name
            | ConnectionField::Host
            | ConnectionField::Database
            | ConnectionField::Username
            | ConnectionField::Password => None,
        }
    };

    if let Some(error) = error {
        state.validation_errors.insert(field, error);
    }
}

pub fn validate_all(state: &mut ConnectionDialogState) {
    for field in ConnectionField::all() {
        validate_field(state, *field);
    }
}
