// Code generated by armid-generator. DO NOT EDIT.

use armid::ValidationError;

use crate::parse::parse_app_service_id;

/// Validates that `value` is a valid App Service ID.
pub fn app_service_id(value: &str, key: &str) -> Result<(), ValidationError> {
    parse_app_service_id(value)
        .map(|_| ())
        .map_err(|err| ValidationError::new(key, err))
}
