//! Validation capability shared by every cloud-properties structure.

use crate::error::PropertiesError;

/// A property bag that can check itself after decoding.
///
/// The default accepts everything. Only [`VMCloudProperties`] enforces
/// anything today (its tags); the other kinds leave constraint checks to the
/// provisioning layer.
///
/// [`VMCloudProperties`]: crate::models::VMCloudProperties
pub trait Validatable {
    /// Return the first violation found, if any.
    fn validate(&self) -> Result<(), PropertiesError> {
        Ok(())
    }
}

/// Decode a raw property map and validate the result in one step.
///
/// # Examples
///
/// ```
/// use cpi_props::models::VMCloudProperties;
/// use cpi_props::validate::decode_validated;
/// use serde_json::json;
///
/// let err = decode_validated::<VMCloudProperties>(&json!({"tags": ["Invalid_Tag!"]})).unwrap_err();
/// assert!(err.is_validation());
/// assert!(err.to_string().contains("Invalid_Tag!"));
/// ```
pub fn decode_validated<T: crate::schema::CloudProperties>(
    raw: &serde_json::Value,
) -> Result<T, PropertiesError> {
    let props: T = crate::schema::decode_as(raw)?;
    props.validate()?;
    Ok(props)
}
