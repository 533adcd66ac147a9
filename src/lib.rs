//! Typed cloud properties for the Google CPI.
//!
//! The director sends each resource's properties as an untyped JSON map.
//! This crate decodes those maps into typed structures using an explicit
//! field table per resource kind and validates them where rules exist.
//!
//! ```
//! use cpi_props::prelude::*;
//! use serde_json::json;
//!
//! let vm: VMCloudProperties = decode_as(&json!({"zone": "us-central1-a", "tags": ["web"]})).unwrap();
//! assert!(vm.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod schema;
pub mod tags;
pub mod utils;
pub mod validate;

pub use error::PropertiesError;

pub mod prelude {
    pub use crate::error::PropertiesError;
    pub use crate::models::{
        DiskCloudProperties, Environment, NetworkCloudProperties, SnapshotMetadata,
        StemcellCloudProperties, StemcellSource, VMCloudProperties, VMMetadata, VMServiceAccount,
        VMServiceScopes,
    };
    pub use crate::schema::{decode, decode_as, encode, AnyProperties, CloudProperties, ResourceKind};
    pub use crate::tags::{TagError, TagRule, Tags};
    pub use crate::validate::{decode_validated, Validatable};
}
