use serde::{Deserialize, Serialize};

use crate::schema::{CloudProperties, FieldKind, FieldSpec, ResourceKind};
use crate::validate::Validatable;

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("disk_type", "type", FieldKind::String, "Persistent disk type (pd-standard, pd-ssd, ...)"),
    FieldSpec::new("zone", "zone", FieldKind::String, "Zone to create the disk in"),
];

/// Cloud properties for a persistent disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskCloudProperties {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub disk_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

impl CloudProperties for DiskCloudProperties {
    const KIND: ResourceKind = ResourceKind::Disk;
}

impl Validatable for DiskCloudProperties {}
