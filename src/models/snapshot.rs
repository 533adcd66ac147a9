use serde::{Deserialize, Serialize};

use crate::schema::{CloudProperties, FieldKind, FieldSpec, ResourceKind};
use crate::validate::Validatable;

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("deployment", "deployment", FieldKind::String, "Deployment that owns the disk"),
    FieldSpec::new("job", "job", FieldKind::String, "Instance group name"),
    FieldSpec::new("index", "index", FieldKind::String, "Instance index within the group"),
];

/// Descriptive metadata attached to a disk snapshot.
///
/// `index` stays a string; directors send it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deployment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub index: String,
}

impl SnapshotMetadata {
    /// Snapshot description in the `deployment/job/index` form, skipping
    /// empty parts.
    pub fn description(&self) -> String {
        [&self.deployment, &self.job, &self.index]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl CloudProperties for SnapshotMetadata {
    const KIND: ResourceKind = ResourceKind::Snapshot;
}

impl Validatable for SnapshotMetadata {}
