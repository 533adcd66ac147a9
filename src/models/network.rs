use serde::{Deserialize, Serialize};

use crate::schema::{CloudProperties, FieldKind, FieldSpec, ResourceKind};
use crate::tags::Tags;
use crate::validate::Validatable;

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("network_name", "network_name", FieldKind::String, "VPC network to attach to"),
    FieldSpec::new("subnetwork_name", "subnetwork_name", FieldKind::String, "Subnetwork within the network"),
    FieldSpec::new("tags", "tags", FieldKind::StringList, "Network tags applied to attached instances"),
    FieldSpec::new(
        "ephemeral_external_ip",
        "ephemeral_external_ip",
        FieldKind::Bool,
        "Give attached instances an ephemeral external IP",
    ),
    FieldSpec::new("ip_forwarding", "ip_forwarding", FieldKind::Bool, "Allow attached instances to forward IP traffic"),
];

/// Cloud properties for a network attachment.
///
/// Unlike [`VMCloudProperties`](crate::models::VMCloudProperties), the
/// external IP and forwarding flags are plain booleans: an absent key reads
/// the same as an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCloudProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subnetwork_name: String,
    #[serde(skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ephemeral_external_ip: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ip_forwarding: bool,
}

impl CloudProperties for NetworkCloudProperties {
    const KIND: ResourceKind = ResourceKind::Network;
}

/// Network tags are not checked here. They are merged into the instance's
/// tag set and checked by the provisioning layer; call
/// [`Tags::validate`] directly for an early check.
impl Validatable for NetworkCloudProperties {}
