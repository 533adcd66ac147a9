use serde::{Deserialize, Serialize};

use super::{is_zero, NetworkCloudProperties};
use crate::error::PropertiesError;
use crate::schema::{CloudProperties, FieldKind, FieldSpec, ResourceKind};
use crate::tags::Tags;
use crate::validate::Validatable;

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("zone", "zone", FieldKind::String, "Zone to create the instance in"),
    FieldSpec::new("name", "name", FieldKind::String, "Instance name"),
    FieldSpec::new("machine_type", "machine_type", FieldKind::String, "Predefined machine type"),
    FieldSpec::new("cpu", "cpu", FieldKind::Integer, "vCPU count for a custom machine type"),
    FieldSpec::new("ram", "ram", FieldKind::Integer, "Memory in MB for a custom machine type"),
    FieldSpec::new("root_disk_size_gb", "root_disk_size_gb", FieldKind::Integer, "Boot disk size in GB"),
    FieldSpec::new("root_disk_type", "root_disk_type", FieldKind::String, "Boot disk type"),
    FieldSpec::new("automatic_restart", "automatic_restart", FieldKind::Bool, "Restart the instance after a host failure"),
    FieldSpec::new("on_host_maintenance", "on_host_maintenance", FieldKind::String, "MIGRATE or TERMINATE"),
    FieldSpec::new("preemptible", "preemptible", FieldKind::Bool, "Create a preemptible instance"),
    FieldSpec::new("service_account", "service_account", FieldKind::String, "Service account the instance runs as"),
    FieldSpec::new("service_scopes", "service_scopes", FieldKind::StringList, "OAuth scopes granted to the service account"),
    FieldSpec::new("target_pool", "target_pool", FieldKind::String, "Target pool to add the instance to"),
    FieldSpec::new("backend_service", "backend_service", FieldKind::String, "Backend service to add the instance to"),
    FieldSpec::new("tags", "tags", FieldKind::StringList, "Instance tags"),
    FieldSpec::new(
        "ephemeral_external_ip",
        "ephemeral_external_ip",
        FieldKind::OptionalBool,
        "Overrides the network setting when present",
    ),
    FieldSpec::new("ip_forwarding", "ip_forwarding", FieldKind::OptionalBool, "Overrides the network setting when present"),
];

/// Ordered list of OAuth scopes; order is kept as given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VMServiceScopes(pub Vec<String>);

impl VMServiceScopes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> From<Vec<S>> for VMServiceScopes {
    fn from(scopes: Vec<S>) -> Self {
        VMServiceScopes(scopes.into_iter().map(Into::into).collect())
    }
}

/// Service account identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VMServiceAccount(pub String);

impl VMServiceAccount {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for VMServiceAccount {
    fn from(s: &str) -> Self {
        VMServiceAccount(s.to_string())
    }
}

/// Cloud properties for a compute instance.
///
/// `ephemeral_external_ip` and `ip_forwarding` are tri-state: `None` defers
/// to the network's setting, `Some(_)` overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VMCloudProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub machine_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub cpu: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub ram: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub root_disk_size_gb: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_disk_type: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub automatic_restart: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_host_maintenance: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preemptible: bool,
    #[serde(skip_serializing_if = "VMServiceAccount::is_empty")]
    pub service_account: VMServiceAccount,
    #[serde(skip_serializing_if = "VMServiceScopes::is_empty")]
    pub service_scopes: VMServiceScopes,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_pool: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub backend_service: String,
    #[serde(skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_external_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_forwarding: Option<bool>,
}

impl VMCloudProperties {
    /// Whether the instance gets an ephemeral external IP once the network
    /// default is taken into account.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpi_props::models::{NetworkCloudProperties, VMCloudProperties};
    ///
    /// let network = NetworkCloudProperties { ephemeral_external_ip: true, ..Default::default() };
    /// let deferring = VMCloudProperties::default();
    /// let overriding = VMCloudProperties { ephemeral_external_ip: Some(false), ..Default::default() };
    ///
    /// assert!(deferring.effective_ephemeral_external_ip(&network));
    /// assert!(!overriding.effective_ephemeral_external_ip(&network));
    /// ```
    pub fn effective_ephemeral_external_ip(&self, network: &NetworkCloudProperties) -> bool {
        self.ephemeral_external_ip.unwrap_or(network.ephemeral_external_ip)
    }

    /// Same as [`Self::effective_ephemeral_external_ip`] for IP forwarding.
    pub fn effective_ip_forwarding(&self, network: &NetworkCloudProperties) -> bool {
        self.ip_forwarding.unwrap_or(network.ip_forwarding)
    }
}

impl CloudProperties for VMCloudProperties {
    const KIND: ResourceKind = ResourceKind::Vm;
}

impl Validatable for VMCloudProperties {
    fn validate(&self) -> Result<(), PropertiesError> {
        self.tags.validate()?;
        Ok(())
    }
}
