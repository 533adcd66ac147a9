//! Declarative field tables and the generic decode/encode routines.
//!
//! Every resource kind publishes a static table of [`FieldSpec`]s naming the
//! wire key and JSON type of each field. [`decode_as`] checks a raw property
//! map against that table before handing the recognised keys to serde, so a
//! type mismatch is reported against the wire key the director sent rather
//! than as an opaque serde message.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PropertiesError;
use crate::models::{
    disk, network, snapshot, stemcell, vm, DiskCloudProperties, NetworkCloudProperties,
    SnapshotMetadata, StemcellCloudProperties, VMCloudProperties,
};
use crate::validate::Validatable;

/// Resource kinds that carry cloud properties across the CPI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Disk,
    Network,
    Snapshot,
    Stemcell,
    Vm,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Disk,
        ResourceKind::Network,
        ResourceKind::Snapshot,
        ResourceKind::Stemcell,
        ResourceKind::Vm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Disk => "disk",
            ResourceKind::Network => "network",
            ResourceKind::Snapshot => "snapshot",
            ResourceKind::Stemcell => "stemcell",
            ResourceKind::Vm => "vm",
        }
    }

    /// The field table for this kind.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ResourceKind::Disk => disk::SCHEMA,
            ResourceKind::Network => network::SCHEMA,
            ResourceKind::Snapshot => snapshot::SCHEMA,
            ResourceKind::Stemcell => stemcell::SCHEMA,
            ResourceKind::Vm => vm::SCHEMA,
        }
    }

    /// Look up a field by its wire key.
    pub fn field(&self, wire_key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.wire_key == wire_key)
    }

    /// Look up a field by wire key, ignoring ASCII case.
    pub fn field_ignore_case(&self, key: &str) -> Option<&'static FieldSpec> {
        self.field(key)
            .or_else(|| self.fields().iter().find(|f| f.wire_key.eq_ignore_ascii_case(key)))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disk" => Ok(ResourceKind::Disk),
            "network" => Ok(ResourceKind::Network),
            "snapshot" => Ok(ResourceKind::Snapshot),
            "stemcell" => Ok(ResourceKind::Stemcell),
            "vm" => Ok(ResourceKind::Vm),
            _ => Err(PropertiesError::UnknownKind(s.to_string())),
        }
    }
}

/// JSON shape a field accepts on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Whole number; fractions are rejected
    Integer,
    /// Plain boolean; absent reads as false
    Bool,
    /// Boolean where absent is distinct from false
    OptionalBool,
    StringList,
}

impl FieldKind {
    /// Check that `value` has the JSON shape this field expects.
    pub fn accepts(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    /// Like [`Self::accepts`], but say what is wrong: `got a string`,
    /// `item 1 is null`.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        let ok = match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Bool | FieldKind::OptionalBool => value.is_boolean(),
            FieldKind::StringList => {
                let Some(items) = value.as_array() else {
                    return Err(format!("got {}", json_type_name(value)));
                };
                if let Some((i, item)) = items.iter().enumerate().find(|(_, v)| !v.is_string()) {
                    return Err(format!("item {} is {}", i, json_type_name(item)));
                }
                true
            }
        };
        if ok {
            Ok(())
        } else {
            Err(format!("got {}", json_type_name(value)))
        }
    }

    /// How the zero value of this field reads to a human.
    pub fn default_display(&self) -> &'static str {
        match self {
            FieldKind::String => "\"\"",
            FieldKind::Integer => "0",
            FieldKind::Bool => "false",
            FieldKind::OptionalBool => "unset",
            FieldKind::StringList => "[]",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Bool => "a boolean",
            FieldKind::OptionalBool => "a boolean",
            FieldKind::StringList => "a list of strings",
        };
        f.write_str(s)
    }
}

/// One row of a resource kind's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name on the typed structure
    pub field: &'static str,
    /// Key used in the raw property map
    pub wire_key: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(
        field: &'static str,
        wire_key: &'static str,
        kind: FieldKind,
        description: &'static str,
    ) -> Self {
        Self { field, wire_key, kind, description }
    }
}

/// A typed property bag that can be decoded from a raw map.
pub trait CloudProperties: Serialize + DeserializeOwned + Validatable {
    const KIND: ResourceKind;

    fn schema() -> &'static [FieldSpec] {
        Self::KIND.fields()
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a fractional number",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Decode a raw property map into `T`.
///
/// Unknown keys are ignored and keys that are absent or `null` leave the
/// field at its zero value. Keys match case-insensitively (`Zone` sets
/// `zone`); when both spellings are sent, the exact one wins.
///
/// # Examples
///
/// ```
/// use cpi_props::models::VMCloudProperties;
/// use cpi_props::schema::decode_as;
/// use serde_json::json;
///
/// let raw = json!({"zone": "us-central1-a", "tags": ["web", "db-1"], "future_key": 1});
/// let vm: VMCloudProperties = decode_as(&raw).unwrap();
/// assert_eq!(vm.zone, "us-central1-a");
/// assert_eq!(vm.cpu, 0);
/// assert_eq!(vm.ephemeral_external_ip, None);
/// ```
pub fn decode_as<T: CloudProperties>(raw: &Value) -> Result<T, PropertiesError> {
    let kind = T::KIND;
    let known = filter_known(kind, raw)?;
    serde_json::from_value(Value::Object(known))
        .map_err(|source| PropertiesError::Decode { kind, source })
}

/// Check `raw` against the field table of `kind` and keep only the
/// recognised, non-null keys.
pub fn filter_known(kind: ResourceKind, raw: &Value) -> Result<Map<String, Value>, PropertiesError> {
    let object = raw.as_object().ok_or(PropertiesError::NotAnObject {
        kind,
        found: json_type_name(raw),
    })?;

    let mut known = Map::new();
    for (key, value) in object {
        let Some(field) = kind.field_ignore_case(key) else {
            tracing::debug!(%kind, key = %key, "ignoring unknown cloud property");
            continue;
        };
        let exact = key == field.wire_key;
        if !exact && object.contains_key(field.wire_key) {
            continue;
        }
        if value.is_null() {
            continue;
        }
        if let Err(problem) = field.kind.check(value) {
            return Err(PropertiesError::FieldType {
                kind,
                key: field.wire_key,
                expected: field.kind,
                problem,
            });
        }
        known.insert(field.wire_key.to_string(), value.clone());
    }
    tracing::trace!(%kind, fields = known.len(), "decoding cloud properties");
    Ok(known)
}

/// Encode typed properties back to a raw map holding only the non-default
/// fields.
pub fn encode<T: CloudProperties>(props: &T) -> Result<Map<String, Value>, PropertiesError> {
    match serde_json::to_value(props)? {
        Value::Object(map) => Ok(map),
        other => Err(PropertiesError::NotAnObject {
            kind: T::KIND,
            found: json_type_name(&other),
        }),
    }
}

/// Cloud properties of any kind, for callers that only learn the kind at
/// runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyProperties {
    Disk(DiskCloudProperties),
    Network(NetworkCloudProperties),
    Snapshot(SnapshotMetadata),
    Stemcell(StemcellCloudProperties),
    Vm(VMCloudProperties),
}

impl AnyProperties {
    pub fn kind(&self) -> ResourceKind {
        match self {
            AnyProperties::Disk(_) => ResourceKind::Disk,
            AnyProperties::Network(_) => ResourceKind::Network,
            AnyProperties::Snapshot(_) => ResourceKind::Snapshot,
            AnyProperties::Stemcell(_) => ResourceKind::Stemcell,
            AnyProperties::Vm(_) => ResourceKind::Vm,
        }
    }

    pub fn to_map(&self) -> Result<Map<String, Value>, PropertiesError> {
        match self {
            AnyProperties::Disk(p) => encode(p),
            AnyProperties::Network(p) => encode(p),
            AnyProperties::Snapshot(p) => encode(p),
            AnyProperties::Stemcell(p) => encode(p),
            AnyProperties::Vm(p) => encode(p),
        }
    }
}

impl Validatable for AnyProperties {
    fn validate(&self) -> Result<(), PropertiesError> {
        match self {
            AnyProperties::Disk(p) => p.validate(),
            AnyProperties::Network(p) => p.validate(),
            AnyProperties::Snapshot(p) => p.validate(),
            AnyProperties::Stemcell(p) => p.validate(),
            AnyProperties::Vm(p) => p.validate(),
        }
    }
}

/// Decode a raw map for a kind chosen at runtime.
pub fn decode(kind: ResourceKind, raw: &Value) -> Result<AnyProperties, PropertiesError> {
    Ok(match kind {
        ResourceKind::Disk => AnyProperties::Disk(decode_as(raw)?),
        ResourceKind::Network => AnyProperties::Network(decode_as(raw)?),
        ResourceKind::Snapshot => AnyProperties::Snapshot(decode_as(raw)?),
        ResourceKind::Stemcell => AnyProperties::Stemcell(decode_as(raw)?),
        ResourceKind::Vm => AnyProperties::Vm(decode_as(raw)?),
    })
}
