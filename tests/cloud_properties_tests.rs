/// Decode, encode and validation behaviour through the public API
use cpi_props::prelude::*;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static FULL_VM: Lazy<Value> = Lazy::new(|| {
    json!({
        "zone": "us-central1-a",
        "name": "router-0",
        "machine_type": "n1-standard-2",
        "cpu": 2,
        "ram": 4096,
        "root_disk_size_gb": 20,
        "root_disk_type": "pd-ssd",
        "automatic_restart": true,
        "on_host_maintenance": "MIGRATE",
        "preemptible": true,
        "service_account": "cpi@project.iam.gserviceaccount.com",
        "service_scopes": ["compute", "devstorage.read_only"],
        "target_pool": "router-pool",
        "backend_service": "router-backend",
        "tags": ["web", "db-1"],
        "ephemeral_external_ip": false,
        "ip_forwarding": true
    })
});

static FULL_NETWORK: Lazy<Value> = Lazy::new(|| {
    json!({
        "network_name": "default",
        "subnetwork_name": "bosh",
        "tags": ["internal"],
        "ephemeral_external_ip": true,
        "ip_forwarding": true
    })
});

fn round_trip(kind: ResourceKind, raw: &Value) -> Value {
    let props = decode(kind, raw).unwrap();
    Value::Object(props.to_map().unwrap())
}

#[test]
fn test_vm_example_decodes_and_validates() {
    let raw = json!({"zone": "us-central1-a", "tags": ["web", "db-1"]});
    let vm: VMCloudProperties = decode_as(&raw).unwrap();

    assert_eq!(vm.zone, "us-central1-a");
    assert_eq!(vm.tags, Tags::from(vec!["web", "db-1"]));
    assert_eq!(
        vm,
        VMCloudProperties {
            zone: "us-central1-a".into(),
            tags: Tags::from(vec!["web", "db-1"]),
            ..Default::default()
        }
    );
    assert!(vm.validate().is_ok());
}

#[test]
fn test_invalid_tag_decodes_but_fails_validation() {
    let vm: VMCloudProperties = decode_as(&json!({"tags": ["Invalid_Tag!"]})).unwrap();

    let err = vm.validate().unwrap_err();
    match &err {
        PropertiesError::InvalidTag(tag_err) => assert_eq!(tag_err.tag, "Invalid_Tag!"),
        other => panic!("expected a tag error, got {:?}", other),
    }
    assert!(err.to_string().contains("\"Invalid_Tag!\""));
}

#[test]
fn test_first_invalid_tag_is_named() {
    let vm: VMCloudProperties = decode_as(&json!({"tags": ["web", "bad-", "Worse"]})).unwrap();
    let err = vm.validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid tags: tag \"bad-\" must not end with a hyphen");
}

#[test]
fn test_empty_tags_validate() {
    let vm: VMCloudProperties = decode_as(&json!({"tags": []})).unwrap();
    assert!(vm.validate().is_ok());
    assert!(VMCloudProperties::default().validate().is_ok());
}

// Current behaviour: network tags are not checked by the network's own
// validation path. Change this test together with any change to that.
#[test]
fn test_network_with_invalid_tags_is_not_rejected() {
    let raw = json!({"network_name": "default", "tags": ["Invalid_Tag!"]});
    let network: NetworkCloudProperties = decode_as(&raw).unwrap();

    assert!(network.validate().is_ok());
    assert!(decode_validated::<NetworkCloudProperties>(&raw).is_ok());
    assert!(decode(ResourceKind::Network, &raw).unwrap().validate().is_ok());

    // The same tags are still rejected when checked directly
    assert!(network.tags.validate().is_err());
}

#[test]
fn test_ephemeral_external_ip_tri_state_on_vm() {
    let absent: VMCloudProperties = decode_as(&json!({})).unwrap();
    let explicit: VMCloudProperties = decode_as(&json!({"ephemeral_external_ip": false})).unwrap();

    assert_eq!(absent.ephemeral_external_ip, None);
    assert_eq!(explicit.ephemeral_external_ip, Some(false));
    assert_ne!(absent, explicit);
}

#[test]
fn test_ephemeral_external_ip_plain_bool_on_network() {
    let absent: NetworkCloudProperties = decode_as(&json!({})).unwrap();
    let explicit: NetworkCloudProperties = decode_as(&json!({"ephemeral_external_ip": false})).unwrap();

    assert!(!absent.ephemeral_external_ip);
    assert_eq!(absent, explicit);
}

#[test]
fn test_vm_overrides_network_defaults() {
    let network: NetworkCloudProperties = decode_as(&FULL_NETWORK).unwrap();
    let vm: VMCloudProperties = decode_as(&FULL_VM).unwrap();

    assert!(!vm.effective_ephemeral_external_ip(&network));
    assert!(vm.effective_ip_forwarding(&network));

    let deferring = VMCloudProperties::default();
    assert!(deferring.effective_ephemeral_external_ip(&network));
}

#[test]
fn test_round_trip_keeps_supplied_fields() {
    assert_eq!(round_trip(ResourceKind::Vm, &FULL_VM), *FULL_VM);
    assert_eq!(round_trip(ResourceKind::Network, &FULL_NETWORK), *FULL_NETWORK);

    let disk = json!({"type": "pd-ssd", "zone": "us-east1-b"});
    assert_eq!(round_trip(ResourceKind::Disk, &disk), disk);

    let snapshot = json!({"deployment": "cf", "job": "router", "index": "0"});
    assert_eq!(round_trip(ResourceKind::Snapshot, &snapshot), snapshot);

    let stemcell = json!({
        "name": "bosh-google-kvm-ubuntu-jammy-go_agent",
        "version": "1.200",
        "infrastructure": "google",
        "source_url": "https://storage.googleapis.com/stemcells/image.tar.gz"
    });
    assert_eq!(round_trip(ResourceKind::Stemcell, &stemcell), stemcell);
}

#[test]
fn test_round_trip_omits_defaults_and_unknown_keys() {
    let raw = json!({
        "zone": "us-central1-a",
        "cpu": 0,
        "preemptible": false,
        "tags": [],
        "ip_forwarding": null,
        "some_future_key": {"nested": true}
    });
    assert_eq!(round_trip(ResourceKind::Vm, &raw), json!({"zone": "us-central1-a"}));
}

#[test]
fn test_explicit_false_survives_round_trip_on_vm_only() {
    let raw = json!({"ip_forwarding": false});
    assert_eq!(round_trip(ResourceKind::Vm, &raw), raw);
    assert_eq!(round_trip(ResourceKind::Network, &raw), json!({}));
}

#[test]
fn test_every_schema_field_is_decoded() {
    // FULL_VM must cover every table entry for the round trip to mean much
    let vm_keys: Vec<&str> = ResourceKind::Vm.fields().iter().map(|f| f.wire_key).collect();
    let full = FULL_VM.as_object().unwrap();
    assert_eq!(vm_keys.len(), full.len());
    for key in vm_keys {
        assert!(full.contains_key(key), "fixture is missing {key}");
    }
}

#[test]
fn test_type_mismatch_is_a_decode_error() {
    let err = decode_as::<VMCloudProperties>(&json!({"ephemeral_external_ip": "yes"})).unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(
        err.to_string(),
        "vm cloud property 'ephemeral_external_ip' must be a boolean, got a string"
    );

    let err = decode_as::<DiskCloudProperties>(&json!({"zone": 3})).unwrap_err();
    assert_eq!(err.to_string(), "disk cloud property 'zone' must be a string, got a number");

    let err = decode_as::<VMCloudProperties>(&json!({"cpu": 1.5})).unwrap_err();
    assert_eq!(err.to_string(), "vm cloud property 'cpu' must be an integer, got a fractional number");
}

#[test]
fn test_out_of_range_integers_round_trip() {
    let raw = json!({"cpu": -1, "ram": -512, "root_disk_size_gb": 5_000_000_000i64});
    let vm: VMCloudProperties = decode_as(&raw).unwrap();
    assert_eq!(vm.cpu, -1);
    assert_eq!(vm.root_disk_size_gb, 5_000_000_000);
    assert_eq!(round_trip(ResourceKind::Vm, &raw), raw);
}

#[test]
fn test_list_with_non_string_item() {
    let err = decode_as::<NetworkCloudProperties>(&json!({"tags": ["web", 3, null]})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "network cloud property 'tags' must be a list of strings, item 1 is a number"
    );
}

#[test]
fn test_snapshot_index_must_be_string() {
    assert!(decode_as::<SnapshotMetadata>(&json!({"index": 0})).is_err());
    let meta: SnapshotMetadata = decode_as(&json!({"index": "0"})).unwrap();
    assert_eq!(meta.index, "0");
}

#[test]
fn test_stemcell_with_both_urls_is_accepted() {
    let raw = json!({
        "source_url": "https://storage.googleapis.com/stemcells/image.tar.gz",
        "image_url": "https://www.googleapis.com/compute/v1/projects/p/global/images/stemcell-1"
    });
    let stemcell: StemcellCloudProperties = decode_validated(&raw).unwrap();
    assert_eq!(
        stemcell.source(),
        StemcellSource::ExistingImage("https://www.googleapis.com/compute/v1/projects/p/global/images/stemcell-1")
    );
}

#[test]
fn test_service_identity_types() {
    let vm: VMCloudProperties = decode_as(&FULL_VM).unwrap();
    assert_eq!(vm.service_account.as_str(), "cpi@project.iam.gserviceaccount.com");
    assert_eq!(vm.service_scopes, VMServiceScopes::from(vec!["compute", "devstorage.read_only"]));
}
