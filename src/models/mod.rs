//! Typed cloud-properties structures, one per resource kind.

pub mod disk;
pub mod environment;
pub mod network;
pub mod snapshot;
pub mod stemcell;
pub mod vm;

pub use disk::DiskCloudProperties;
pub use environment::{Environment, VMMetadata};
pub use network::NetworkCloudProperties;
pub use snapshot::SnapshotMetadata;
pub use stemcell::{StemcellCloudProperties, StemcellSource};
pub use vm::{VMCloudProperties, VMServiceAccount, VMServiceScopes};

pub(crate) fn is_zero(n: &i64) -> bool {
    *n == 0
}
