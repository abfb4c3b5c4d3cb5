//! vSphere node identity helpers.
//!
//! Cluster nodes carry a *provider ID* of the form `<scheme>://<body>`. For nodes running on
//! vSphere the body is the VM's UUID, so the provider ID looks like
//! `vsphere://422e4956-ad22-1139-6d72-59cc8f26bc90`.
//!
//! The same machine shows up with two different UUID spellings:
//! - the node's system UUID as reported to the orchestrator, read from SMBIOS with the first three
//!   fields stored little-endian, and
//! - the VM's BIOS UUID as reported by the vSphere inventory, in canonical big-endian form.
//!
//! The two differ only in the byte order of the first three hyphen-delimited groups.
//!
//! This crate provides:
//! - Classification and prefix handling for provider IDs ([`should_process_node`],
//!   [`uuid_from_provider_id`]).
//! - Byte-order conversion between the two UUID spellings ([`convert_k8s_uuid_to_normal`],
//!   [`swap_byte_order`]).
//! - A case-insensitive membership test for string lists ([`array_contains_case_insensitive`]).
//! - A strict validated wrapper ([`BiosUuid`]) for callers that want errors instead of
//!   pass-through.
//!
//! ## Totality
//! The free functions never fail. Empty input produces an empty string or `false`, and malformed
//! UUIDs handed to the converter produce unspecified output rather than an error or a panic. Use
//! [`BiosUuid::parse`] when the input must be validated.
//!
//! ## Example
//! ```
//! use vsphere_node_id::{convert_k8s_uuid_to_normal, uuid_from_provider_id, PROVIDER_PREFIX};
//!
//! let provider_id = format!("{PROVIDER_PREFIX}56492e42-22ad-3911-6d72-59cc8f26bc90");
//! let node_uuid = uuid_from_provider_id(&provider_id);
//! assert_eq!(
//!     convert_k8s_uuid_to_normal(node_uuid),
//!     "422e4956-ad22-1139-6d72-59cc8f26bc90"
//! );
//! ```

mod bios_uuid;
mod byte_order;
pub mod constants;
mod membership;
mod provider_id;

// Re-export public types
pub use bios_uuid::{BiosUuid, Uuid};
pub use byte_order::{convert_k8s_uuid_to_normal, swap_byte_order, uuids_match};
pub use constants::PROVIDER_PREFIX;
pub use membership::array_contains_case_insensitive;
pub use provider_id::{
    is_vsphere_provider_id, normalized_uuid_from_provider_id, provider_id_from_uuid,
    should_process_node, uuid_from_provider_id,
};

/// Error type for strict node identity operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NodeIdError {
    /// No identifier was supplied
    #[error("provider ID is empty")]
    EmptyIdentifier,
    /// The identifier body is not a hyphenated UUID
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),
    /// The identifier belongs to another cloud provider
    #[error("provider ID is not a vSphere identifier: '{0}'")]
    ForeignProvider(String),
}

/// Result type for strict node identity operations.
pub type NodeIdResult<T> = Result<T, NodeIdError>;
