//! Conversion between the two UUID byte orders.
//!
//! SMBIOS stores the first three UUID fields (`time_low`, `time_mid`, `time_hi_and_version`)
//! little-endian, and the node system UUID seen by the orchestrator is read from there verbatim.
//! vSphere reports the same identity in canonical big-endian form. Translating between the two
//! reverses the byte pairs of the first three groups and leaves the last two groups untouched:
//!
//! ```text
//! 56492e42-22ad-3911-6d72-59cc8f26bc90
//! 422e4956-ad22-1139-6d72-59cc8f26bc90
//! ```
//!
//! The transformation is an involution, so one function serves both directions.

use crate::bios_uuid::{BiosUuid, Uuid};
use crate::constants::{GROUP_RANGES, UUID_LEN};

/// Converts a node system UUID to the vSphere BIOS UUID, or back.
///
/// Hex digit case is preserved. Empty input yields an empty string.
///
/// The input is not validated. A malformed string produces unspecified output, but never
/// panics: groups that fall outside the input are emitted empty.
pub fn convert_k8s_uuid_to_normal(k8s_uuid: &str) -> String {
    if k8s_uuid.is_empty() {
        return String::new();
    }
    if !BiosUuid::is_hyphenated(k8s_uuid) {
        tracing::debug!(uuid = k8s_uuid, "converting malformed UUID");
    }

    let group = |index: usize| {
        let (start, end) = GROUP_RANGES[index];
        k8s_uuid.get(start..end).unwrap_or_default()
    };

    let mut converted = String::with_capacity(UUID_LEN);
    push_reversed_pairs(&mut converted, group(0));
    converted.push('-');
    push_reversed_pairs(&mut converted, group(1));
    converted.push('-');
    push_reversed_pairs(&mut converted, group(2));
    converted.push('-');
    converted.push_str(group(3));
    converted.push('-');
    converted.push_str(group(4));
    converted
}

fn push_reversed_pairs(out: &mut String, group: &str) {
    let chars: Vec<char> = group.chars().collect();
    for pair in chars.rchunks(2) {
        out.extend(pair);
    }
}

/// Typed counterpart of [`convert_k8s_uuid_to_normal`].
///
/// Reverses the bytes of the first three fields and keeps the trailing eight bytes.
pub fn swap_byte_order(uuid: Uuid) -> Uuid {
    Uuid::from_bytes(uuid.to_bytes_le())
}

/// Returns true if the two UUID strings identify the same machine.
///
/// The comparison ignores case and accepts either byte order, so a node system UUID matches the
/// BIOS UUID of its VM. Empty strings never match.
pub fn uuids_match(node_uuid: &str, vm_uuid: &str) -> bool {
    if node_uuid.is_empty() || vm_uuid.is_empty() {
        return false;
    }
    node_uuid.eq_ignore_ascii_case(vm_uuid)
        || convert_k8s_uuid_to_normal(node_uuid).eq_ignore_ascii_case(vm_uuid)
}
