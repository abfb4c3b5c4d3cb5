//! Provider ID classification and prefix handling.
//!
//! A provider ID is `<scheme>://<body>`. Only IDs with the [`PROVIDER_PREFIX`] scheme belong to
//! vSphere; every other scheme is owned by a different cloud provider and must be left alone.

use crate::constants::{PROVIDER_PREFIX, SCHEME_SEPARATOR};

/// Returns true if a node with this provider ID should be managed by the vSphere provider.
///
/// Nodes that have not been assigned a provider ID yet (empty string) are processed, since they
/// may still turn out to be vSphere VMs. Nodes with any other scheme, or with an ID that has no
/// recognisable scheme at all, are skipped.
///
/// The prefix comparison is case-sensitive.
pub fn should_process_node(provider_id: &str) -> bool {
    if provider_id.is_empty() || is_vsphere_provider_id(provider_id) {
        return true;
    }

    match provider_id.split_once(SCHEME_SEPARATOR) {
        Some((scheme, _)) => {
            tracing::trace!(scheme, provider_id, "skipping node owned by another provider")
        }
        None => tracing::trace!(provider_id, "skipping node with malformed provider ID"),
    }
    false
}

/// Returns true if `provider_id` starts with [`PROVIDER_PREFIX`].
///
/// Unlike [`should_process_node`], an empty string is not a vSphere provider ID.
pub fn is_vsphere_provider_id(provider_id: &str) -> bool {
    provider_id.starts_with(PROVIDER_PREFIX)
}

/// Returns the UUID part of a vSphere provider ID.
///
/// The prefix is stripped and the remainder returned verbatim, case included. Input without the
/// prefix is returned unchanged, so a bare UUID passes straight through. No check is made that
/// the result looks like a UUID.
pub fn uuid_from_provider_id(provider_id: &str) -> &str {
    provider_id
        .strip_prefix(PROVIDER_PREFIX)
        .unwrap_or(provider_id)
}

/// Like [`uuid_from_provider_id`], but trims whitespace and lowercases the result.
///
/// This is the form to use when comparing a node's UUID against inventory records.
pub fn normalized_uuid_from_provider_id(provider_id: &str) -> String {
    uuid_from_provider_id(provider_id)
        .trim()
        .to_ascii_lowercase()
}

/// Builds a vSphere provider ID for `uuid`.
///
/// An empty UUID stays empty, and a value that already carries the prefix is not prefixed twice.
pub fn provider_id_from_uuid(uuid: &str) -> String {
    if uuid.is_empty() || is_vsphere_provider_id(uuid) {
        return uuid.to_owned();
    }
    format!("{PROVIDER_PREFIX}{uuid}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_process_node() {
        let cases = [
            ("empty provider ID should be processed", "", true),
            (
                "vsphere provider ID should be processed",
                "vsphere://422e4956-ad22-1139-6d72-59cc8f26bc90",
                true,
            ),
            (
                "aws provider ID should not be processed",
                "aws:///us-west-2a/i-1234567890abcdef0",
                false,
            ),
            (
                "azure provider ID should not be processed",
                "azure:///subscriptions/12345678-1234-1234-1234-123456789012/resourceGroups/my-rg/providers/Microsoft.Compute/virtualMachines/my-vm",
                false,
            ),
            (
                "gce provider ID should not be processed",
                "gce://my-project/us-central1-a/my-instance",
                false,
            ),
            (
                "custom provider ID should not be processed",
                "custom://some-node-id",
                false,
            ),
            (
                "malformed provider ID should not be processed",
                "not-a-valid-provider-id",
                false,
            ),
        ];

        for (name, provider_id, expected) in cases {
            assert_eq!(should_process_node(provider_id), expected, "{name}");
        }
    }

    #[test]
    fn test_should_process_node_prefix_is_case_sensitive() {
        assert!(!should_process_node(
            "VSPHERE://422e4956-ad22-1139-6d72-59cc8f26bc90"
        ));
    }

    #[test]
    fn test_should_process_node_bare_prefix() {
        assert!(should_process_node(PROVIDER_PREFIX));
    }

    #[test]
    fn test_is_vsphere_provider_id_rejects_empty() {
        assert!(!is_vsphere_provider_id(""));
        assert!(is_vsphere_provider_id("vsphere://anything"));
    }

    #[test]
    fn test_uuid_from_empty_provider_id() {
        assert_eq!(uuid_from_provider_id(""), "");
    }

    #[test]
    fn test_uuid_from_provider_id() {
        assert_eq!(
            uuid_from_provider_id("vsphere://423740e7-c66e-05e3-9d0b-9e1205b24d43"),
            "423740e7-c66e-05e3-9d0b-9e1205b24d43"
        );
    }

    #[test]
    fn test_uuid_from_provider_id_preserves_case() {
        let upper = "423740E7-C66E-05E3-9D0B-9E1205B24D43";
        let provider_id = format!("{PROVIDER_PREFIX}{upper}");

        assert_eq!(uuid_from_provider_id(&provider_id), upper);
    }

    #[test]
    fn test_uuid_from_uuid() {
        let uuid = "423740e7-c66e-05e3-9d0b-9e1205b24d43";
        assert_eq!(uuid_from_provider_id(uuid), uuid);

        let upper = "423740E7-C66E-05E3-9D0B-9E1205B24D43";
        assert_eq!(uuid_from_provider_id(upper), upper);
    }

    #[test]
    fn test_uuid_from_provider_id_does_not_validate_body() {
        assert_eq!(uuid_from_provider_id("vsphere://not-a-uuid"), "not-a-uuid");
        assert_eq!(
            uuid_from_provider_id("aws:///us-west-2a/i-1234567890abcdef0"),
            "aws:///us-west-2a/i-1234567890abcdef0"
        );
    }

    #[test]
    fn test_normalized_uuid_from_upper_provider_id() {
        let provider_id = format!("{PROVIDER_PREFIX}423740E7-C66E-05E3-9D0B-9E1205B24D43");

        assert_eq!(
            normalized_uuid_from_provider_id(&provider_id),
            "423740e7-c66e-05e3-9d0b-9e1205b24d43"
        );
    }

    #[test]
    fn test_normalized_uuid_trims_whitespace() {
        assert_eq!(
            normalized_uuid_from_provider_id("vsphere:// 423740e7-c66e-05e3-9d0b-9e1205b24d43\n"),
            "423740e7-c66e-05e3-9d0b-9e1205b24d43"
        );
        assert_eq!(normalized_uuid_from_provider_id(""), "");
    }

    #[test]
    fn test_provider_id_from_uuid() {
        assert_eq!(
            provider_id_from_uuid("423740e7-c66e-05e3-9d0b-9e1205b24d43"),
            "vsphere://423740e7-c66e-05e3-9d0b-9e1205b24d43"
        );
    }

    #[test]
    fn test_provider_id_from_uuid_empty_and_prefixed() {
        assert_eq!(provider_id_from_uuid(""), "");
        assert_eq!(
            provider_id_from_uuid("vsphere://423740e7-c66e-05e3-9d0b-9e1205b24d43"),
            "vsphere://423740e7-c66e-05e3-9d0b-9e1205b24d43"
        );
    }

    #[test]
    fn test_provider_id_round_trip_through_extraction() {
        let uuid = "42278c9d-79fb-f2af-b060-d7f167fa261c";
        let provider_id = provider_id_from_uuid(uuid);

        assert!(should_process_node(&provider_id));
        assert_eq!(uuid_from_provider_id(&provider_id), uuid);
    }
}
