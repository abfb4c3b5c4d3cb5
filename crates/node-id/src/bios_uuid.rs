//! Strict, validated vSphere BIOS UUIDs.
//!
//! The free functions in this crate are deliberately permissive: they strip prefixes and reorder
//! characters without checking that the input is a UUID at all. [`BiosUuid`] is for callers that
//! would rather reject bad input up front.

use crate::constants::{HYPHEN_POSITIONS, PROVIDER_PREFIX, SCHEME_SEPARATOR, UUID_LEN};
use crate::provider_id::{is_vsphere_provider_id, uuid_from_provider_id};
use crate::{swap_byte_order, NodeIdError, NodeIdResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A VM BIOS UUID in canonical (big-endian) byte order.
///
/// This wrapper guarantees that once constructed, the contained value was parsed from a
/// well-formed hyphenated UUID string. It is the vSphere-side spelling of a machine identity;
/// use [`BiosUuid::to_k8s`] to get the node system UUID the orchestrator reports for the same
/// machine.
///
/// # Construction
/// - [`BiosUuid::parse`] validates a bare hyphenated UUID.
/// - [`BiosUuid::from_provider_id`] validates a `vsphere://` provider ID.
/// - [`BiosUuid::from_k8s`] converts a node system UUID.
///
/// # Display format
/// Always the 36-character lowercase hyphenated form, whatever case the input used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiosUuid(Uuid);

impl BiosUuid {
    /// Validates and parses a hyphenated UUID string.
    ///
    /// Upper, lower and mixed case hex digits are accepted. Braced, URN and simple (no hyphen)
    /// forms are rejected, since neither vSphere nor the node API produce them.
    ///
    /// # Errors
    ///
    /// Returns [`NodeIdError::InvalidUuid`] if `input` is not a hyphenated UUID.
    pub fn parse(input: &str) -> NodeIdResult<Self> {
        if !Self::is_hyphenated(input) {
            tracing::debug!(input, "rejecting malformed UUID");
            return Err(NodeIdError::InvalidUuid(format!(
                "expected 36 character hyphenated UUID, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| NodeIdError::InvalidUuid(format!("'{}': {}", input, e)))
    }

    /// Validates a provider ID and parses the UUID it carries.
    ///
    /// A bare UUID without any scheme is accepted too, matching [`uuid_from_provider_id`].
    ///
    /// # Errors
    ///
    /// - [`NodeIdError::EmptyIdentifier`] if `provider_id` is empty.
    /// - [`NodeIdError::ForeignProvider`] if it carries a scheme other than `vsphere://`.
    /// - [`NodeIdError::InvalidUuid`] if the remainder is not a hyphenated UUID.
    pub fn from_provider_id(provider_id: &str) -> NodeIdResult<Self> {
        if provider_id.is_empty() {
            return Err(NodeIdError::EmptyIdentifier);
        }
        if !is_vsphere_provider_id(provider_id) && provider_id.contains(SCHEME_SEPARATOR) {
            return Err(NodeIdError::ForeignProvider(provider_id.to_owned()));
        }
        Self::parse(uuid_from_provider_id(provider_id))
    }

    /// Parses a node system UUID and converts it to BIOS byte order.
    ///
    /// # Errors
    ///
    /// Returns [`NodeIdError::InvalidUuid`] if `k8s_uuid` is not a hyphenated UUID.
    pub fn from_k8s(k8s_uuid: &str) -> NodeIdResult<Self> {
        Self::parse(k8s_uuid).map(|parsed| Self(swap_byte_order(parsed.0)))
    }

    /// Returns the node system UUID for this machine, in the orchestrator's byte order.
    pub fn to_k8s(&self) -> Uuid {
        swap_byte_order(self.0)
    }

    /// Returns the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the `vsphere://` provider ID for this machine.
    pub fn provider_id(&self) -> String {
        format!("{PROVIDER_PREFIX}{}", self.0.hyphenated())
    }

    /// Returns true if `input` is a 36-character hyphenated UUID.
    ///
    /// Purely syntactic: hyphens at offsets 8, 13, 18 and 23, ASCII hex digits (either case)
    /// everywhere else.
    pub fn is_hyphenated(input: &str) -> bool {
        input.len() == UUID_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if HYPHEN_POSITIONS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }
}

impl From<Uuid> for BiosUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for BiosUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for BiosUuid {
    type Err = NodeIdError;

    /// Equivalent to [`BiosUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BiosUuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BiosUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BiosUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BiosUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
