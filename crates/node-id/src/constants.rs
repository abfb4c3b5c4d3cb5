//! Constants shared by the node identity helpers.

/// Scheme prefix of provider IDs issued by the vSphere cloud provider.
pub const PROVIDER_PREFIX: &str = "vsphere://";

/// Length of a hyphenated UUID string.
pub const UUID_LEN: usize = 36;

/// Byte offsets of the hyphens in a hyphenated UUID string.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Character ranges of the five hyphen-delimited UUID groups.
pub(crate) const GROUP_RANGES: [(usize, usize); 5] =
    [(0, 8), (9, 13), (14, 18), (19, 23), (24, 36)];

/// Separator between the scheme and the body of a provider ID.
pub(crate) const SCHEME_SEPARATOR: &str = "://";
