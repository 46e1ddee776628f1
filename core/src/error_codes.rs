//! Stable machine-readable codes for errors emitted by the scan pipeline.
//!
//! Every error enum exposes a `code()` method resolving to one of these
//! constants so callers can match on failures without parsing messages.

pub const CONTAINER_IO: &str = "PBISCAN_CONTAINER_001";
pub const CONTAINER_NOT_ZIP: &str = "PBISCAN_CONTAINER_002";
pub const CONTAINER_TOO_MANY_ENTRIES: &str = "PBISCAN_CONTAINER_003";
pub const CONTAINER_PART_TOO_LARGE: &str = "PBISCAN_CONTAINER_004";
pub const CONTAINER_ZIP_READ: &str = "PBISCAN_CONTAINER_005";
pub const CONTAINER_LAYOUT_MISSING: &str = "PBISCAN_CONTAINER_006";

pub const DECODE_ODD_LENGTH: &str = "PBISCAN_DECODE_001";
pub const DECODE_INVALID_UNITS: &str = "PBISCAN_DECODE_002";

pub const LAYOUT_SYNTAX: &str = "PBISCAN_LAYOUT_001";
pub const LAYOUT_ROOT_NOT_OBJECT: &str = "PBISCAN_LAYOUT_002";
