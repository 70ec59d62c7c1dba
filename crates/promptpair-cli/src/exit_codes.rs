//! Exit codes are part of the public contract of all three entry points.

pub const EXIT_SUCCESS: i32 = 0;
/// Runtime failure: endpoint probe failed, artifact invalid, file I/O.
pub const EXIT_RUNTIME_ERROR: i32 = 1;
/// Configuration error: bad flags or an unusable question set. Nothing has
/// been sent to the endpoint when this is returned.
pub const EXIT_CONFIG_ERROR: i32 = 2;
