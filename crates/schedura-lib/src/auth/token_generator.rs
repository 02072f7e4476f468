// ============================
// crates/schedura-lib/src/auth/token_generator.rs
// ============================
//! Random session marker values.
//!
//! Only the presence of the marker is ever checked, but a random value keeps
//! one install's marker from being mistaken for another's.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Default marker size in bytes
const MARKER_BYTES: usize = 24;

/// Generate a new session marker: URL-safe base64, never empty
pub fn generate_session_marker() -> String {
    generate_marker_with_size(MARKER_BYTES)
}

/// Generate a marker from `bytes` random bytes (at least one)
pub fn generate_marker_with_size(bytes: usize) -> String {
    let mut buffer = vec![0u8; bytes.max(1)];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}
