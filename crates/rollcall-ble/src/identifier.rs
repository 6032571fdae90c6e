//! Deterministic name-based identifier derivation

use md5::{Digest, Md5};
use uuid::Uuid;

// ----------------------------------------------------------------------------
// Name-based UUID Derivation
// ----------------------------------------------------------------------------

/// Derive the 128-bit service identifier broadcast for a seed string.
///
/// MD5 over the raw seed bytes with the RFC 4122 version-3 and variant bits
/// set, so the mapping is namespace-free and stable across platforms and
/// process runs. Collision resistance is probabilistic, not cryptographic:
/// distinct seeds yield distinct identifiers with overwhelming probability.
pub fn derive_identifier(seed: &str) -> Uuid {
    let digest: [u8; 16] = Md5::digest(seed.as_bytes()).into();
    uuid::Builder::from_md5_bytes(digest).into_uuid()
}
