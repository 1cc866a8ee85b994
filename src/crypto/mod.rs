/// Cryptographic utilities for address validation
///
/// This module provides the hashing primitive shared by Base58Check
/// verification and the Base58 codec itself.
pub mod base58;

pub use base58::{decode_base58, encode_base58, is_btc_address, verify_base58check};

use sha2::{Digest, Sha256};

/// SHA-256 applied twice, as used by Bitcoin checksums
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}
