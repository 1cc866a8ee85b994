//! Base58 and Base58Check decoding for legacy Bitcoin addresses
//!
//! Base58 treats a string as a big-endian base-58 integer where each
//! character's position in [`ALPHABET`] is its digit value. Decoding converts
//! that integer into a fixed-width big-endian byte buffer; Base58Check then
//! splits off the trailing 4 bytes and compares them against the first 4
//! bytes of the payload's double-SHA256.
//!
//! # Usage
//!
//! ```rust
//! use osint_utils::crypto::base58;
//!
//! assert!(base58::is_btc_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"));
//! assert!(!base58::is_btc_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyt"));
//!
//! let bytes = base58::decode_base58("2NEpo7TZRRrLZSi2U", 12).unwrap();
//! assert_eq!(bytes, b"Hello World!");
//! ```
use super::double_sha256;
use crate::errors::Base58Error;

/// Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`)
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Decoded length of a legacy address: version byte + 20-byte hash + 4-byte checksum
pub const BTC_ADDRESS_LEN: usize = 25;

/// Length of the trailing Base58Check checksum
pub const CHECKSUM_LEN: usize = 4;

/// Map a single character to its digit value, or `None` if it is not in the alphabet
fn digit_value(ch: char) -> Option<u32> {
    if !ch.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&c| c == ch as u8)
        .map(|idx| idx as u32)
}

/// Decode a Base58 string into exactly `length` big-endian bytes
///
/// Shorter values are left-padded with zero bytes. A value that needs more
/// than `length` bytes is rejected rather than truncated.
///
/// # Errors
///
/// * [`Base58Error::InvalidCharacter`] - a symbol outside [`ALPHABET`]; every
///   character is checked before any arithmetic, so this wins over overflow
/// * [`Base58Error::Overflow`] - the decoded value does not fit in `length` bytes
pub fn decode_base58(encoded: &str, length: usize) -> Result<Vec<u8>, Base58Error> {
    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, character)| {
            digit_value(character).ok_or(Base58Error::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    // Fixed-width accumulator: acc = acc * 58 + digit, carried from the least
    // significant byte upwards. Any carry left over means the value has
    // outgrown `length` bytes, and it can only keep growing from there.
    let mut output = vec![0u8; length];
    for digit in digits {
        let mut carry = digit;
        for byte in output.iter_mut().rev() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        if carry != 0 {
            return Err(Base58Error::Overflow { requested: length });
        }
    }

    Ok(output)
}

/// Encode bytes as Base58, rendering each leading zero byte as `1`
pub fn encode_base58(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 digits of the non-zero tail
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(zeros + digits.len());
    result.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    result.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    result
}

/// Decode a Base58Check string of `length` bytes and verify its checksum
///
/// Returns the payload with the 4 checksum bytes removed.
///
/// # Errors
///
/// Any [`decode_base58`] error, [`Base58Error::TooShort`] when `length`
/// cannot hold a checksum, or [`Base58Error::ChecksumMismatch`].
pub fn verify_base58check(encoded: &str, length: usize) -> Result<Vec<u8>, Base58Error> {
    if length < CHECKSUM_LEN {
        return Err(Base58Error::TooShort);
    }

    let mut decoded = decode_base58(encoded, length)?;
    let checksum = decoded.split_off(length - CHECKSUM_LEN);

    if double_sha256(&decoded)[..CHECKSUM_LEN] != checksum[..] {
        return Err(Base58Error::ChecksumMismatch);
    }

    Ok(decoded)
}

/// Check whether a string is a well-formed legacy Bitcoin address
///
/// Decode failures and checksum mismatches all collapse to `false`; the
/// version byte is not inspected, so P2PKH, P2SH and testnet addresses all
/// pass as long as the checksum holds.
pub fn is_btc_address(candidate: &str) -> bool {
    verify_base58check(candidate, BTC_ADDRESS_LEN).is_ok()
}
