//! Indicator classification
//!
//! Single-value predicates for the indicator types an investigation usually
//! handles: IP addresses, domains, URLs, email addresses, file hashes, CVE IDs
//! and Bitcoin addresses. The regex-backed predicates match from the start of
//! the input, so trailing content after a valid prefix is tolerated
//! (`"10.0.0.1/24"` is an IPv4 address); the domain check is the exception and
//! must cover the whole string.

pub mod extract;
pub mod patterns;

pub use extract::{extract_indicators, ExtractedIndicator};

use crate::crypto::base58;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest and longest accepted domain names
const FQDN_MIN_LEN: usize = 4;
const FQDN_MAX_LEN: usize = 255;

/// Hash algorithm inferred from a hex digest's length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashKind::Md5 => "md5",
            HashKind::Sha1 => "sha1",
            HashKind::Sha256 => "sha256",
            HashKind::Sha512 => "sha512",
        }
    }

    /// Number of hex characters in a digest of this kind
    pub fn hex_len(&self) -> usize {
        match self {
            HashKind::Md5 => 32,
            HashKind::Sha1 => 40,
            HashKind::Sha256 => 64,
            HashKind::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Kind of indicator a string was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "algorithm")]
pub enum Indicator {
    Ipv4,
    Ipv6,
    Url,
    Email,
    Cve,
    Hash(HashKind),
    BtcAddress,
    Fqdn,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Ipv4 => f.pad("ipv4"),
            Indicator::Ipv6 => f.pad("ipv6"),
            Indicator::Url => f.pad("url"),
            Indicator::Email => f.pad("email"),
            Indicator::Cve => f.pad("cve"),
            Indicator::Hash(kind) => f.pad(&format!("hash:{}", kind)),
            Indicator::BtcAddress => f.pad("btc_address"),
            Indicator::Fqdn => f.pad("fqdn"),
        }
    }
}

/// Check if string is an IPv4 address
pub fn is_ipv4(value: &str) -> bool {
    patterns::IPV4_PREFIX.is_match(value)
}

/// Check if string is an IPv6 address
pub fn is_ipv6(value: &str) -> bool {
    patterns::IPV6_PREFIX.is_match(value)
}

/// Check if string is a fully qualified domain name
pub fn is_fqdn(value: &str) -> bool {
    (FQDN_MIN_LEN..=FQDN_MAX_LEN).contains(&value.len()) && patterns::FQDN.is_match(value)
}

/// Check if string is an http(s) URL
pub fn is_url(value: &str) -> bool {
    patterns::URL_PREFIX.is_match(value)
}

/// Check if string is an email address
pub fn is_email(value: &str) -> bool {
    patterns::EMAIL_PREFIX.is_match(value)
}

/// Check if string is a CVE identifier (`CVE-YYYY-NNNN`, case-insensitive)
pub fn is_cve(value: &str) -> bool {
    patterns::CVE_PREFIX.is_match(value)
}

/// Identify a hex digest by length
///
/// Kinds are tried shortest first; each requires a word boundary after the
/// digest, so a 64-character digest is never mistaken for an MD5 prefix.
///
/// # Examples
/// ```
/// use osint_utils::classify::{hash_type, HashKind};
///
/// assert_eq!(hash_type("d41d8cd98f00b204e9800998ecf8427e"), Some(HashKind::Md5));
/// assert_eq!(hash_type("not a hash"), None);
/// ```
pub fn hash_type(value: &str) -> Option<HashKind> {
    if patterns::MD5_PREFIX.is_match(value) {
        Some(HashKind::Md5)
    } else if patterns::SHA1_PREFIX.is_match(value) {
        Some(HashKind::Sha1)
    } else if patterns::SHA256_PREFIX.is_match(value) {
        Some(HashKind::Sha256)
    } else if patterns::SHA512_PREFIX.is_match(value) {
        Some(HashKind::Sha512)
    } else {
        None
    }
}

/// Check if string is a valid legacy Bitcoin address (Base58Check, 25 bytes)
pub fn is_btc_address(value: &str) -> bool {
    base58::is_btc_address(value)
}

/// Classify a single value, returning the first matching indicator kind
///
/// Checked in order: IPv4, IPv6, URL, email, CVE, hash, Bitcoin address, domain.
pub fn classify(value: &str) -> Option<Indicator> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if is_ipv4(value) {
        Some(Indicator::Ipv4)
    } else if is_ipv6(value) {
        Some(Indicator::Ipv6)
    } else if is_url(value) {
        Some(Indicator::Url)
    } else if is_email(value) {
        Some(Indicator::Email)
    } else if is_cve(value) {
        Some(Indicator::Cve)
    } else if let Some(kind) = hash_type(value) {
        Some(Indicator::Hash(kind))
    } else if is_btc_address(value) {
        Some(Indicator::BtcAddress)
    } else if is_fqdn(value) {
        Some(Indicator::Fqdn)
    } else {
        None
    }
}
