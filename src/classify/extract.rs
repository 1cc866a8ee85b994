//! Free-text indicator extraction
//!
//! Scans arbitrary text (reports, pastes, log lines) for every indicator the
//! unanchored patterns recognise. Domains are not extracted: nearly every
//! dotted token would qualify.

use super::patterns;
use super::{HashKind, Indicator};
use crate::crypto::base58;
use regex::Regex;
use serde::Serialize;

/// A single indicator found in free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedIndicator {
    pub indicator: Indicator,
    pub value: String,
    /// Byte offset of the match in the scanned text
    pub offset: usize,
}

fn collect(text: &str, pattern: &Regex, indicator: Indicator, found: &mut Vec<ExtractedIndicator>) {
    found.extend(pattern.find_iter(text).map(|m| ExtractedIndicator {
        indicator,
        value: m.as_str().to_string(),
        offset: m.start(),
    }));
}

/// Extract all IPv4 addresses, URLs, emails, CVE IDs, hashes and Bitcoin
/// addresses from `text`, ordered by position
///
/// Overlapping indicators of different kinds are all reported (an IPv4 host
/// inside a URL yields both). Bitcoin address candidates are kept only when
/// their checksum verifies.
pub fn extract_indicators(text: &str) -> Vec<ExtractedIndicator> {
    let mut found = Vec::new();

    collect(text, &patterns::IPV4_ANY, Indicator::Ipv4, &mut found);
    collect(text, &patterns::URL_ANY, Indicator::Url, &mut found);
    collect(text, &patterns::EMAIL_ANY, Indicator::Email, &mut found);
    collect(text, &patterns::CVE_ANY, Indicator::Cve, &mut found);
    collect(text, &patterns::MD5_ANY, Indicator::Hash(HashKind::Md5), &mut found);
    collect(text, &patterns::SHA1_ANY, Indicator::Hash(HashKind::Sha1), &mut found);
    collect(text, &patterns::SHA256_ANY, Indicator::Hash(HashKind::Sha256), &mut found);
    collect(text, &patterns::SHA512_ANY, Indicator::Hash(HashKind::Sha512), &mut found);

    found.extend(
        patterns::BTC_ANY
            .find_iter(text)
            .filter(|m| base58::is_btc_address(m.as_str()))
            .map(|m| ExtractedIndicator {
                indicator: Indicator::BtcAddress,
                value: m.as_str().to_string(),
                offset: m.start(),
            }),
    );

    found.sort_by_key(|item| item.offset);
    found
}
