//! Compiled indicator patterns
//!
//! Anchored patterns (`*_PREFIX`) back the single-value predicates and match
//! from the start of the input only. Unanchored patterns back free-text
//! extraction. All patterns are compiled once on first use.

use lazy_static::lazy_static;
use regex::Regex;

const IPV4_BODY: &str = r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

const IPV6_BODY: &str = concat!(
    r"(?:",
    r"([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}",
    r"|([0-9a-f]{1,4}:){1,7}:",
    r"|([0-9a-f]{1,4}:){1,6}:[0-9a-f]{1,4}",
    r"|([0-9a-f]{1,4}:){1,5}(:[0-9a-f]{1,4}){1,2}",
    r"|([0-9a-f]{1,4}:){1,4}(:[0-9a-f]{1,4}){1,3}",
    r"|([0-9a-f]{1,4}:){1,3}(:[0-9a-f]{1,4}){1,4}",
    r"|([0-9a-f]{1,4}:){1,2}(:[0-9a-f]{1,4}){1,5}",
    r"|[0-9a-f]{1,4}:((:[0-9a-f]{1,4}){1,6})",
    r"|:((:[0-9a-f]{1,4}){1,7}|:)",
    r"|fe80:(:[0-9a-f]{0,4}){0,4}%[0-9a-z]+",
    r"|::(ffff(:0{1,4})?:)?((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])",
    r"|([0-9a-f]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])",
    r")"
);

const EMAIL_BODY: &str = r"\b[a-z0-9_.]+@[0-9a-z.-]+\b";

const URL_BODY: &str = r"https?://(?:[a-z0-9]|[$-_@.&+]|[!*(),]|%[0-9a-f]{2})+";

const CVE_BODY: &str = r"CVE-(?:19|20)[0-9]{2}-[0-9]{4,7}";

/// Legacy address shape; checksum is verified separately
const BTC_BODY: &str = r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b";

fn hash_body(len: usize) -> String {
    format!(r"\b[a-f0-9]{{{}}}\b", len)
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

fn anchored(body: &str) -> Regex {
    compile(&format!("(?i)^(?:{})", body))
}

fn unanchored(body: &str) -> Regex {
    compile(&format!("(?i){}", body))
}

lazy_static! {
    pub static ref IPV4_PREFIX: Regex = anchored(IPV4_BODY);
    pub static ref IPV6_PREFIX: Regex = anchored(IPV6_BODY);
    pub static ref EMAIL_PREFIX: Regex = anchored(EMAIL_BODY);
    pub static ref URL_PREFIX: Regex = anchored(URL_BODY);
    pub static ref CVE_PREFIX: Regex = anchored(CVE_BODY);
    pub static ref MD5_PREFIX: Regex = anchored(&hash_body(32));
    pub static ref SHA1_PREFIX: Regex = anchored(&hash_body(40));
    pub static ref SHA256_PREFIX: Regex = anchored(&hash_body(64));
    pub static ref SHA512_PREFIX: Regex = anchored(&hash_body(128));

    /// Full-string domain shape; overall length is checked by the caller
    pub static ref FQDN: Regex =
        compile(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$");

    pub static ref IPV4_ANY: Regex = unanchored(&format!(r"\b{}\b", IPV4_BODY));
    pub static ref EMAIL_ANY: Regex = unanchored(EMAIL_BODY);
    pub static ref URL_ANY: Regex = unanchored(URL_BODY);
    pub static ref CVE_ANY: Regex = unanchored(CVE_BODY);
    pub static ref MD5_ANY: Regex = unanchored(&hash_body(32));
    pub static ref SHA1_ANY: Regex = unanchored(&hash_body(40));
    pub static ref SHA256_ANY: Regex = unanchored(&hash_body(64));
    pub static ref SHA512_ANY: Regex = unanchored(&hash_body(128));
    pub static ref BTC_ANY: Regex = compile(BTC_BODY);
}
