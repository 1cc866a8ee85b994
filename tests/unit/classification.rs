//! Indicator predicates through the public API

use osint_utils::classify::{
    classify, hash_type, is_cve, is_email, is_fqdn, is_ipv4, is_ipv6, is_url, HashKind,
};

#[test]
fn test_predicates_are_prefix_matches() {
    assert!(is_ipv4("192.168.1.1:8080"));
    assert!(is_url("https://example.com trailing words"));
    assert!(is_cve("CVE-2019-0708 (BlueKeep)"));
    assert!(is_email("soc@example.com, cc'd"));
    assert!(!is_ipv4(" 192.168.1.1"));
}

#[test]
fn test_fqdn_requires_whole_string() {
    assert!(is_fqdn("mail.example.com"));
    assert!(!is_fqdn("mail.example.com/path"));
    assert!(!is_fqdn("mail example.com"));
}

#[test]
fn test_ipv6_forms() {
    for addr in [
        "1:2:3:4:5:6:7:8",
        "1::",
        "1::8",
        "1:2:3:4:5:6::8",
        "::",
        "::255.255.255.255",
        "2001:db8:3:4::192.0.2.33",
    ] {
        assert!(is_ipv6(addr), "{} should be IPv6", addr);
    }
}

#[test]
fn test_real_digests() {
    assert_eq!(
        hash_type("d41d8cd98f00b204e9800998ecf8427e"),
        Some(HashKind::Md5)
    );
    assert_eq!(
        hash_type("da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        Some(HashKind::Sha1)
    );
    assert_eq!(
        hash_type("E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"),
        Some(HashKind::Sha256)
    );
}

#[test]
fn test_classify_unknowns() {
    for value in ["", "   ", "hello world", "1.2.3", "CVE-2021", "0x1234"] {
        assert_eq!(classify(value), None, "{:?} should be unclassified", value);
    }
}
