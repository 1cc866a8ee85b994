//! File-driven workflows: indicator lists, reports and API key files

use osint_utils::apikeys::get_apikey;
use osint_utils::classify::{classify, extract_indicators, HashKind, Indicator};
use osint_utils::config::AppConfig;
use osint_utils::fsutil;
use serial_test::serial;

use crate::common::write_fixture;

#[test]
fn test_classify_indicator_list_file() {
    let (_dir, path) = write_fixture(
        "iocs.txt",
        "203.0.113.9\nexample.org\nCVE-2017-0144\n44d88612fea8a8f36de82e1278abb02f\n1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa\n",
    );

    let lines = fsutil::read_lines(&path).unwrap().unwrap();
    let kinds: Vec<_> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| classify(line))
        .collect();

    assert_eq!(
        kinds,
        vec![
            Some(Indicator::Ipv4),
            Some(Indicator::Fqdn),
            Some(Indicator::Cve),
            Some(Indicator::Hash(HashKind::Md5)),
            Some(Indicator::BtcAddress),
        ]
    );
}

#[test]
fn test_extract_from_report_file() {
    let (_dir, path) = write_fixture(
        "report.txt",
        "The sample calls home to https://evil.example/gate.php and \
         198.51.100.20, then asks for payment to 3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy.",
    );

    let data = fsutil::read_file(&path).unwrap().unwrap();
    let text = fsutil::utf_decode(data).unwrap();
    let found = extract_indicators(&text);

    let kinds: Vec<_> = found.iter().map(|item| item.indicator).collect();
    assert_eq!(
        kinds,
        vec![Indicator::Url, Indicator::Ipv4, Indicator::BtcAddress]
    );
    assert_eq!(found[2].value, "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy");
}

#[test]
fn test_write_then_read_results() {
    let (dir, _) = write_fixture("placeholder", "x");
    let out_dir = dir.path().join("results");
    assert!(fsutil::mkdir(&out_dir));

    let out = out_dir.join("valid.txt");
    for address in ["1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "1BoatSLRHtKNngkdXEeobR76b53LETtpyt"] {
        if classify(address) == Some(Indicator::BtcAddress) {
            fsutil::write_file(&out, format!("{}\n", address)).unwrap();
        }
    }

    assert_eq!(
        fsutil::read_lines(&out).unwrap().unwrap(),
        vec!["1BoatSLRHtKNngkdXEeobR76b53LETtpyT", ""]
    );
    assert_eq!(fsutil::list_dir(dir.path()).unwrap().len(), 2);
}

#[test]
#[serial]
fn test_apikey_path_from_environment() {
    let (_dir, path) = write_fixture("apikeys.json", r#"{"virustotal": "vt-key"}"#);
    std::env::set_var("OSINT_APIKEYS_PATH", &path);

    let config = AppConfig::load();
    std::env::remove_var("OSINT_APIKEYS_PATH");

    let config = config.unwrap();
    assert_eq!(config.paths.apikeys, path);
    assert_eq!(
        get_apikey(&config.paths.apikeys, "virustotal").unwrap(),
        Some("vt-key".to_string())
    );
    assert_eq!(get_apikey(&config.paths.apikeys, "shodan").unwrap(), None);
}
