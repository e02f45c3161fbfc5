#![allow(dead_code)]

use fixtures::fixtures;
use serde::Deserialize;
use std::sync::OnceLock;
use ua_classifier::{
    BrowserName, Classifier, Detection, DeviceType, OsName, Platform, Version,
};

// Global classifier instance that is initialized once
static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

fn classifier() -> &'static Classifier {
    CLASSIFIER.get_or_init(|| {
        let t = std::time::Instant::now();
        let c = Classifier::new().expect("failed to build Classifier");
        eprintln!("classifier built in {:?}", t.elapsed());
        c
    })
}

#[derive(Debug, Deserialize)]
struct Fixture {
    user_agent: String,
    browser: BrowserName,
    browser_version: String,
    platform: Platform,
    os: OsName,
    os_version: String,
    device: DeviceType,
}

fn version(s: &str) -> Version {
    s.parse()
        .unwrap_or_else(|e| panic!("bad version in fixture: {e}"))
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_fixtures(path: &std::path::Path) {
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<Fixture> = serde_yaml::from_str(&content).unwrap();

    for f in &fixtures {
        let result = classifier().classify(&f.user_agent);

        assert_eq!(
            result.browser.name, f.browser,
            "browser name mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.browser.version,
            version(&f.browser_version),
            "browser version mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.os.platform, f.platform,
            "platform mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.os.name, f.os,
            "os name mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.os.version,
            version(&f.os_version),
            "os version mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.device, f.device,
            "device mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            result.is_bot(),
            f.browser.is_bot(),
            "bot flag mismatch for UA: {}",
            f.user_agent
        );

        // Classification ignores case.
        let shouted = classifier().classify(&f.user_agent.to_ascii_uppercase());
        assert_eq!(shouted, result, "case sensitivity for UA: {}", f.user_agent);
    }
}

#[test]
fn batch_matches_sequential() {
    let uas: Vec<String> = ["desktop", "mobile", "tablet", "tv_console", "bots", "unknown"]
        .iter()
        .flat_map(|name| {
            let content =
                std::fs::read_to_string(format!("tests/fixtures/{name}.yml")).unwrap();
            let fixtures: Vec<Fixture> = serde_yaml::from_str(&content).unwrap();
            fixtures.into_iter().map(|f| f.user_agent)
        })
        .collect();

    let batch = classifier().classify_all(&uas);
    let sequential: Vec<Detection> = uas.iter().map(|ua| classifier().classify(ua)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn free_function_uses_shared_instance() {
    let ua = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5X Build/MDB08L) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/46.0.2490.76 Mobile Safari/537.36";
    assert_eq!(ua_classifier::classify(ua), classifier().classify(ua));
    assert!(std::ptr::eq(Classifier::shared(), Classifier::shared()));
}

#[test]
fn oversized_input_is_classified() {
    let ua = format!(
        "Mozilla/5.0 (Windows NT 10.0; Win64) AppleWebKit/537.36 {} Chrome/99.0.1 Safari/537.36",
        "abc ".repeat(600)
    );
    assert!(ua.len() > 1024);

    let d = classifier().classify(&ua);
    assert_eq!(d.browser.name, BrowserName::Chrome);
    assert_eq!(d.browser.version, Version::new(99, 0, 1));
    assert_eq!(d.os.version, Version::new(10, 0, 0));
    assert_eq!(d.device, DeviceType::Computer);
}

#[test]
fn non_ascii_input_is_classified() {
    let d = classifier().classify(
        "Mozilla/5.0 (Linux; Android 9; Ünïcödé Build/X) AppleWebKit/537.36 Chrome/70.0.3538 Mobile Safari/537.36",
    );
    assert_eq!(d.browser.name, BrowserName::Chrome);
    assert_eq!(d.os.name, OsName::Android);
    assert_eq!(d.os.version, Version::new(9, 0, 0));
    assert_eq!(d.device, DeviceType::Phone);
}

#[test]
fn malformed_parentheses_never_panic() {
    for ua in [
        "(",
        ")",
        "((((((((",
        "))))(((( windows nt 6.1",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 7_",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_",
        "Mozilla/5.0 (Windows NT ",
        "version/",
        "Trident/99999999999999999999",
    ] {
        let d = classifier().classify(ua);
        assert_eq!(d, classifier().classify(ua), "non-deterministic for {ua:?}");
    }
}

#[test]
fn bots_never_expose_system_details() {
    let d = classifier().classify(
        "Mozilla/5.0 (Linux; Android 6.0.1; Mobile) (compatible; AhrefsBot/7.0; +http://ahrefs.com/robot/)",
    );
    assert!(d.is_bot());
    assert_eq!(d.os.platform, Platform::Bot);
    assert_eq!(d.os.name, OsName::Bot);
    assert_eq!(d.device, DeviceType::Computer);
    assert_eq!(d.browser.version, Version::ZERO);
}

#[test]
fn detection_serializes_with_stable_names() {
    let d = classifier().classify(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/43.0.2357.130 Safari/537.36",
    );
    let yaml = serde_yaml::to_string(&d).unwrap();
    assert!(yaml.contains("name: chrome"), "{yaml}");
    assert!(yaml.contains("platform: mac"), "{yaml}");
    assert!(yaml.contains("name: macosx"), "{yaml}");
    assert!(yaml.contains("device: computer"), "{yaml}");

    let back: Detection = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, d);
}
