//! Platform and operating system from the UA's system clause.

use fancy_regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::rules::contains_any;
use crate::scan::{version_after, version_after_any};
use crate::types::{Os, OsName, Platform, Version};

/// Amazon device codes (`kfthwi`, `sd4930ur`, ...) standing alone between spaces.
const KINDLE_FINGERPRINT: &str = r"\s(k[a-z]{3,5}|sd\d{4}ur)\s";

pub(crate) struct SystemResolver {
    kindle_fingerprint: Regex,
}

impl SystemResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            kindle_fingerprint: Regex::new(KINDLE_FINGERPRINT)?,
        })
    }

    /// Resolves platform, os name and os version. `ua` must be normalized.
    pub fn resolve(&self, ua: &str) -> Os {
        if ua.is_empty() {
            return Os::default();
        }

        let group = platform_group(ua);
        let specs = group
            .split(';')
            .next()
            .unwrap_or_default()
            .trim_start_matches('(');

        if let Some(os) = self.resolve_strict(specs, group, ua) {
            trace!(specs, ?os, "system resolved from leading token");
            return os;
        }
        self.resolve_fuzzy(group, ua)
    }

    fn resolve_strict(&self, specs: &str, group: &str, ua: &str) -> Option<Os> {
        let os = match specs {
            "android" | "x11" | "linux" => self.linux(group, ua),
            "bb10" | "playbook" => blackberry(),
            "ipad" | "iphone" | "ipod touch" | "ipod" => ios(specs, group),
            "macintosh" => macintosh(ua),
            _ => return None,
        };
        Some(os)
    }

    fn resolve_fuzzy(&self, group: &str, ua: &str) -> Os {
        if contains_any(ua, &["blackberry", "playbook"]) {
            return blackberry();
        }
        // Windows Phone UAs also say "windows", so this has to come first.
        if group.contains("windows phone ") {
            return windows_phone(group);
        }
        if contains_any(ua, &["windows ", "xbox"]) {
            return windows(ua);
        }
        if ua.contains("kindle/") || self.is_kindle_device(group) {
            return Os::new(Platform::Linux, OsName::Kindle, Version::ZERO);
        }
        if ua.contains("linux") {
            return self.linux(group, ua);
        }
        if contains_any(ua, &["webos", "hpwos"]) {
            return Os::new(Platform::Linux, OsName::WebOS, Version::ZERO);
        }
        if ua.contains("nintendo") {
            return Os::new(Platform::Nintendo, OsName::Nintendo, Version::ZERO);
        }
        if contains_any(ua, &["playstation", "vita", "psp"]) {
            return Os::new(Platform::Playstation, OsName::Playstation, Version::ZERO);
        }
        if ua.contains("android") {
            return self.linux(group, ua);
        }
        Os::default()
    }

    fn is_kindle_device(&self, group: &str) -> bool {
        self.kindle_fingerprint.is_match(group).unwrap_or(false)
    }

    fn linux(&self, group: &str, ua: &str) -> Os {
        let android_version = || version_after(group, "android ").unwrap_or_default();

        // Fire OS reports its Android base version, but is named Kindle.
        if ua.contains("kindle") || self.is_kindle_device(group) {
            return Os::new(Platform::Linux, OsName::Kindle, android_version());
        }
        if contains_any(ua, &["android", "googletv"]) {
            return Os::new(Platform::Linux, OsName::Android, android_version());
        }
        if ua.contains("cros") {
            return Os::new(Platform::Linux, OsName::ChromeOS, Version::ZERO);
        }
        if contains_any(ua, &["webos", "hpwos"]) {
            return Os::new(Platform::Linux, OsName::WebOS, Version::ZERO);
        }
        Os::new(Platform::Linux, OsName::Linux, Version::ZERO)
    }
}

/// Returns the contents of the first balanced parenthetical group in `ua`.
///
/// Falls back to the whole string when there is no `(`, or when a `)` shows up
/// before the first `(`. An unclosed group runs to the end of the string.
pub(crate) fn platform_group(ua: &str) -> &str {
    let Some(open) = ua.find('(') else {
        return ua;
    };
    if ua.find(')').is_some_and(|close| close < open) {
        return ua;
    }

    let mut depth = 0usize;
    for (at, b) in ua.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return &ua[open + 1..at];
                }
            }
            _ => {}
        }
    }
    &ua[open + 1..]
}

fn blackberry() -> Os {
    Os::new(Platform::Blackberry, OsName::Blackberry, Version::ZERO)
}

fn ios(specs: &str, group: &str) -> Os {
    let platform = match specs {
        "iphone" => Platform::IPhone,
        "ipad" => Platform::IPad,
        _ => Platform::IPod,
    };
    let version = version_after_any(group, &["cpu os ", "iphone os "]).unwrap_or_default();
    Os::new(platform, OsName::IOS, version)
}

fn windows_phone(group: &str) -> Os {
    match version_after(group, "windows phone os ").or_else(|| version_after(group, "windows phone ")) {
        Some(version) => Os::new(Platform::WindowsPhone, OsName::WindowsPhone, version),
        None => Os::new(Platform::WindowsPhone, OsName::Unknown, Version::ZERO),
    }
}

fn windows(ua: &str) -> Os {
    let nt = version_after(ua, "windows nt ");

    // The Xbox reads exactly like desktop Windows apart from its token.
    if ua.contains("xbox") {
        let version = nt.unwrap_or(Version::new(6, 0, 0));
        return Os::new(Platform::Xbox, OsName::Xbox, version);
    }
    match nt {
        Some(version) => Os::new(Platform::Windows, OsName::Windows, version),
        None if ua.contains("windows xp") => {
            Os::new(Platform::Windows, OsName::Windows, Version::new(5, 1, 0))
        }
        None => Os::new(Platform::Windows, OsName::Unknown, Version::ZERO),
    }
}

/// macOS reports `10_x_y`; major is pinned to 10 and the rest shifts down.
fn macintosh(ua: &str) -> Os {
    match version_after(ua, "os x 10_").or_else(|| version_after(ua, "os x 10.")) {
        Some(v) => Os::new(Platform::Mac, OsName::MacOSX, Version::new(10, v.major, v.minor)),
        None => Os::new(Platform::Mac, OsName::Unknown, Version::ZERO),
    }
}
