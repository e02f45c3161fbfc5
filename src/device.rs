//! Device category, derived from the UA together with the resolved browser
//! and system.

use crate::error::Result;
use crate::rules::contains_any;
use crate::signatures::SignatureSet;
use crate::types::{BrowserName, DeviceType, Os, OsName, Platform};

const TV_TOKENS: &[&str] = &[
    "tv", "crkey", "googletv", "aftb", "aftt", "aftm", "adt-", "roku", "viera", "aquos", "dtv",
    "appletv", "smarttv", "tuner", "smart-tv", "hbbtv", "netcast", "vizio", "x88",
];

/// Android models that are tablets despite sending "mobile".
const ANDROID_TABLET_MODELS: &[&str] = &[
    "nexus 7",
    "nexus 9",
    "nexus 10",
    "xoom",
    "sm-t",
    // Fire tablets whose model code closes the system clause, e.g.
    // "(linux; android 4.4.3; kfthwi)", which the Kindle fingerprint misses.
    "; kf",
    "lenovo tab",
];

/// Amazon Fire Phone; every other Kindle device is a tablet or e-reader.
const FIRE_PHONE: &str = "sd4930ur";

pub(crate) struct DeviceResolver {
    tv: SignatureSet<DeviceType>,
    android_tablets: SignatureSet<DeviceType>,
}

impl DeviceResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tv: SignatureSet::build([(TV_TOKENS, DeviceType::Tv)])?,
            android_tablets: SignatureSet::build([(ANDROID_TABLET_MODELS, DeviceType::Tablet)])?,
        })
    }

    pub fn signature_count(&self) -> usize {
        TV_TOKENS.len() + ANDROID_TABLET_MODELS.len()
    }

    /// Ordered cascade; the first rule that holds decides. `ua` must be
    /// normalized.
    pub fn resolve(&self, ua: &str, browser: BrowserName, os: &Os) -> DeviceType {
        use Platform as P;

        if matches!(os.platform, P::Playstation | P::Xbox | P::Nintendo)
            || contains_any(ua, &["nintendo", "xbox", "playstation"])
        {
            return DeviceType::Console;
        }
        if matches!(os.platform, P::Windows | P::Mac) || os.name == OsName::ChromeOS {
            // Windows RT and touch laptops.
            return if contains_any(ua, &["mobile", "touch"]) {
                DeviceType::Tablet
            } else {
                DeviceType::Computer
            };
        }
        if matches!(os.platform, P::IPad | P::IPod)
            || contains_any(ua, &["tablet", "kindle/", "playbook"])
        {
            return DeviceType::Tablet;
        }
        if matches!(os.platform, P::IPhone | P::Blackberry) || ua.contains("phone") {
            return DeviceType::Phone;
        }
        if let Some(&tv) = self.tv.match_first(ua) {
            return tv;
        }
        if os.name == OsName::Android {
            return self.android(ua, os);
        }
        if contains_any(ua, &["glass", "watch", "sm-v"]) {
            return DeviceType::Wearable;
        }
        // Kindle Fire tablets say "mobile" too, so this precedes the phone check.
        if browser == BrowserName::Silk || (os.name == OsName::Kindle && !ua.contains(FIRE_PHONE)) {
            return DeviceType::Tablet;
        }
        if contains_any(ua, &["mobile", "touch", " mobi", "webos"]) {
            return DeviceType::Phone;
        }
        if os.name == OsName::Linux {
            return if ua.contains("bravia") {
                DeviceType::Tv
            } else {
                DeviceType::Computer
            };
        }
        DeviceType::Unknown
    }

    /// Android tablets should leave out "mobile", but plenty of them don't.
    /// When still in doubt, it's a phone.
    fn android(&self, ua: &str, os: &Os) -> DeviceType {
        if let Some(&tablet) = self.android_tablets.match_first(ua) {
            return tablet;
        }
        if ua.contains("mobile") {
            return DeviceType::Phone;
        }
        // Honeycomb only ever shipped on tablets.
        if os.version.major == 3 || contains_any(ua, &[" tab", "pad"]) {
            return DeviceType::Tablet;
        }
        if ua.contains("nexus player") {
            return DeviceType::Console;
        }
        DeviceType::Phone
    }
}
