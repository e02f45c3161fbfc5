use serde::{Deserialize, Serialize};

use super::{BrowserName, DeviceType, OsName, Platform, Version};

/// Everything learned from one User-Agent string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detection {
    pub browser: Browser,
    pub os: Os,
    pub device: DeviceType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Browser {
    pub name: BrowserName,
    pub version: Version,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Os {
    pub platform: Platform,
    pub name: OsName,
    pub version: Version,
}

impl Os {
    pub const fn new(platform: Platform, name: OsName, version: Version) -> Self {
        Self {
            platform,
            name,
            version,
        }
    }
}

impl Detection {
    /// Result reported for any crawler: bot platform and os, a computer
    /// device, no versions.
    pub fn bot(name: BrowserName) -> Self {
        Self {
            browser: Browser {
                name,
                version: Version::ZERO,
            },
            os: Os::new(Platform::Bot, OsName::Bot, Version::ZERO),
            device: DeviceType::Computer,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.browser.name.is_bot() || self.os.name == OsName::Bot || self.os.platform == Platform::Bot
    }
}
