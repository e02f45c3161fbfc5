use std::sync::OnceLock;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::browser::BrowserResolver;
use super::device::DeviceResolver;
use super::error::Result;
use super::normalize::with_normalized;
use super::system::SystemResolver;
use super::types::*;

static SHARED: OnceLock<Classifier> = OnceLock::new();

/// Classifies User-Agent strings into browser, operating system and device.
///
/// Building one compiles the signature tables; classification itself only
/// reads them, so a single instance can be shared across threads.
pub struct Classifier {
    system: SystemResolver,
    browser: BrowserResolver,
    device: DeviceResolver,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let classifier = Self {
            system: SystemResolver::new()?,
            browser: BrowserResolver::new()?,
            device: DeviceResolver::new()?,
        };
        debug!(
            crawlers = classifier.browser.crawler_count(),
            device_signatures = classifier.device.signature_count(),
            "user agent classifier ready"
        );
        Ok(classifier)
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static Classifier {
        SHARED.get_or_init(|| Classifier::new().expect("built-in signature tables compile"))
    }

    /// Classify a raw User-Agent header value. Total: unrecognised input
    /// comes back as `Unknown` fields and zero versions.
    pub fn classify(&self, ua: &str) -> Detection {
        with_normalized(ua, |ua| self.classify_normalized(ua))
    }

    /// Classify a batch in parallel. Output order matches input order.
    pub fn classify_all<S>(&self, uas: &[S]) -> Vec<Detection>
    where
        S: AsRef<str> + Sync,
    {
        uas.par_iter().map(|ua| self.classify(ua.as_ref())).collect()
    }

    fn classify_normalized(&self, ua: &str) -> Detection {
        let name = self.browser.resolve_name(ua);
        if name.is_bot() {
            trace!(%name, "crawler");
            return Detection::bot(name);
        }

        let os = self.system.resolve(ua);
        let browser = Browser {
            name,
            version: self.browser.resolve_version(ua, name, &os),
        };
        let device = self.device.resolve(ua, name, &os);
        trace!(?browser, ?os, %device, "classified");

        Detection {
            browser,
            os,
            device,
        }
    }
}

/// Classify with the process-wide [`Classifier`].
pub fn classify(ua: &str) -> Detection {
    Classifier::shared().classify(ua)
}
