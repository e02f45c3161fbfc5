//! Browser identity and version.

use tracing::trace;

use crate::error::Result;
use crate::rules::{contains_any, first_match, Rule};
use crate::scan::{version_after, version_after_any};
use crate::signatures::SignatureSet;
use crate::types::{BrowserName, Os, OsName, Version};

/// Antivirus link scanner that sends a stock desktop Chrome UA with its
/// vendor appended.
const LINK_SCANNER_UA: &str = "mozilla/5.0 (windows nt 10.0; win64; x64) applewebkit/537.36 \
     (khtml, like gecko) chrome/70.0.3538.110 safari/537.36 kasperskylab";

const BLACKBERRY_TOKENS: &[&str] = &["blackberry", "playbook", "bb10", "rim "];

/// Engines that build on WebKit/Blink. Anything claiming Chrome has to be
/// ruled out before the Chrome family, and Safari is what is left over.
const WEBKIT_RULES: &[(Rule, BrowserName)] = &[
    (Rule::Any(&["applebot"]), BrowserName::AppleBot),
    (Rule::Any(&["googlebot"]), BrowserName::GoogleBot),
    (Rule::Any(&["qq/", "qqbrowser/"]), BrowserName::QQ),
    (Rule::Any(&["opr/", "opios/"]), BrowserName::Opera),
    (Rule::Any(&["silk/"]), BrowserName::Silk),
    (
        Rule::Any(&["edg/", "edgios/", "edga/", "edge/", "iemobile/", "msie "]),
        BrowserName::IE,
    ),
    (Rule::Any(&["ucbrowser/", "ucweb/"]), BrowserName::UCBrowser),
    (Rule::Any(&["nintendobrowser/"]), BrowserName::Nintendo),
    (Rule::Any(&["samsungbrowser/"]), BrowserName::Samsung),
    (Rule::Any(&["coc_coc_browser/"]), BrowserName::CocCoc),
    (Rule::Any(&["yabrowser/"]), BrowserName::Yandex),
    (
        Rule::Any(&["chrome/", "crios/", "chromium/", "crmo/"]),
        BrowserName::Chrome,
    ),
    (Rule::Test(is_android_webview), BrowserName::Android),
    (Rule::Any(&["fxios"]), BrowserName::Firefox),
    (Rule::Any(&[" spotify/"]), BrowserName::Spotify),
    (Rule::Test(is_pure_safari), BrowserName::Safari),
    // iOS apps embedding the system WebView often drop the safari token.
    (Rule::Any(&["iphone", "ipad"]), BrowserName::Safari),
    (Rule::Any(&[" gsa/"]), BrowserName::Safari),
];

const NON_WEBKIT_RULES: &[(Rule, BrowserName)] = &[
    (Rule::Any(&["qqbrowser"]), BrowserName::QQ),
    (Rule::Any(&["msie", "trident"]), BrowserName::IE),
    (Rule::Test(is_gecko_family), BrowserName::Firefox),
    (Rule::Any(&["presto", "opera"]), BrowserName::Opera),
    (Rule::Any(&["ucbrowser"]), BrowserName::UCBrowser),
];

const CRAWLERS: &[(&[&str], BrowserName)] = &[
    (&["applebot"], BrowserName::AppleBot),
    (&["baiduspider"], BrowserName::BaiduBot),
    (&["adidxbot", "bingbot", "bingpreview"], BrowserName::BingBot),
    (&["duckduckbot"], BrowserName::DuckDuckGoBot),
    (&["facebot", "facebookexternalhit"], BrowserName::FacebookBot),
    (&["googlebot"], BrowserName::GoogleBot),
    (&["linkedinbot"], BrowserName::LinkedInBot),
    (&["msnbot"], BrowserName::MsnBot),
    (&["pingdom.com_bot"], BrowserName::PingdomBot),
    (&["twitterbot"], BrowserName::TwitterBot),
    (&["yandex", "yadirectfetcher"], BrowserName::YandexBot),
    (&["yahoo"], BrowserName::YahooBot),
    (&["coccocbot"], BrowserName::CocCocBot),
    (
        &[
            "phantomjs",
            "pinterest",
            "adsbot",
            "slackbot",
            "seekport",
            "ahrefsbot",
            "go-http-client",
        ],
        BrowserName::Bot,
    ),
];

const MAIL_CLIENTS: &[(Rule, BrowserName)] = &[
    (Rule::Any(&["microsoft outlook"]), BrowserName::Outlook),
    (Rule::Any(&["superhuman"]), BrowserName::Superhuman),
];

/// Pre-Chromium Android browser. Modern WebViews carry `chrome/` and are
/// reported as Chrome.
fn is_android_webview(ua: &str) -> bool {
    ua.contains("android")
        && !ua.contains("chrome/")
        && ua.contains("version/")
        && !ua.contains("like android")
}

/// Lots of WebKit shells append `like gecko ... safari/x`; real Safari adds
/// nothing else recognisable.
fn is_pure_safari(ua: &str) -> bool {
    ua.contains("like gecko")
        && ua.contains("mozilla/")
        && ua.contains("safari/")
        && !contains_any(ua, &["linux", "android", "browser/", "os/", "yabrowser/"])
}

fn is_gecko_family(ua: &str) -> bool {
    ua.contains("gecko") && contains_any(ua, &["firefox", "iceweasel", "seamonkey", "icecat"])
}

pub(crate) struct BrowserResolver {
    crawlers: SignatureSet<BrowserName>,
}

impl BrowserResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            crawlers: SignatureSet::build(CRAWLERS.iter().copied())?,
        })
    }

    pub fn crawler_count(&self) -> usize {
        self.crawlers.len()
    }

    /// Identifies the browser or crawler. `ua` must be normalized.
    pub fn resolve_name(&self, ua: &str) -> BrowserName {
        if ua == LINK_SCANNER_UA || ua.contains("autopilot") {
            return BrowserName::Bot;
        }
        // BlackBerry UAs read as MSIE or Safari further down.
        if contains_any(ua, BLACKBERRY_TOKENS) {
            return BrowserName::Blackberry;
        }
        if ua.contains("applewebkit") {
            if let Some(name) = first_match(WEBKIT_RULES, ua) {
                return name;
            }
            trace!("webkit ua fell through to legacy cascade");
        }
        first_match(NON_WEBKIT_RULES, ua)
            .or_else(|| self.crawlers.match_first(ua).copied())
            .or_else(|| first_match(MAIL_CLIENTS, ua))
            .unwrap_or_default()
    }

    /// Extracts the version of an already identified browser.
    pub fn resolve_version(&self, ua: &str, name: BrowserName, os: &Os) -> Version {
        // Android OEMs stick `version/` onto Chrome UAs.
        if name != BrowserName::Chrome {
            if let Some(version) = version_after(ua, "version/") {
                return version;
            }
        }

        use BrowserName::*;
        let found = match name {
            Chrome => version_after_any(ua, &["chrome/", "crios/", "crmo/"]),
            IE => version_after_any(ua, &["msie ", "edge/", "edgios/", "edga/", "edg/"])
                .or_else(|| trident_as_msie(ua)),
            Firefox => version_after_any(ua, &["firefox/", "fxios/"]),
            Safari => safari_from_os(os),
            UCBrowser => version_after(ua, "ucbrowser/"),
            Opera => version_after(ua, "opr/")
                .or_else(|| version_after(ua, "opios/"))
                .or_else(|| version_after(ua, "opera/")),
            Silk => version_after(ua, "silk/"),
            Spotify => version_after(ua, "spotify/"),
            Yandex => version_after(ua, "yabrowser/"),
            QQ => version_after(ua, "qqbrowser/").or_else(|| version_after(ua, "qq/")),
            CocCoc => version_after(ua, "coc_coc_browser/"),
            Samsung => version_after(ua, "samsungbrowser/"),
            Nintendo => version_after(ua, "nintendobrowser/"),
            Outlook => version_after(ua, "microsoft outlook "),
            Superhuman => version_after(ua, "superhuman/"),
            Unknown | Android | Blackberry | Nokia | NetFront | Maxthon | SogouExplorer => None,
            Bot | AppleBot | BaiduBot | BingBot | DuckDuckGoBot | FacebookBot | GoogleBot
            | LinkedInBot | MsnBot | PingdomBot | TwitterBot | YandexBot | CocCocBot
            | YahooBot => None,
        };
        found.unwrap_or_default()
    }
}

/// Trident 3 through 7 shipped with MSIE 7 through 11.
fn trident_as_msie(ua: &str) -> Option<Version> {
    version_after(ua, "trident/")
        .filter(|v| (3..=7).contains(&v.major))
        .map(|v| Version::new(v.major + 4, v.minor, v.patch))
}

/// iOS Safari tracks the OS release; the first three releases lagged by one.
fn safari_from_os(os: &Os) -> Option<Version> {
    if os.name != OsName::IOS {
        return None;
    }
    let v = os.version;
    match v.major {
        0 => None,
        1..=3 => Some(Version::new(v.major + 1, v.minor, v.patch)),
        _ => Some(v),
    }
}
