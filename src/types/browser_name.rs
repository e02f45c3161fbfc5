named_enum! {
    /// Browser (or, for the trailing range, crawler) identity.
    ///
    /// Variants from [`BrowserName::Bot`] through [`BrowserName::YahooBot`]
    /// form a contiguous block; [`BrowserName::is_bot`] is a range check on it.
    /// Keep new crawlers inside that block and new browsers above it.
    pub enum BrowserName as "browser" {
        #[default]
        Unknown => "unknown",
        Chrome => "chrome",
        /// Internet Explorer and every flavour of Edge.
        IE => "ie",
        Safari => "safari",
        Firefox => "firefox",
        /// Stock Android WebView browser (pre-Chromium).
        Android => "android",
        Opera => "opera",
        Blackberry => "blackberry",
        UCBrowser => "ucbrowser",
        Silk => "silk",
        Nokia => "nokia",
        NetFront => "netfront",
        QQ => "qq",
        Maxthon => "maxthon",
        SogouExplorer => "sogouexplorer",
        Spotify => "spotify",
        Nintendo => "nintendo",
        Samsung => "samsung",
        Yandex => "yandex",
        CocCoc => "coccoc",
        Outlook => "outlook",
        Superhuman => "superhuman",
        Bot => "bot",
        AppleBot => "applebot",
        BaiduBot => "baidubot",
        BingBot => "bingbot",
        DuckDuckGoBot => "duckduckgobot",
        FacebookBot => "facebookbot",
        GoogleBot => "googlebot",
        LinkedInBot => "linkedinbot",
        MsnBot => "msnbot",
        PingdomBot => "pingdombot",
        TwitterBot => "twitterbot",
        YandexBot => "yandexbot",
        CocCocBot => "coccocbot",
        YahooBot => "yahoobot",
    }
}

impl BrowserName {
    pub fn is_bot(&self) -> bool {
        (Self::Bot as u8..=Self::YahooBot as u8).contains(&(*self as u8))
    }
}
