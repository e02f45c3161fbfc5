named_enum! {
    /// Operating system brand. Several of these share a [`Platform`]: Android,
    /// ChromeOS, Kindle and WebOS all run on [`Platform::Linux`].
    ///
    /// [`Platform`]: super::Platform
    /// [`Platform::Linux`]: super::Platform::Linux
    pub enum OsName as "os" {
        #[default]
        Unknown => "unknown",
        WindowsPhone => "windowsphone",
        Windows => "windows",
        MacOSX => "macosx",
        IOS => "ios",
        Android => "android",
        Blackberry => "blackberry",
        ChromeOS => "chromeos",
        Kindle => "kindle",
        WebOS => "webos",
        Linux => "linux",
        Playstation => "playstation",
        Xbox => "xbox",
        Nintendo => "nintendo",
        /// Sentinel for crawlers; never derived from the UA's system clause.
        Bot => "bot",
    }
}
