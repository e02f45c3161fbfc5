named_enum! {
    /// Kernel or hardware family underneath the operating system.
    pub enum Platform as "platform" {
        #[default]
        Unknown => "unknown",
        Windows => "windows",
        Mac => "mac",
        Linux => "linux",
        IPad => "ipad",
        IPhone => "iphone",
        IPod => "ipod",
        Blackberry => "blackberry",
        WindowsPhone => "windowsphone",
        Playstation => "playstation",
        Xbox => "xbox",
        Nintendo => "nintendo",
        /// Sentinel for crawlers.
        Bot => "bot",
    }
}
