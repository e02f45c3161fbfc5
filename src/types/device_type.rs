named_enum! {
    /// Device category the User-Agent runs on.
    pub enum DeviceType as "device type" {
        #[default]
        Unknown => "unknown",
        Computer => "computer",
        Tablet => "tablet",
        Phone => "phone",
        Console => "console",
        Wearable => "wearable",
        Tv => "tv",
    }
}
