use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scan;

/// A `major.minor.patch` triple. The all-zero value means "unknown".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Reads the numeric run at the start of `s` (`"10_8_2 like"` gives
    /// `10.8.2`). Never fails: input without leading digits is `ZERO`.
    pub fn parse(s: &str) -> Self {
        scan::leading_version(s).map_or(Self::ZERO, |(v, _)| v)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Strict parse: the whole string has to be a single version run.
impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match scan::leading_version(s) {
            Some((v, len)) if len == s.len() => Ok(v),
            _ => Err(Error::InvalidVersion(s.to_owned())),
        }
    }
}
