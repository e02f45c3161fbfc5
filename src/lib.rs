mod browser;
mod classifier;
mod device;
mod error;
mod normalize;
mod rules;
mod scan;
mod signatures;
mod system;
mod types;

pub use classifier::{classify, Classifier};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use types::*;
