#[allow(unused_imports)]
pub use jukebox::log::{debug, error, info, trace, warn};

#[allow(unused_imports)]
pub use anyhow::{Context, Error, Result};
pub use thiserror::Error;

pub use std::io;

pub use crate::errors::ScanError;
