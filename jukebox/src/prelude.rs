#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};

#[allow(unused_imports)]
pub use anyhow::{bail, ensure, Context, Error, Result};

pub use std::io;
