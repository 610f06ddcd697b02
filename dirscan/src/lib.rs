use jukebox::clap::ArgMatches;

mod optargs;
pub use self::optargs::optargs;

mod errors;
mod prelude;
use crate::prelude::*;

mod handle;
pub mod host;
pub mod memfs;
pub mod playlist;
mod scan;
pub mod scanner;

pub use self::errors::ScanError;
pub use self::handle::{DirHandle, FileHandle};

pub fn cmd(matches: &ArgMatches) -> Result<()> {
    let dir = matches
        .value_of_os("DIRECTORY")
        .ok_or_else(|| io::Error::from_raw_os_error(libc::EINVAL))?;

    trace!("dir: {:?}", dir);

    scan::opt_scan(dir, matches)
}
