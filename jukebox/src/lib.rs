mod prelude;
pub use anyhow;
pub use chrono;
pub use clap;
pub use fern;
pub use lazy_static;
pub use libc;
pub use log;
pub use syslog;
pub use thiserror;

use crate::prelude::*;

/// Maps an error to a process exit code. The first `io::Error` in the chain decides, its
/// raw os error is passed through, everything else becomes `EXIT_FAILURE`.
pub fn error_to_exitcode(error: &Error) -> i32 {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<io::Error>())
        .map_or(libc::EXIT_FAILURE, |e| {
            e.raw_os_error().unwrap_or(match e.kind() {
                io::ErrorKind::NotFound => libc::ENOENT,
                io::ErrorKind::PermissionDenied => libc::EACCES,
                io::ErrorKind::AlreadyExists => libc::EEXIST,
                _ => libc::EXIT_FAILURE,
            })
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_os_error_passes_through() {
        let err: Error = io::Error::from_raw_os_error(libc::ENOTDIR).into();
        assert_eq!(error_to_exitcode(&err), libc::ENOTDIR);
    }

    #[test]
    fn kind_without_errno() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(error_to_exitcode(&err), libc::ENOENT);
    }

    #[test]
    fn context_keeps_io_error() {
        let err = Err::<(), _>(io::Error::from_raw_os_error(libc::EACCES))
            .context("opening music dir")
            .unwrap_err();
        assert_eq!(error_to_exitcode(&err), libc::EACCES);
    }

    #[test]
    fn other_errors_fail() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(error_to_exitcode(&err), libc::EXIT_FAILURE);
    }
}
