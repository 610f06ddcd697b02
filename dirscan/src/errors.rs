use crate::prelude::*;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to open root dir!")]
    NotOpen,

    #[error("Not a directory: {0:?}")]
    NotADirectory(String),
}

impl From<ScanError> for io::Error {
    fn from(err: ScanError) -> io::Error {
        match err {
            ScanError::NotOpen => io::Error::from_raw_os_error(libc::EBADF),
            ScanError::NotADirectory(_) => io::Error::from_raw_os_error(libc::ENOTDIR),
        }
    }
}
