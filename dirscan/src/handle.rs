use crate::prelude::*;

use std::borrow::Cow;

/// An open directory with an embedded, forward only cursor.
pub trait DirHandle {
    /// Moves the cursor to the next entry. Returns `false` once the directory is exhausted
    /// and keeps doing so until rewound.
    fn advance(&mut self) -> io::Result<bool>;

    /// Name of the entry under the cursor, empty before the first successful `advance()`.
    fn file_name(&self) -> Cow<'_, str>;

    /// Restarts the iteration at the first entry.
    fn rewind(&mut self) -> io::Result<()>;
}

/// A file or directory handle which may have failed to open.
pub trait FileHandle: Sized {
    fn is_open(&self) -> bool;

    fn is_directory(&self) -> bool;

    /// The bare name of the file, without any path.
    fn name(&self) -> Cow<'_, str>;

    /// Opens the next child of a directory. Closed handles and regular files have no
    /// children. Children which can't be opened are skipped, `Err` is reserved for failures
    /// of the directory itself.
    fn open_next_file(&mut self) -> io::Result<Option<Self>>;

    fn rewind_directory(&mut self) -> io::Result<()>;
}
