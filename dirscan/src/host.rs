use crate::prelude::*;

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use openat::{Dir, DirIter, Entry};

use crate::handle::{DirHandle, FileHandle};

/// A directory on the host filesystem. The cursor is dropped once exhausted so further
/// `advance()` calls stay `false` until rewound.
pub struct HostDir {
    dir: Dir,
    iter: Option<DirIter>,
    current: Option<Entry>,
}

impl HostDir {
    pub fn open(path: &Path) -> io::Result<HostDir> {
        HostDir::from_dir(Dir::open(path)?)
    }

    fn from_dir(dir: Dir) -> io::Result<HostDir> {
        let iter = dir.list_dir(".")?;
        Ok(HostDir {
            dir,
            iter: Some(iter),
            current: None,
        })
    }
}

impl DirHandle for HostDir {
    fn advance(&mut self) -> io::Result<bool> {
        self.current = None;
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(Ok(entry)) => {
                trace!("entry: {:?}", entry.file_name());
                self.current = Some(entry);
                Ok(true)
            }
            Some(Err(err)) => {
                self.iter = None;
                Err(err)
            }
            None => {
                self.iter = None;
                Ok(false)
            }
        }
    }

    fn file_name(&self) -> Cow<'_, str> {
        self.current
            .as_ref()
            .map_or(Cow::Borrowed(""), |entry| entry.file_name().to_string_lossy())
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.current = None;
        self.iter = Some(self.dir.list_dir(".")?);
        Ok(())
    }
}

/// A file or directory on the host filesystem. Regular files stay open for the lifetime of
/// the handle.
pub enum HostFile {
    Closed,
    Directory { name: String, dir: HostDir },
    Regular { name: String, _file: File },
}

impl HostFile {
    /// Opens `path`, failures are logged and yield a closed handle.
    pub fn open(path: &Path) -> HostFile {
        HostFile::try_open(path).unwrap_or_else(|err| {
            debug!("open {:?}: {}", path, err);
            HostFile::Closed
        })
    }

    pub fn try_open(path: &Path) -> io::Result<HostFile> {
        let name = path
            .file_name()
            .unwrap_or_else(|| path.as_os_str())
            .to_string_lossy()
            .into_owned();

        if std::fs::metadata(path)?.is_dir() {
            Ok(HostFile::Directory {
                name,
                dir: HostDir::open(path)?,
            })
        } else {
            Ok(HostFile::Regular {
                name,
                _file: File::open(path)?,
            })
        }
    }

    fn open_child(parent: &Dir, entry: &Entry) -> io::Result<HostFile> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = Path::new(entry.file_name());

        if parent.metadata(path)?.is_dir() {
            Ok(HostFile::Directory {
                name,
                dir: HostDir::from_dir(parent.sub_dir(path)?)?,
            })
        } else {
            Ok(HostFile::Regular {
                name,
                _file: parent.open_file(path)?,
            })
        }
    }

    /// The directory cursor of a directory handle.
    pub fn into_dir(self) -> Option<HostDir> {
        match self {
            HostFile::Directory { dir, .. } => Some(dir),
            _ => None,
        }
    }
}

impl FileHandle for HostFile {
    fn is_open(&self) -> bool {
        !matches!(self, HostFile::Closed)
    }

    fn is_directory(&self) -> bool {
        matches!(self, HostFile::Directory { .. })
    }

    fn name(&self) -> Cow<'_, str> {
        match self {
            HostFile::Closed => Cow::Borrowed(""),
            HostFile::Directory { name, .. } | HostFile::Regular { name, .. } => {
                Cow::Borrowed(name)
            }
        }
    }

    /// Children which fail to open are logged and skipped, an error means the directory
    /// cursor itself failed.
    fn open_next_file(&mut self) -> io::Result<Option<HostFile>> {
        let dir = match self {
            HostFile::Directory { dir, .. } => dir,
            _ => return Ok(None),
        };

        while dir.advance()? {
            let entry = match &dir.current {
                Some(entry) => entry,
                None => break,
            };
            match HostFile::open_child(&dir.dir, entry) {
                Ok(child) => return Ok(Some(child)),
                Err(err) => warn!("skipping {:?}: {}", entry.file_name(), err),
            }
        }
        Ok(None)
    }

    fn rewind_directory(&mut self) -> io::Result<()> {
        match self {
            HostFile::Directory { dir, .. } => dir.rewind(),
            _ => Ok(()),
        }
    }
}
