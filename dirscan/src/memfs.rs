//! In-memory volume.
//!
//! Behaves like the small flash filesystems a jukebox boots from: directories list their
//! entries in creation order, handles to missing paths are closed instead of failing.

use crate::prelude::*;

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::handle::{DirHandle, FileHandle};

#[derive(Debug)]
enum Entry {
    File,
    Directory { children: Vec<String> },
}

#[derive(Debug)]
pub struct MemFs {
    entries: HashMap<PathBuf, Entry>,
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemFs {
    /// Creates an empty volume, only the root directory exists.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            PathBuf::new(),
            Entry::Directory {
                children: Vec::new(),
            },
        );
        MemFs { entries }
    }

    /// Strips the root, resolves `.` and `..`.
    fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
        let mut result = PathBuf::new();
        for component in path.as_ref().components() {
            match component {
                Component::ParentDir => {
                    result.pop();
                }
                Component::Normal(name) => result.push(name),
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        result
    }

    /// Links a new entry into its parent directory, the parent must exist.
    fn insert(&mut self, path: PathBuf, entry: Entry) -> io::Result<()> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::AlreadyExists, "root exists"))?;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));

        match self.entries.get_mut(parent) {
            Some(Entry::Directory { children }) => children.push(name),
            Some(Entry::File) => {
                return Err(io::Error::from_raw_os_error(libc::ENOTDIR));
            }
            None => return Err(io::Error::from_raw_os_error(libc::ENOENT)),
        }
        self.entries.insert(path, entry);
        Ok(())
    }

    /// Creates a directory and all its missing parents.
    pub fn create_dir_all<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let mut current = PathBuf::new();
        for component in Self::normalize(path).components() {
            current.push(component);
            match self.entries.get(&current) {
                Some(Entry::Directory { .. }) => {}
                Some(Entry::File) => {
                    return Err(io::Error::from_raw_os_error(libc::ENOTDIR));
                }
                None => self.insert(
                    current.clone(),
                    Entry::Directory {
                        children: Vec::new(),
                    },
                )?,
            }
        }
        Ok(())
    }

    /// Creates an empty file, parent directories are created as needed. An existing file is
    /// left in place.
    pub fn create_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let path = Self::normalize(path);
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }

        match self.entries.get(&path) {
            Some(Entry::File) => Ok(()),
            Some(Entry::Directory { .. }) => Err(io::Error::from_raw_os_error(libc::EISDIR)),
            None => self.insert(path, Entry::File),
        }
    }

    fn child(&self, dir: &Path, index: usize) -> Option<&str> {
        match self.entries.get(dir) {
            Some(Entry::Directory { children }) => children.get(index).map(String::as_str),
            _ => None,
        }
    }

    /// Opens a directory for iteration.
    pub fn open_dir<P: AsRef<Path>>(&self, path: P) -> io::Result<MemDir<'_>> {
        let path = Self::normalize(path);
        match self.entries.get(&path) {
            Some(Entry::Directory { .. }) => Ok(MemDir {
                fs: self,
                path,
                cursor: 0,
                current: None,
            }),
            Some(Entry::File) => Err(io::Error::from_raw_os_error(libc::ENOTDIR)),
            None => Err(io::Error::from_raw_os_error(libc::ENOENT)),
        }
    }

    /// Opens a file or directory. A missing path yields a closed handle.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> MemFile<'_> {
        let path = Self::normalize(path);
        let path = if self.entries.contains_key(&path) {
            Some(path)
        } else {
            debug!("no such file: {:?}", path);
            None
        };
        MemFile {
            fs: self,
            path,
            cursor: 0,
        }
    }
}

/// Directory cursor on a `MemFs`.
#[derive(Debug)]
pub struct MemDir<'a> {
    fs: &'a MemFs,
    path: PathBuf,
    cursor: usize,
    current: Option<&'a str>,
}

impl DirHandle for MemDir<'_> {
    fn advance(&mut self) -> io::Result<bool> {
        self.current = self.fs.child(&self.path, self.cursor);
        if self.current.is_some() {
            self.cursor += 1;
        }
        Ok(self.current.is_some())
    }

    fn file_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.current.unwrap_or(""))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.cursor = 0;
        self.current = None;
        Ok(())
    }
}

/// File or directory handle on a `MemFs`, `path` is `None` when closed.
#[derive(Debug)]
pub struct MemFile<'a> {
    fs: &'a MemFs,
    path: Option<PathBuf>,
    cursor: usize,
}

impl FileHandle for MemFile<'_> {
    fn is_open(&self) -> bool {
        self.path.is_some()
    }

    fn is_directory(&self) -> bool {
        matches!(
            self.path.as_ref().and_then(|path| self.fs.entries.get(path)),
            Some(Entry::Directory { .. })
        )
    }

    fn name(&self) -> Cow<'_, str> {
        match self.path.as_ref().and_then(|path| path.file_name()) {
            Some(name) => name.to_string_lossy(),
            None if self.is_open() => Cow::Borrowed("/"),
            None => Cow::Borrowed(""),
        }
    }

    fn open_next_file(&mut self) -> io::Result<Option<Self>> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(None),
        };

        match self.fs.child(path, self.cursor) {
            Some(name) => {
                self.cursor += 1;
                Ok(Some(self.fs.open(path.join(name))))
            }
            None => Ok(None),
        }
    }

    fn rewind_directory(&mut self) -> io::Result<()> {
        self.cursor = 0;
        Ok(())
    }
}
