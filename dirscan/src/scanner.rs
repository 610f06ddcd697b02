/*!
Fetching the names of MIDI files one at a time.

Two flavors exist for the two kinds of handles a filesystem hands out. They signal the end of
a directory with different sentinels and format names differently; callers compare against
the sentinel they expect.
*/

use crate::prelude::*;

use crate::handle::{DirHandle, FileHandle};

/// Returned by `next_midi_file_name()` once the directory is exhausted.
pub const NO_MORE_MIDI_FILE_IN_DIR: &str = "NoMoreMidiFileInDir";

/// Returned by `next_midi_file_name_from_file()` once the directory is exhausted.
pub const NO_MIDI_FILE: &str = "NoMidiFile";

/// Prefixed to names returned by `next_midi_file_name_from_file()`.
pub const PATH_PREFIX: &str = "//";

/// True for either sentinel.
pub fn is_sentinel(name: &str) -> bool {
    name == NO_MORE_MIDI_FILE_IN_DIR || name == NO_MIDI_FILE
}

/// Checks that `root` is open and a directory.
pub fn check_root<F: FileHandle>(root: &F) -> Result<(), ScanError> {
    if !root.is_open() {
        return Err(ScanError::NotOpen);
    }
    if !root.is_directory() {
        return Err(ScanError::NotADirectory(root.name().into_owned()));
    }
    Ok(())
}

/// Like `check_root()` but only logs the failure.
pub fn validate_root<F: FileHandle>(root: &F) -> bool {
    match check_root(root) {
        Ok(()) => true,
        Err(err) => {
            error!("{}", err);
            false
        }
    }
}

/// Advances the cursor of `dir` and returns the bare name of the entry, or
/// `NO_MORE_MIDI_FILE_IN_DIR`.
pub fn next_midi_file_name<D: DirHandle>(dir: &mut D) -> String {
    match dir.advance() {
        Ok(true) => dir.file_name().into_owned(),
        Ok(false) => NO_MORE_MIDI_FILE_IN_DIR.to_owned(),
        Err(err) => {
            warn!("reading directory failed: {}", err);
            NO_MORE_MIDI_FILE_IN_DIR.to_owned()
        }
    }
}

/// Opens the next child of `file` and returns its name prefixed with `PATH_PREFIX`, or
/// `NO_MIDI_FILE`. The child handle is closed again before returning.
pub fn next_midi_file_name_from_file<F: FileHandle>(file: &mut F) -> String {
    let midi_file = match file.open_next_file() {
        Ok(Some(midi_file)) if midi_file.is_open() => midi_file,
        Ok(_) => return NO_MIDI_FILE.to_owned(),
        Err(err) => {
            warn!("opening next file failed: {}", err);
            return NO_MIDI_FILE.to_owned();
        }
    };

    let name = midi_file.name();
    info!("MIDI file: {}", name);
    format!("{}{}", PATH_PREFIX, name)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memfs::MemFs;
    use std::borrow::Cow;

    fn music_fs() -> MemFs {
        let mut fs = MemFs::new();
        fs.create_file("/midi/wonderwall.mid").unwrap();
        fs.create_file("/midi/africa.mid").unwrap();
        fs.create_file("/midi/zombie.mid").unwrap();
        fs.create_dir_all("/empty").unwrap();
        fs
    }

    #[test]
    fn closed_root_is_invalid() {
        let fs = music_fs();
        let root = fs.open("/nonexistent");
        assert!(!validate_root(&root));
        assert!(matches!(check_root(&root), Err(ScanError::NotOpen)));
    }

    #[test]
    fn file_root_is_invalid() {
        let fs = music_fs();
        let root = fs.open("/midi/africa.mid");
        assert!(!validate_root(&root));
        match check_root(&root) {
            Err(ScanError::NotADirectory(name)) => assert_eq!(name, "africa.mid"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn directory_root_is_valid() {
        let fs = music_fs();
        assert!(validate_root(&fs.open("/midi")));
        assert!(validate_root(&fs.open("/")));
    }

    #[test]
    fn dir_names_in_filesystem_order() {
        let fs = music_fs();
        let mut dir = fs.open_dir("/midi").unwrap();
        assert_eq!(next_midi_file_name(&mut dir), "wonderwall.mid");
        assert_eq!(next_midi_file_name(&mut dir), "africa.mid");
        assert_eq!(next_midi_file_name(&mut dir), "zombie.mid");
        assert_eq!(next_midi_file_name(&mut dir), NO_MORE_MIDI_FILE_IN_DIR);
        assert_eq!(next_midi_file_name(&mut dir), NO_MORE_MIDI_FILE_IN_DIR);
    }

    #[test]
    fn empty_dir_is_exhausted_at_once() {
        let fs = music_fs();
        let mut dir = fs.open_dir("/empty").unwrap();
        assert_eq!(next_midi_file_name(&mut dir), NO_MORE_MIDI_FILE_IN_DIR);
    }

    #[test]
    fn file_names_are_prefixed() {
        let fs = music_fs();
        let mut root = fs.open("/midi");
        assert_eq!(next_midi_file_name_from_file(&mut root), "//wonderwall.mid");
        assert_eq!(next_midi_file_name_from_file(&mut root), "//africa.mid");
        assert_eq!(next_midi_file_name_from_file(&mut root), "//zombie.mid");
        assert_eq!(next_midi_file_name_from_file(&mut root), NO_MIDI_FILE);
        assert_eq!(next_midi_file_name_from_file(&mut root), NO_MIDI_FILE);
    }

    #[test]
    fn subdirectories_are_entries_too() {
        let fs = music_fs();
        let mut root = fs.open("/");
        assert_eq!(next_midi_file_name_from_file(&mut root), "//midi");
        assert_eq!(next_midi_file_name_from_file(&mut root), "//empty");
        assert_eq!(next_midi_file_name_from_file(&mut root), NO_MIDI_FILE);
    }

    #[test]
    fn no_children_without_directory() {
        let fs = music_fs();
        assert_eq!(
            next_midi_file_name_from_file(&mut fs.open("/nonexistent")),
            NO_MIDI_FILE
        );
        assert_eq!(
            next_midi_file_name_from_file(&mut fs.open("/midi/zombie.mid")),
            NO_MIDI_FILE
        );
    }

    #[test]
    fn sentinels() {
        assert!(is_sentinel(NO_MORE_MIDI_FILE_IN_DIR));
        assert!(is_sentinel(NO_MIDI_FILE));
        assert!(!is_sentinel("//NoMidiFile"));
        assert!(!is_sentinel("africa.mid"));
    }

    /// A directory whose device fails on every read.
    struct BrokenDir;

    impl DirHandle for BrokenDir {
        fn advance(&mut self) -> io::Result<bool> {
            Err(io::Error::from_raw_os_error(libc::EIO))
        }

        fn file_name(&self) -> Cow<'_, str> {
            Cow::Borrowed("garbage.mid")
        }

        fn rewind(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// An open directory whose device fails on every read.
    struct BrokenFile;

    impl FileHandle for BrokenFile {
        fn is_open(&self) -> bool {
            true
        }

        fn is_directory(&self) -> bool {
            true
        }

        fn name(&self) -> Cow<'_, str> {
            Cow::Borrowed("midi")
        }

        fn open_next_file(&mut self) -> io::Result<Option<Self>> {
            Err(io::Error::from_raw_os_error(libc::EIO))
        }

        fn rewind_directory(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dir_read_error_ends_the_directory() {
        let mut dir = BrokenDir;
        assert_eq!(next_midi_file_name(&mut dir), NO_MORE_MIDI_FILE_IN_DIR);
        assert_eq!(next_midi_file_name(&mut dir), NO_MORE_MIDI_FILE_IN_DIR);
    }

    #[test]
    fn file_read_error_ends_the_directory() {
        let mut root = BrokenFile;
        assert!(validate_root(&root));
        assert_eq!(next_midi_file_name_from_file(&mut root), NO_MIDI_FILE);
        assert_eq!(next_midi_file_name_from_file(&mut root), NO_MIDI_FILE);
    }
}
