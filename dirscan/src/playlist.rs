use crate::prelude::*;

use crate::handle::DirHandle;
use crate::scanner::{next_midi_file_name, NO_MORE_MIDI_FILE_IN_DIR};

/// The names in a directory as the jukebox plays them.
///
/// Iterating yields a single pass over the directory. `next_looping()` rewinds at the end
/// and starts over, forever, unless the directory turns out to be empty.
pub struct Playlist<D> {
    dir: D,
    played: usize,
    passes: usize,
}

impl<D: DirHandle> Playlist<D> {
    pub fn new(dir: D) -> Self {
        Playlist {
            dir,
            played: 0,
            passes: 0,
        }
    }

    /// Number of completed passes, counted when the directory gets rewound.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Starts the current pass over.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.dir.rewind()?;
        self.played = 0;
        Ok(())
    }

    pub fn next_looping(&mut self) -> Option<String> {
        if let Some(name) = self.next() {
            return Some(name);
        }

        if self.played == 0 {
            debug!("nothing to play");
            return None;
        }

        if let Err(err) = self.rewind() {
            warn!("rewinding playlist failed: {}", err);
            return None;
        }
        self.passes += 1;
        trace!("pass {} done", self.passes);
        self.next()
    }

    pub fn into_inner(self) -> D {
        self.dir
    }
}

impl<D: DirHandle> Iterator for Playlist<D> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let name = next_midi_file_name(&mut self.dir);
        if name == NO_MORE_MIDI_FILE_IN_DIR {
            None
        } else {
            self.played += 1;
            Some(name)
        }
    }
}
