use crate::prelude::*;

use jukebox::clap::ArgMatches;
use std::ffi::OsStr;
use std::path::Path;

use crate::handle::FileHandle;
use crate::host::HostFile;
use crate::playlist::Playlist;
use crate::scanner::{check_root, next_midi_file_name_from_file, NO_MIDI_FILE};

pub(crate) fn opt_scan(dir: &OsStr, matches: &ArgMatches) -> Result<()> {
    let path = Path::new(dir);
    let passes = matches
        .value_of("loop")
        .map_or(Ok(1), str::parse::<usize>)
        .context("--loop")?;

    let root = HostFile::try_open(path).with_context(|| format!("opening {:?}", path))?;
    check_root(&root)
        .map_err(io::Error::from)
        .with_context(|| format!("{:?} is not a music directory", path))?;

    let played = if matches.is_present("prefixed") {
        play_prefixed(root, passes)?
    } else {
        play(root, passes)
    };

    info!("played {} files from {:?}", played, path);
    Ok(())
}

fn play(root: HostFile, passes: usize) -> usize {
    let dir = match root.into_dir() {
        Some(dir) => dir,
        None => return 0,
    };

    let mut playlist = Playlist::new(dir);
    let mut played = 0;
    while let Some(name) = playlist.next_looping() {
        if playlist.passes() >= passes {
            break;
        }
        println!("{}", name);
        played += 1;
    }
    played
}

fn play_prefixed(mut root: HostFile, passes: usize) -> Result<usize> {
    let mut played = 0;
    for pass in 0..passes {
        trace!("pass {}", pass);
        loop {
            let name = next_midi_file_name_from_file(&mut root);
            if name == NO_MIDI_FILE {
                break;
            }
            println!("{}", name);
            played += 1;
        }
        root.rewind_directory()?;
    }
    Ok(played)
}
