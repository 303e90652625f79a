use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PLAYLIST_FILENAME: &str = "SmoothStreamsTV.m3u8";

/// Write the playlist into the current working directory, replacing any
/// previous file, and return the absolute path of the result.
pub fn write_playlist(contents: &str) -> Result<PathBuf> {
    let dir = std::env::current_dir().context("could not determine the working directory")?;
    write_playlist_in(&dir, contents)
}

fn write_playlist_in(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join(PLAYLIST_FILENAME);
    let mut file =
        File::create(&path).with_context(|| format!("could not create {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("could not write {}", path.display()))?;
    // sync_all confirms the write actually reached the file system
    file.sync_all()
        .with_context(|| format!("could not flush {}", path.display()))?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}
