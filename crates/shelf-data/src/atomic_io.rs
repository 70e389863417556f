//! Atomic file replacement inside a capability directory.
//!
//! Writes go to a hidden temporary sibling first and are renamed over the
//! target, so readers only ever see the old or the new contents. Both the
//! shelf registry and the directory-backed store write through here.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` in `dir` with `contents`.
///
/// # Errors
///
/// Returns an I/O error if `file_name` is not a single normal path component
/// or the temporary file cannot be written, synced or renamed. The temporary
/// file is removed on failure.
pub(crate) fn write_atomic(dir: &Dir, file_name: &Utf8Path, contents: &str) -> io::Result<()> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "target must be a single file name",
        ));
    };

    let tmp_name = temp_name_for(target);
    if let Err(err) = write_temp_file(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    if let Err(err) = rename_into_place(dir, &tmp_name, target) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    sync_directory(dir);
    Ok(())
}

fn temp_name_for(target: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

fn sync_directory(dir: &Dir) {
    // Best effort; some platforms cannot sync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}
