//! Moving a screenshot into its game folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::AppId;
use crate::error::RelocateError;
use crate::sanitize::folder_name;

/// What happened to a file handed to [`relocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    /// The file was moved to this path
    Moved(PathBuf),
    /// The file already sits at its destination; nothing was done
    AlreadyInPlace(PathBuf),
}

impl Relocation {
    pub fn destination(&self) -> &Path {
        match self {
            Relocation::Moved(p) | Relocation::AlreadyInPlace(p) => p,
        }
    }
}

/// Compute where a screenshot belongs without touching the filesystem.
///
/// `<root>/<folder name>/<original file name>`
pub fn plan_destination(
    source: &Path,
    game_name: &str,
    app_id: AppId,
    root: &Path,
) -> Result<PathBuf, RelocateError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| RelocateError::NoFileName(source.to_path_buf()))?;
    Ok(root.join(folder_name(game_name, app_id)).join(file_name))
}

/// Move `source` into the folder for `game_name` under `root`.
///
/// The game folder is created if needed. An existing file at the destination
/// is overwritten.
pub fn relocate(
    source: &Path,
    game_name: &str,
    app_id: AppId,
    root: &Path,
) -> Result<Relocation, RelocateError> {
    let destination = plan_destination(source, game_name, app_id, root)?;

    if !source.is_file() {
        return Err(RelocateError::SourceMissing(source.to_path_buf()));
    }
    if destination == source {
        return Ok(Relocation::AlreadyInPlace(destination));
    }

    if let Some(dir) = destination.parent() {
        fs::create_dir_all(dir).map_err(|e| RelocateError::CreateDir {
            dir: dir.to_path_buf(),
            source: e,
        })?;
    }

    move_file(source, &destination).map_err(|e| RelocateError::Move {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: e,
    })?;

    log::debug!("Moved {} -> {}", source.display(), destination.display());
    Ok(Relocation::Moved(destination))
}

/// Rename, falling back to copy + remove when crossing filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!("{} is on another device, copying instead", to.display());
            copy_then_remove(from, to)
        }
        Err(e) => Err(e),
    }
}

/// Copy over any existing file at `to`, then delete `from`.
///
/// `from` is only removed once the copy succeeded.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    copy_then_remove_with(from, to, |p| fs::remove_file(p))
}

/// If `from` can't be removed, the copy at `to` is removed again so the
/// screenshot stays in one place. When that fails too, the error says so.
fn copy_then_remove_with(
    from: &Path,
    to: &Path,
    remove: impl Fn(&Path) -> io::Result<()>,
) -> io::Result<()> {
    fs::copy(from, to)?;
    let Err(e) = remove(from) else {
        return Ok(());
    };
    match remove(to) {
        Ok(()) => Err(e),
        Err(undo) => Err(io::Error::new(
            e.kind(),
            format!(
                "copied to {} but could not remove the original ({e}) or the copy \
                 ({undo}); the file now exists in both places",
                to.display()
            ),
        )),
    }
}

#[cfg(test)]
#[path = "tests/relocate_tests.rs"]
mod tests;
