//! Copies a directory tree into place.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::CopyError;

/// Recursively copy the contents of `src` into `dst`.
///
/// `dst` and any intermediate directories are created. Files already present
/// in `dst` are overwritten; files in `dst` that have no counterpart in `src`
/// are left alone (use [`replace_dir`] to drop them). Symlinks are followed,
/// so linked files land as regular files.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// Returns [`CopyError::NotADirectory`] if `src` is not a directory,
/// [`CopyError::Overlap`] if one path contains the other, [`CopyError::Walk`] if the tree cannot be traversed, or [`CopyError::Io`]
/// on any read, write, or create failure.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<u64, CopyError> {
    check_disjoint(src, dst)?;

    fs::create_dir_all(dst).map_err(|e| CopyError::io(dst, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| CopyError::io(&target, e))?;
            continue;
        }

        debug!("copying: {} -> {}", entry.path().display(), target.display());
        fs::copy(entry.path(), &target).map_err(|e| CopyError::io(&target, e))?;
        copied += 1;
    }

    Ok(copied)
}

/// Replace `dst` with a fresh copy of `src`.
///
/// Whatever exists at `dst` is removed first, so no file from an earlier copy
/// survives. `src` is checked before anything is removed.
///
/// # Errors
///
/// Returns [`CopyError::NotADirectory`] if `src` is not a directory,
/// [`CopyError::Overlap`] if one path contains the other, or any error from
/// removing `dst` or from [`copy_dir_all`]. Nothing is removed on the first
/// two.
pub fn replace_dir(src: &Path, dst: &Path) -> Result<u64, CopyError> {
    check_disjoint(src, dst)?;

    if let Ok(meta) = fs::symlink_metadata(dst) {
        debug!("removing existing {}", dst.display());
        let removed = if meta.is_dir() {
            fs::remove_dir_all(dst)
        } else {
            fs::remove_file(dst)
        };
        removed.map_err(|e| CopyError::io(dst, e))?;
    }

    copy_dir_all(src, dst)
}

/// Ensure `src` is a directory and neither path contains the other.
fn check_disjoint(src: &Path, dst: &Path) -> Result<(), CopyError> {
    if !src.is_dir() {
        return Err(CopyError::NotADirectory(src.to_path_buf()));
    }
    let src_real = src.canonicalize().map_err(|e| CopyError::io(src, e))?;
    let dst_real = resolve_existing_prefix(dst).map_err(|e| CopyError::io(dst, e))?;

    if dst_real.starts_with(&src_real) || src_real.starts_with(&dst_real) {
        return Err(CopyError::Overlap {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-attach the
/// missing tail, so paths that do not exist yet still compare by location.
fn resolve_existing_prefix(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut missing = Vec::new();
    let mut existing = absolute.as_path();
    loop {
        if let Ok(real) = existing.canonicalize() {
            return Ok(missing.iter().rev().fold(real, |acc, part| acc.join(part)));
        }
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_owned());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}
