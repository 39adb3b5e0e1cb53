//! Static asset copying.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CopyError;

/// Reset `dest` and recursively copy every file under `src` into it.
///
/// The destination is always removed and recreated, even when `src` does not
/// exist. Returns the destination path of every copied file, in directory
/// walk order with entries sorted by name.
pub fn copy_static(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, CopyError> {
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "Removing output directory");
        fs::remove_dir_all(dest).map_err(|e| CopyError::new(dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| CopyError::new(dest, e))?;

    let mut copied = Vec::new();
    if src.is_dir() {
        copy_dir(src, dest, &mut copied)?;
    } else {
        tracing::debug!(path = %src.display(), "No static directory, nothing to copy");
    }
    Ok(copied)
}

fn copy_dir(src: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<(), CopyError> {
    let mut entries = fs::read_dir(src)
        .map_err(|e| CopyError::new(src, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CopyError::new(src, e))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| CopyError::new(&from, e))?;

        if file_type.is_dir() {
            fs::create_dir_all(&to).map_err(|e| CopyError::new(&to, e))?;
            copy_dir(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(|e| CopyError::new(&from, e))?;
            tracing::info!(source = %from.display(), dest = %to.display(), "Copied static file");
            copied.push(to);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copy_static_nested() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("static");
        let dest = temp.path().join("docs");
        fs::create_dir_all(src.join("images")).unwrap();
        fs::write(src.join("index.css"), "body {}").unwrap();
        fs::write(src.join("images/logo.png"), [0x89, 0x50]).unwrap();

        let copied = copy_static(&src, &dest).unwrap();

        assert_eq!(
            copied,
            vec![dest.join("images/logo.png"), dest.join("index.css")]
        );
        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read(dest.join("images/logo.png")).unwrap(), vec![0x89, 0x50]);
    }

    #[test]
    fn test_copy_static_resets_destination() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("static");
        let dest = temp.path().join("docs");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(dest.join("stale")).unwrap();
        fs::write(dest.join("stale/old.html"), "old").unwrap();

        copy_static(&src, &dest).unwrap();

        assert!(dest.is_dir());
        assert!(!dest.join("stale").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let temp = tempfile::tempdir().unwrap();
        let dest = temp.path().join("docs");

        let copied = copy_static(&temp.path().join("missing"), &dest).unwrap();

        assert!(copied.is_empty());
        assert!(dest.is_dir());
    }
}
