//! Filesystem helpers for writing blobs and secrets.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a temp file and rename, with
/// owner-only permissions on Unix.
///
/// Readers never observe a partially written file. An existing destination
/// is replaced. The temp file is created exclusively, so an existing file or
/// symlink at its path makes the write fail instead of being followed.
pub fn write_private_file(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(destination);
    let mut file = create_private_file(&temp_path)?;

    let result = file.write_all(contents).and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn create_private_file(path: &Path) -> io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Atomically rename a file over `destination`.
///
/// On Unix `rename` replaces an existing destination. Elsewhere (notably
/// Windows) it fails if the destination exists, so the destination is
/// removed and the rename retried.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        if cfg!(unix) {
            let _ = fs::remove_file(temp_path);
            return Err(initial_err);
        }
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_rename_new_file() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&temp).unwrap().write_all(b"test").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "test");
    }

    #[test]
    fn test_write_private_file_replaces_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.txt");
        fs::write(&dest, b"old").unwrap();

        write_private_file(&dest, b"new").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_private_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("blob.txt");

        write_private_file(&dest, b"abcd").unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("blob.txt");

        assert!(write_private_file(&dest, b"abcd").is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_existing_temp_file_is_not_reused() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.txt");
        let temp = temp_path_for(&dest);
        fs::write(&temp, b"planted").unwrap();

        let err = write_private_file(&dest, b"plaintext").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&temp).unwrap(), b"planted");
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_at_temp_path_is_not_followed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.txt");
        let target = dir.path().join("elsewhere.txt");
        fs::write(&target, b"untouched").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();
        std::os::unix::fs::symlink(&target, temp_path_for(&dest)).unwrap();

        assert!(write_private_file(&dest, b"plaintext").is_err());

        assert_eq!(fs::read(&target).unwrap(), b"untouched");
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rename_keeps_destination() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("never-written.tmp");
        let dest = dir.path().join("dest.txt");
        fs::write(&dest, b"keep me").unwrap();

        assert!(rename_with_fallback(&temp, &dest).is_err());

        assert_eq!(fs::read(&dest).unwrap(), b"keep me");
    }
}
