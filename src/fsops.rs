//! Filesystem primitives shared by the category installers.
//!
//! Every installed file mirrors the source's permission bits and file times,
//! and every destination directory is created idempotently. These helpers
//! keep that behaviour in one place so the copy passes stay declarative.

use crate::error::{InstallError, Result};
use camino::Utf8Path;
use filetime::FileTime;
use std::fs;

/// Create a directory and any missing parents. Succeeds if already present.
///
/// # Errors
///
/// Returns [`InstallError::CreateDir`] with the failing path.
pub fn ensure_dir(dir: &Utf8Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| InstallError::CreateDir {
        path: dir.to_owned(),
        source: e,
    })
}

/// Copy `source` to `dest`, overwriting, then mirror the source's metadata.
///
/// # Errors
///
/// Returns [`InstallError::Copy`] when the copy fails and
/// [`InstallError::Metadata`] when the permission or file-time propagation
/// fails.
pub fn install_file(source: &Utf8Path, dest: &Utf8Path) -> Result<()> {
    fs::copy(source, dest).map_err(|e| InstallError::Copy {
        from: source.to_owned(),
        to: dest.to_owned(),
        source: e,
    })?;
    apply_metadata(source, dest)
}

/// Apply `source`'s permission bits and access/modification times to `dest`.
///
/// Used directly by the man-page pass, where the destination content is a
/// compressed transform of the source but the metadata still mirrors it.
///
/// # Errors
///
/// Returns [`InstallError::Metadata`] with both paths on failure.
pub fn apply_metadata(source: &Utf8Path, dest: &Utf8Path) -> Result<()> {
    let metadata_err = |e: std::io::Error| InstallError::Metadata {
        from: source.to_owned(),
        to: dest.to_owned(),
        source: e,
    };

    let meta = fs::metadata(source).map_err(metadata_err)?;
    fs::set_permissions(dest, meta.permissions()).map_err(metadata_err)?;

    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dest.as_std_path(), atime, mtime).map_err(metadata_err)
}

/// Extract the file name component of an entry's source path.
///
/// Targets and headers install into a directory and keep the source's base
/// name; a source path with no final component cannot be installed.
///
/// # Errors
///
/// Returns [`InstallError::Copy`] for a source path with no file name.
pub fn source_file_name(source: &Utf8Path) -> Result<&str> {
    source.file_name().ok_or_else(|| InstallError::Copy {
        from: source.to_owned(),
        to: source.to_owned(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "source path has no file name",
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("utf-8 temp dir");
        (dir, path)
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let (_guard, root) = utf8_tempdir();
        let nested = root.join("a/b/c");

        ensure_dir(&nested).expect("first creation");
        ensure_dir(&nested).expect("second creation over existing tree");
        assert!(nested.as_std_path().is_dir());
    }

    #[test]
    fn install_file_copies_content_and_times() {
        let (_guard, root) = utf8_tempdir();
        let source = root.join("src.bin");
        let dest = root.join("dest.bin");
        fs::write(&source, b"payload").expect("write source");

        // Pin the source mtime so the comparison is not a same-instant fluke.
        let stamp = FileTime::from_unix_time(1_234_567, 0);
        filetime::set_file_times(source.as_std_path(), stamp, stamp).expect("stamp source");

        install_file(&source, &dest).expect("install file");

        assert_eq!(fs::read(&dest).expect("read dest"), b"payload");
        let dest_meta = fs::metadata(&dest).expect("dest metadata");
        assert_eq!(FileTime::from_last_modification_time(&dest_meta), stamp);
    }

    #[cfg(unix)]
    #[test]
    fn install_file_mirrors_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let (_guard, root) = utf8_tempdir();
        let source = root.join("tool");
        let dest = root.join("installed-tool");
        fs::write(&source, b"#!/bin/sh\n").expect("write source");
        fs::set_permissions(&source, fs::Permissions::from_mode(0o755))
            .expect("make source executable");

        install_file(&source, &dest).expect("install file");

        let mode = fs::metadata(&dest).expect("dest metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn install_file_overwrites_existing_destination() {
        let (_guard, root) = utf8_tempdir();
        let source = root.join("src");
        let dest = root.join("dest");
        fs::write(&source, b"new").expect("write source");
        fs::write(&dest, b"old contents that are longer").expect("write stale dest");

        install_file(&source, &dest).expect("install over existing file");
        assert_eq!(fs::read(&dest).expect("read dest"), b"new");
    }

    #[test]
    fn missing_source_reports_copy_error() {
        let (_guard, root) = utf8_tempdir();
        let err = install_file(&root.join("absent"), &root.join("dest"))
            .expect_err("expected copy to fail");
        assert!(matches!(err, InstallError::Copy { .. }));
    }
}
