//! Man-page installation, with on-the-fly gzip compression.
//!
//! Whether a page is compressed is decided purely by filename suffix: a
//! destination ending in `.gz` whose source does not is gzip-compressed
//! during the copy. Content is never inspected. The installed page's
//! metadata mirrors the source either way.

use crate::error::{InstallError, Result};
use crate::fsops;
use crate::manifest::ManEntry;
use crate::output::{installing_message, write_line};
use camino::Utf8Path;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;

const GZIP_SUFFIX: &str = ".gz";

/// Install all man-page entries in manifest order.
///
/// # Errors
///
/// Propagates the first directory-creation, read, write, or metadata
/// failure.
pub fn install_man_pages(
    entries: &[ManEntry],
    dest_root: &Utf8Path,
    out: &mut dyn Write,
) -> Result<()> {
    for entry in entries {
        let dest = dest_root.join(&entry.out_path);
        write_line(out, installing_message(&entry.source, &dest));
        if let Some(parent) = dest.parent() {
            fsops::ensure_dir(parent)?;
        }
        if wants_compression(&entry.source, &dest) {
            compress_into(&entry.source, &dest)?;
            fsops::apply_metadata(&entry.source, &dest)?;
        } else {
            fsops::install_file(&entry.source, &dest)?;
        }
    }
    Ok(())
}

/// A page is compressed when the destination name asks for gzip and the
/// source is not already compressed.
fn wants_compression(source: &Utf8Path, dest: &Utf8Path) -> bool {
    dest.as_str().ends_with(GZIP_SUFFIX) && !source.as_str().ends_with(GZIP_SUFFIX)
}

/// Gzip `source` into `dest`, overwriting any existing file.
fn compress_into(source: &Utf8Path, dest: &Utf8Path) -> Result<()> {
    let copy_err = |e: std::io::Error| InstallError::Copy {
        from: source.to_owned(),
        to: dest.to_owned(),
        source: e,
    };

    let raw = fs::read(source).map_err(copy_err)?;
    let file = fs::File::create(dest).map_err(copy_err)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(&raw).map_err(copy_err)?;
    encoder.finish().map_err(copy_err)?;
    Ok(())
}
