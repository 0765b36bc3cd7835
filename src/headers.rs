//! Header installation: a pure copy pass into include directories.

use crate::error::Result;
use crate::fsops;
use crate::manifest::HeaderEntry;
use crate::output::{installing_message, write_line};
use camino::Utf8Path;
use std::io::Write;

/// Install all header entries in manifest order.
///
/// Each header is copied to `dest_root/out_dir/<basename>` with source
/// metadata preserved. No fixups.
///
/// # Errors
///
/// Propagates the first directory-creation or copy failure.
pub fn install_headers(
    entries: &[HeaderEntry],
    dest_root: &Utf8Path,
    out: &mut dyn Write,
) -> Result<()> {
    for entry in entries {
        let out_dir = dest_root.join(&entry.out_dir);
        let dest = out_dir.join(fsops::source_file_name(&entry.source)?);
        write_line(out, installing_message(&entry.source, &dest));
        fsops::ensure_dir(&out_dir)?;
        fsops::install_file(&entry.source, &dest)?;
    }
    Ok(())
}
