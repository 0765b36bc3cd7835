//! Data-file installation: a pure copy pass keyed by full destination path.

use crate::error::Result;
use crate::fsops;
use crate::manifest::DataEntry;
use crate::output::{installing_message, write_line};
use camino::Utf8Path;
use std::io::Write;

/// Install all data entries in manifest order.
///
/// Unlike headers, data entries carry their full destination path relative
/// to the prefix, so renames across the copy are possible.
///
/// # Errors
///
/// Propagates the first directory-creation or copy failure.
pub fn install_data_files(
    entries: &[DataEntry],
    dest_root: &Utf8Path,
    out: &mut dyn Write,
) -> Result<()> {
    for entry in entries {
        let dest = dest_root.join(&entry.out_path);
        write_line(out, installing_message(&entry.source, &dest));
        if let Some(parent) = dest.parent() {
            fsops::ensure_dir(parent)?;
        }
        fsops::install_file(&entry.source, &dest)?;
    }
    Ok(())
}
