//! Progress output for the installer.
//!
//! Progress lines are informational only and go to an injected writer so
//! tests can capture them and `--quiet` can drop them. Failures are reported
//! through [`crate::error::InstallError`], never through this channel.

use camino::Utf8Path;
use std::io::Write;

/// Write one line to the given writer, swallowing write failures.
///
/// Progress output is best-effort; a broken pipe must not abort an install.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Format the standard per-file progress line.
#[must_use]
pub fn installing_message(source: &Utf8Path, dest: &Utf8Path) -> String {
    format!("Installing {source} to {dest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installing_message_names_both_paths() {
        let msg = installing_message(Utf8Path::new("build/foo"), Utf8Path::new("/usr/bin/foo"));
        assert_eq!(msg, "Installing build/foo to /usr/bin/foo");
    }

    #[test]
    fn write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "hello");
        assert_eq!(out, b"hello\n");
    }
}
