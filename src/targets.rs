//! Target installation: built binaries and libraries, plus post-copy fixups.
//!
//! This is the one pass with real logic beyond copying. Each target is
//! copied into place, optionally stripped, given its alias symlinks, and on
//! ELF platforms handed to the dependency fixer so its embedded library
//! search paths point at the install location rather than the build tree.

use crate::error::{InstallError, Result};
use crate::executor::CommandExecutor;
use crate::fsops;
use crate::manifest::TargetEntry;
use crate::output::{installing_message, write_line};
use camino::Utf8Path;
use std::fs;
use std::io::Write;

/// Whether the current platform uses ELF dynamic linking.
///
/// macOS (Mach-O) and Windows (PE) are excluded; everything else Unix-like
/// is treated as ELF and gets the dependency-fixer pass.
#[must_use]
pub const fn is_elf_platform() -> bool {
    cfg!(all(unix, not(target_os = "macos")))
}

/// Outcome of one alias-link attempt.
enum AliasOutcome {
    /// The symlink was created.
    Created,
    /// The platform cannot create symlinks; the alias was skipped.
    Unsupported,
}

/// Installs target entries and applies their fixups.
///
/// Holds the once-per-run symlink-unsupported warning flag, so alias
/// skipping warns on the first occurrence only.
pub struct TargetInstaller<'a> {
    dest_root: &'a Utf8Path,
    dependency_fixer: &'a Utf8Path,
    executor: &'a dyn CommandExecutor,
    warned_symlink_unsupported: bool,
}

impl<'a> TargetInstaller<'a> {
    /// Create an installer writing under `dest_root`.
    #[must_use]
    pub fn new(
        dest_root: &'a Utf8Path,
        dependency_fixer: &'a Utf8Path,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            dest_root,
            dependency_fixer,
            executor,
            warned_symlink_unsupported: false,
        }
    }

    /// Install all entries in manifest order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first copy, metadata, alias, or external-tool failure;
    /// later entries are not processed.
    pub fn install_all(&mut self, entries: &[TargetEntry], out: &mut dyn Write) -> Result<()> {
        for entry in entries {
            self.install_one(entry, out)?;
        }
        Ok(())
    }

    fn install_one(&mut self, entry: &TargetEntry, out: &mut dyn Write) -> Result<()> {
        let out_dir = self.dest_root.join(&entry.out_dir);
        let installed = out_dir.join(fsops::source_file_name(&entry.source)?);

        write_line(out, installing_message(&entry.source, &installed));
        fsops::ensure_dir(&out_dir)?;
        fsops::install_file(&entry.source, &installed)?;

        if entry.strip {
            write_line(out, "Stripping target");
            self.run_tool("strip", &[installed.as_str()], &installed)?;
        }

        for alias in &entry.aliases {
            let link = out_dir.join(alias);
            // The link points at the original source path string, matching
            // the behaviour of a same-named artifact in the build tree.
            match create_alias(&entry.source, &link)? {
                AliasOutcome::Created => {}
                AliasOutcome::Unsupported => self.warn_symlink_unsupported(out),
            }
        }

        if is_elf_platform() {
            // Empty rpath argument: the fixer rewrites the search paths to
            // be relative to the install location.
            self.run_tool(
                self.dependency_fixer.as_str(),
                &[installed.as_str(), ""],
                &installed,
            )?;
        }

        Ok(())
    }

    /// Run an external tool against an installed file, treating a non-zero
    /// exit as fatal with the tool's captured output attached.
    fn run_tool(&self, tool: &str, args: &[&str], path: &Utf8Path) -> Result<()> {
        let output = self.executor.run(tool, args)?;
        if output.status.success() {
            return Ok(());
        }
        Err(InstallError::ExternalTool {
            tool: tool.to_owned(),
            path: path.to_owned(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Emit the symlink-unsupported warning at most once per run.
    fn warn_symlink_unsupported(&mut self, out: &mut dyn Write) {
        if self.warned_symlink_unsupported {
            return;
        }
        write_line(out, "Symlink creation does not work on this platform.");
        self.warned_symlink_unsupported = true;
    }
}

/// Create an alias symlink, replacing any existing link at that path.
///
/// Re-runs against an already-installed tree must succeed, so a pre-existing
/// destination is removed first.
fn create_alias(target: &Utf8Path, link: &Utf8Path) -> Result<AliasOutcome> {
    let alias_err = |e: std::io::Error| InstallError::Alias {
        link: link.to_owned(),
        source: e,
    };

    match fs::remove_file(link) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(alias_err(e)),
    }

    match symlink(target, link) {
        Ok(()) => Ok(AliasOutcome::Created),
        Err(e) if e.kind() == std::io::ErrorKind::Unsupported => Ok(AliasOutcome::Unsupported),
        Err(e) => Err(alias_err(e)),
    }
}

#[cfg(unix)]
fn symlink(target: &Utf8Path, link: &Utf8Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Utf8Path, link: &Utf8Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Utf8Path, _link: &Utf8Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
