//! Installation orchestration.
//!
//! One run is a single sequential pass over the manifest: targets, then
//! headers, man pages, data files, and locale catalogs, in that fixed
//! order. The categories are independent of each other, but the first fatal
//! error aborts everything that follows; there is no per-entry isolation
//! and no rollback of files already installed.

use crate::datafiles::install_data_files;
use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::headers::install_headers;
use crate::locales::install_locales;
use crate::manifest::InstallManifest;
use crate::manpages::install_man_pages;
use crate::targets::TargetInstaller;
use camino::Utf8Path;
use std::io::Write;

/// Context for one installation run.
pub struct InstallContext<'a> {
    /// The loaded manifest, read-only.
    pub manifest: &'a InstallManifest,
    /// Effective destination root from [`crate::destdir::resolve_destination`].
    pub dest_root: &'a Utf8Path,
    /// Executor for strip and dependency-fixer invocations.
    pub executor: &'a dyn CommandExecutor,
}

/// Run every category installer against the resolved destination root.
///
/// # Errors
///
/// Propagates the first fatal error from any pass; later passes do not run.
pub fn run_install(context: &InstallContext<'_>, out: &mut dyn Write) -> Result<()> {
    let manifest = context.manifest;
    log::trace!("installing under {}", context.dest_root);

    let mut targets = TargetInstaller::new(
        context.dest_root,
        &manifest.dependency_fixer,
        context.executor,
    );
    targets.install_all(&manifest.targets, out)?;
    install_headers(&manifest.headers, context.dest_root, out)?;
    install_man_pages(&manifest.man_pages, context.dest_root, out)?;
    install_data_files(&manifest.data_files, context.dest_root, out)?;
    install_locales(
        &manifest.locales,
        &manifest.locale_package,
        context.dest_root,
        out,
    )
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
