//! CLI argument definitions for the stagehand installer.
//!
//! This binary is normally invoked by the build system, not by hand, so the
//! surface is deliberately small: the manifest path and a quiet switch.

use camino::Utf8PathBuf;
use clap::Parser;

/// Install build outputs described by an install manifest.
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install build outputs described by an install manifest.\n\n",
    "The manifest is produced by the upstream build step and lists targets, ",
    "headers, man pages, data files, and locale catalogs together with the ",
    "installation prefix. Set DESTDIR to assemble the tree under a staging ",
    "directory instead of the live system root.",
))]
pub struct Cli {
    /// Path to the install manifest produced by the build step.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Utf8PathBuf,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}
