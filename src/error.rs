//! Error types for the stagehand installer.
//!
//! This module defines semantic error variants for everything that can go
//! wrong during an install run. Every variant carries the failing path so a
//! user can see exactly which manifest entry stopped the run.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during an installation run.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The install manifest could not be opened or decoded.
    #[error("cannot read install manifest {path}: {reason}")]
    ManifestRead {
        /// Path to the manifest file.
        path: Utf8PathBuf,
        /// Description of the open or decode failure.
        reason: String,
    },

    /// A destination directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be copied to its destination.
    #[error("cannot install {from} to {to}: {source}")]
    Copy {
        /// Source path from the manifest entry.
        from: Utf8PathBuf,
        /// Destination path under the resolved prefix.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Source permission bits or file times could not be applied to an
    /// installed file.
    #[error("cannot apply metadata from {from} to {to}: {source}")]
    Metadata {
        /// File whose metadata is being mirrored.
        from: Utf8PathBuf,
        /// Installed file receiving the metadata.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An alias symlink could not be created.
    #[error("cannot create alias link {link}: {source}")]
    Alias {
        /// Path of the link being created.
        link: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An external tool (strip or the dependency fixer) exited non-zero.
    ///
    /// The captured output is surfaced verbatim because the tool's own
    /// diagnostics are the only way to understand the failure.
    #[error(
        "{tool} failed for {path}\nStdout:\n{stdout}\nStderr:\n{stderr}"
    )]
    ExternalTool {
        /// The tool that failed (`strip` or the dependency-fixer path).
        tool: String,
        /// The installed file the tool was run against.
        path: Utf8PathBuf,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// An external tool could not be spawned at all.
    #[error("cannot run {tool}: {source}")]
    ToolSpawn {
        /// The command that could not be started.
        tool: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The staging-directory override is set but not valid UTF-8.
    ///
    /// A mangled override must abort the run rather than fall through to
    /// the live system root.
    #[error("{name} environment variable is set but not valid UTF-8")]
    NonUtf8Staging {
        /// Name of the offending environment variable.
        name: &'static str,
    },
}

/// Result type alias using [`InstallError`].
pub type Result<T> = std::result::Result<T, InstallError>;
