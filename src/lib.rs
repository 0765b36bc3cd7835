//! Stagehand installer library.
//!
//! Final stage of a build pipeline: reads a serialized install manifest and
//! copies the listed build outputs into their destinations under a prefix,
//! optionally redirected through a `DESTDIR` staging directory, then applies
//! post-copy fixups (strip, alias symlinks, dependency-path rewriting,
//! man-page compression). It decides nothing about *what* to install; the
//! manifest is authoritative.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`datafiles`] - Data-file copy pass
//! - [`destdir`] - Destination-root resolution with the staging override
//! - [`error`] - Semantic error types
//! - [`executor`] - External-command abstraction for strip and the
//!   dependency fixer
//! - [`fsops`] - Metadata-preserving copy primitives
//! - [`headers`] - Header copy pass
//! - [`locales`] - Message-catalog placement
//! - [`manifest`] - Install manifest model and JSON loader
//! - [`manpages`] - Man-page pass with gzip-on-suffix
//! - [`output`] - Progress-line writing
//! - [`pipeline`] - Fixed-order orchestration of the category passes
//! - [`targets`] - Target copy pass with strip, alias, and depfixer fixups

pub mod cli;
pub mod datafiles;
pub mod destdir;
pub mod error;
pub mod executor;
pub mod fsops;
pub mod headers;
pub mod locales;
pub mod manifest;
pub mod manpages;
pub mod output;
pub mod pipeline;
pub mod targets;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
