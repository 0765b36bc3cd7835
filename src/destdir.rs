//! Destination-root resolution with staging-directory override.
//!
//! Packaging runs set the `DESTDIR` environment variable to assemble the
//! install tree under a staging directory instead of the live system root.
//! The manifest's recorded relative paths never change; only the root they
//! hang off is redirected.

use crate::error::{InstallError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Environment variable naming the staging-directory override.
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Compute the effective installation root.
///
/// With no override the prefix is used verbatim. With an override, the
/// prefix is treated as a path relative to the staging directory: a single
/// leading separator is stripped and the remainder is joined under the
/// override. An empty override is treated as unset.
///
/// # Examples
///
/// ```
/// use camino::{Utf8Path, Utf8PathBuf};
/// use stagehand::destdir::resolve_destination;
///
/// let root = resolve_destination(Utf8Path::new("/usr/local"), Some("/tmp/stage"));
/// assert_eq!(root, Utf8PathBuf::from("/tmp/stage/usr/local"));
///
/// let root = resolve_destination(Utf8Path::new("/usr/local"), None);
/// assert_eq!(root, Utf8PathBuf::from("/usr/local"));
/// ```
#[must_use]
pub fn resolve_destination(prefix: &Utf8Path, staging: Option<&str>) -> Utf8PathBuf {
    match staging {
        Some(dir) if !dir.is_empty() => {
            let relative = prefix.as_str().strip_prefix('/').unwrap_or(prefix.as_str());
            Utf8PathBuf::from(dir).join(relative)
        }
        _ => prefix.to_owned(),
    }
}

/// Read the staging-directory override from the environment.
///
/// # Errors
///
/// Returns [`InstallError::NonUtf8Staging`] when the variable is set but not
/// valid UTF-8. Dropping a mangled override would fall through to the
/// manifest prefix and write into the live system root, which is exactly
/// what a staging run must never do.
pub fn staging_override() -> Result<Option<String>> {
    match std::env::var_os(DESTDIR_VAR) {
        Some(value) => value
            .into_string()
            .map(Some)
            .map_err(|_| InstallError::NonUtf8Staging { name: DESTDIR_VAR }),
        None => Ok(None),
    }
}
