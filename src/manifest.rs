//! Install manifest data model and loader.
//!
//! The manifest is produced by the upstream build step as a JSON document and
//! is the single point of coupling to that system. It is deserialized once,
//! read-only from then on; the effective destination root is computed
//! separately by [`crate::destdir`] rather than rewritten into the manifest.

use crate::error::{InstallError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// A built artifact (executable or library) to install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEntry {
    /// Path to the built file in the build tree.
    pub source: Utf8PathBuf,
    /// Directory under the prefix to install into.
    pub out_dir: Utf8PathBuf,
    /// Additional names to create as symlinks beside the installed file.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Whether to run the strip tool on the installed copy.
    #[serde(default)]
    pub strip: bool,
}

/// A header file to install into an include directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// Path to the header in the source or build tree.
    pub source: Utf8PathBuf,
    /// Directory under the prefix to install into.
    pub out_dir: Utf8PathBuf,
}

/// A man page, installed by full destination path so sections stay explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManEntry {
    /// Path to the man page source.
    pub source: Utf8PathBuf,
    /// Full destination path under the prefix, including the file name.
    pub out_path: Utf8PathBuf,
}

/// An arbitrary data file, installed by full destination path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntry {
    /// Path to the data file.
    pub source: Utf8PathBuf,
    /// Full destination path under the prefix, including the file name.
    pub out_path: Utf8PathBuf,
}

/// A compiled message catalog for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Path to the compiled `.mo` catalog.
    pub source: Utf8PathBuf,
    /// Locale base directory under the prefix (e.g. `share/locale`).
    pub locale_dir: Utf8PathBuf,
    /// Language code forming the next path component (e.g. `de`).
    pub language: String,
}

/// The install manifest: everything one run installs, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallManifest {
    /// Nominal installation root, an absolute path.
    pub prefix: Utf8PathBuf,
    /// Path to the external dependency-fixer executable.
    pub dependency_fixer: Utf8PathBuf,
    /// Built artifacts, in install order.
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
    /// Header files, in install order.
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    /// Man pages, in install order.
    #[serde(default)]
    pub man_pages: Vec<ManEntry>,
    /// Data files, in install order.
    #[serde(default)]
    pub data_files: Vec<DataEntry>,
    /// Message-catalog package name (the installed `.mo` basename).
    #[serde(default)]
    pub locale_package: String,
    /// Message catalogs, in install order.
    #[serde(default)]
    pub locales: Vec<LocaleEntry>,
}

impl InstallManifest {
    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::ManifestRead`] when the file cannot be opened
    /// or does not decode; a corrupt manifest is fatal, with no partial
    /// recovery.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| InstallError::ManifestRead {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| InstallError::ManifestRead {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE: &str = r#"{
        "prefix": "/usr/local",
        "dependency_fixer": "/opt/build/depfixer",
        "targets": [
            {
                "source": "build/foo",
                "out_dir": "bin",
                "aliases": ["foo-alias"],
                "strip": true
            }
        ],
        "headers": [{"source": "include/foo.h", "out_dir": "include/foo"}],
        "man_pages": [
            {"source": "man/foo.1", "out_path": "share/man/man1/foo.1.gz"}
        ],
        "data_files": [
            {"source": "data/foo.dat", "out_path": "share/foo/foo.dat"}
        ],
        "locale_package": "foo",
        "locales": [
            {"source": "po/de.mo", "locale_dir": "share/locale", "language": "de"}
        ]
    }"#;

    #[test]
    fn load_reads_full_manifest() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write manifest");
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).expect("utf-8 path");

        let manifest = InstallManifest::load(&path).expect("load manifest");

        assert_eq!(manifest.prefix, Utf8PathBuf::from("/usr/local"));
        assert_eq!(manifest.targets.len(), 1);
        assert!(manifest.targets[0].strip);
        assert_eq!(manifest.targets[0].aliases, vec!["foo-alias".to_owned()]);
        assert_eq!(manifest.locale_package, "foo");
        assert_eq!(manifest.locales[0].language, "de");
    }

    #[test]
    fn optional_sequences_default_to_empty() {
        let minimal = r#"{"prefix": "/usr", "dependency_fixer": "depfixer"}"#;
        let manifest: InstallManifest =
            serde_json::from_str(minimal).expect("decode minimal manifest");

        assert!(manifest.targets.is_empty());
        assert!(manifest.headers.is_empty());
        assert!(manifest.man_pages.is_empty());
        assert!(manifest.data_files.is_empty());
        assert!(manifest.locales.is_empty());
        assert!(manifest.locale_package.is_empty());
    }

    #[test]
    fn load_missing_file_is_manifest_read_error() {
        let err = InstallManifest::load(Utf8Path::new("/nonexistent/install.json"))
            .expect_err("expected load to fail");
        assert!(matches!(err, InstallError::ManifestRead { .. }));
    }

    #[test]
    fn load_corrupt_manifest_is_manifest_read_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"not json at all").expect("write garbage");
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).expect("utf-8 path");

        let err = InstallManifest::load(&path).expect_err("expected load to fail");
        assert!(matches!(err, InstallError::ManifestRead { .. }));
    }
}
