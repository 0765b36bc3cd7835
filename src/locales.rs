//! Locale-catalog installation into the `LC_MESSAGES` layout.

use crate::error::Result;
use crate::fsops;
use crate::manifest::LocaleEntry;
use crate::output::{installing_message, write_line};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

/// Install all message catalogs in manifest order.
///
/// Each catalog lands at the fixed structural location
/// `dest_root/<locale_dir>/<language>/LC_MESSAGES/<package>.mo`.
///
/// # Errors
///
/// Propagates the first directory-creation or copy failure.
pub fn install_locales(
    entries: &[LocaleEntry],
    package: &str,
    dest_root: &Utf8Path,
    out: &mut dyn Write,
) -> Result<()> {
    for entry in entries {
        let dest = catalog_path(dest_root, entry, package);
        write_line(out, installing_message(&entry.source, &dest));
        if let Some(parent) = dest.parent() {
            fsops::ensure_dir(parent)?;
        }
        fsops::install_file(&entry.source, &dest)?;
    }
    Ok(())
}

/// Destination path for one catalog under the message-catalog convention.
fn catalog_path(dest_root: &Utf8Path, entry: &LocaleEntry, package: &str) -> Utf8PathBuf {
    dest_root
        .join(&entry.locale_dir)
        .join(&entry.language)
        .join("LC_MESSAGES")
        .join(format!("{package}.mo"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_path_follows_lc_messages_convention() {
        let entry = LocaleEntry {
            source: Utf8PathBuf::from("po/de.mo"),
            locale_dir: Utf8PathBuf::from("share/locale"),
            language: "de".to_owned(),
        };
        let dest = catalog_path(Utf8Path::new("/usr/local"), &entry, "foo");
        assert_eq!(
            dest,
            Utf8PathBuf::from("/usr/local/share/locale/de/LC_MESSAGES/foo.mo")
        );
    }

    #[test]
    fn catalogs_are_installed_per_language() {
        let guard = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::try_from(guard.path().to_path_buf()).expect("utf-8 temp dir");
        let de = root.join("de.mo");
        let fr = root.join("fr.mo");
        std::fs::write(&de, b"german catalog").expect("write de catalog");
        std::fs::write(&fr, b"french catalog").expect("write fr catalog");

        let entries = [
            LocaleEntry {
                source: de,
                locale_dir: Utf8PathBuf::from("share/locale"),
                language: "de".to_owned(),
            },
            LocaleEntry {
                source: fr,
                locale_dir: Utf8PathBuf::from("share/locale"),
                language: "fr".to_owned(),
            },
        ];
        let dest_root = root.join("dest");
        let mut out = Vec::new();

        install_locales(&entries, "foo", &dest_root, &mut out).expect("install locales");

        assert_eq!(
            std::fs::read(dest_root.join("share/locale/de/LC_MESSAGES/foo.mo"))
                .expect("read de catalog"),
            b"german catalog"
        );
        assert_eq!(
            std::fs::read(dest_root.join("share/locale/fr/LC_MESSAGES/foo.mo"))
                .expect("read fr catalog"),
            b"french catalog"
        );
    }
}
