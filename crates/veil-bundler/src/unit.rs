//! Source-unit discovery under the plugin's evasions directory.
//!
//! Layout contract: one subdirectory per evasion with an `index.js` entry
//! file. Subdirectories whose name starts with `_` are reserved for plugin
//! internals (`_utils` supplies the shared prelude) and never hold an
//! extractable unit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};

/// Entry file each evasion directory is expected to contain.
pub const ENTRY_FILE: &str = "index.js";

/// Prefix marking reserved (non-evasion) subdirectories.
pub const RESERVED_PREFIX: &str = "_";

/// One evasion's raw source, read-only once loaded.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// The evasion directory's name, also the payload's name downstream.
    pub name: String,
    /// Verbatim `index.js` content.
    pub text: String,
}

/// A discovered evasion directory whose entry file has not been read yet.
#[derive(Debug, Clone)]
pub struct UnitDir {
    pub name: String,
    pub entry: PathBuf,
}

impl UnitDir {
    /// Read the unit's entry file.
    ///
    /// Returns `None` when the file is absent - a valid "no payload" skip
    /// under the input contract, not an error.
    pub fn load(&self) -> Result<Option<SourceUnit>> {
        match fs::read_to_string(&self.entry) {
            Ok(text) => Ok(Some(SourceUnit {
                name: self.name.clone(),
                text,
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Enumerate candidate evasion directories in ascending name order.
///
/// The sort makes downstream output independent of on-disk enumeration
/// order. A missing root is fatal: the plugin is simply not installed.
pub fn discover(evasions_dir: &Path) -> Result<Vec<UnitDir>> {
    if !evasions_dir.is_dir() {
        return Err(BundleError::PluginNotFound(evasions_dir.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(evasions_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(RESERVED_PREFIX) {
            continue;
        }
        dirs.push(UnitDir {
            entry: entry.path().join(ENTRY_FILE),
            name,
        });
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_unit(root: &Path, name: &str, source: Option<&str>) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(source) = source {
            fs::write(dir.join(ENTRY_FILE), source).unwrap();
        }
    }

    #[test]
    fn discovers_sorted_and_skips_reserved() {
        let temp = TempDir::new().unwrap();
        make_unit(temp.path(), "zeta", Some("b"));
        make_unit(temp.path(), "alpha", Some("a"));
        make_unit(temp.path(), "_utils", Some("u"));
        make_unit(temp.path(), "_template", Some("t"));
        fs::write(temp.path().join("README.md"), "not a dir").unwrap();

        let dirs = discover(temp.path()).unwrap();
        let names: Vec<_> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            discover(&missing),
            Err(BundleError::PluginNotFound(_))
        ));
    }

    #[test]
    fn missing_entry_file_loads_as_none() {
        let temp = TempDir::new().unwrap();
        make_unit(temp.path(), "hollow", None);

        let dirs = discover(temp.path()).unwrap();
        assert_eq!(dirs.len(), 1);
        assert!(dirs[0].load().unwrap().is_none());
    }

    #[test]
    fn entry_file_loads_verbatim() {
        let temp = TempDir::new().unwrap();
        make_unit(temp.path(), "real", Some("page.evaluateOnNewDocument(() => {})"));

        let dirs = discover(temp.path()).unwrap();
        let unit = dirs[0].load().unwrap().unwrap();
        assert_eq!(unit.name, "real");
        assert_eq!(unit.text, "page.evaluateOnNewDocument(() => {})");
    }
}
