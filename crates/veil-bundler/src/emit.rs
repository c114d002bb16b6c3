//! Artifact emission.
//!
//! Two files land in the output directory: the assembled script verbatim,
//! and a fixed-template Rust wrapper that embeds it via `include_str!` so a
//! host crate gets the whole bundle as one `&str` constant.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// File name of the assembled script artifact.
pub const SCRIPT_FILE: &str = "evasions.js";

/// File name of the Rust embed wrapper artifact.
pub const WRAPPER_FILE: &str = "stealth.rs";

/// Where the pipeline wrote its two artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub script: PathBuf,
    pub wrapper: PathBuf,
}

/// Write both artifacts, creating the output directory if needed.
pub fn write(out_dir: &Path, script: &str) -> Result<Artifacts> {
    fs::create_dir_all(out_dir)?;

    let script_path = out_dir.join(SCRIPT_FILE);
    fs::write(&script_path, script)?;
    debug!(path = %script_path.display(), bytes = script.len(), "wrote script artifact");

    let wrapper_path = out_dir.join(WRAPPER_FILE);
    fs::write(&wrapper_path, wrapper_source())?;
    debug!(path = %wrapper_path.display(), "wrote embed wrapper");

    Ok(Artifacts {
        script: script_path,
        wrapper: wrapper_path,
    })
}

/// The embed wrapper is a fixed template: one resource-embedding
/// declaration bound to the script file, one exported name.
fn wrapper_source() -> String {
    [
        "//! Combined stealth evasion script bundled from",
        "//! puppeteer-extra-plugin-stealth. Inject it before any page script",
        "//! runs (e.g. Page.addScriptToEvaluateOnNewDocument) to mask",
        "//! automation fingerprints.",
        "//!",
        "//! Regenerate: veil bundle",
        "",
        "/// The combined evasion script.",
        "pub static JS: &str = include_str!(\"evasions.js\");",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_script_verbatim_and_wrapper() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("ext").join("stealth");

        let artifacts = write(&out_dir, "// script\n(function () {})();").unwrap();

        assert_eq!(
            fs::read_to_string(&artifacts.script).unwrap(),
            "// script\n(function () {})();"
        );
        let wrapper = fs::read_to_string(&artifacts.wrapper).unwrap();
        assert!(wrapper.contains("include_str!(\"evasions.js\")"));
        assert!(wrapper.contains("pub static JS: &str"));
    }

    #[test]
    fn creates_nested_output_directories() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("a").join("b").join("c");

        write(&out_dir, "x").unwrap();
        assert!(out_dir.join(SCRIPT_FILE).exists());
        assert!(out_dir.join(WRAPPER_FILE).exists());
    }
}
