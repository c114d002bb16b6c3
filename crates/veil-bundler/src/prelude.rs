//! Shared utils prelude loading.
//!
//! Every payload that opts into the shared convention receives the plugin's
//! `utils` object. Its source lives in `_utils/index.js` and is inlined at
//! the top of the assembled script, so the CommonJS export line has to go.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::error::{BundleError, Result};

/// Location of the shared utilities module, relative to the evasions
/// directory.
pub const UTILS_INDEX: &str = "_utils/index.js";

/// The CJS export statement removed so the utils source can be inlined.
const EXPORT_LINE: &str = r"(?m)^module\.exports\s*=\s*utils\s*;?\s*$";

/// Load and post-process the prelude. A missing file is fatal: payloads
/// reference `utils` and the assembled script must stay self-contained.
pub fn load(evasions_dir: &Path) -> Result<String> {
    let path = evasions_dir.join(UTILS_INDEX);
    match fs::read_to_string(&path) {
        Ok(raw) => Ok(strip_export(&raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(BundleError::PreludeNotFound(path))
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove the first `module.exports = utils;` line and trailing whitespace.
fn strip_export(source: &str) -> String {
    let export = Regex::new(EXPORT_LINE).expect("export pattern is valid");
    export.replace(source, "").trim_end().to_string()
}
