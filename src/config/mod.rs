mod json;
mod run;
mod text;

use std::{fs, path::Path};

use log::debug;

use crate::error::Result;

pub use json::parse_json;
pub use run::{Algorithm, RunConfig, RunConfigDraft, DEFAULT_BETA};
pub use text::parse_text;

/// Loads and validates a run configuration from a file.
///
/// Files with a `.json` extension are read as JSON documents, anything else as the
/// eight-line text format.
///
/// # Errors
/// Returns an `OptimizerErr` if the file cannot be read, parsed or validated.
pub fn load(path: impl AsRef<Path>) -> Result<RunConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(
        "reading {} config from {}",
        if is_json { "json" } else { "text" },
        path.display()
    );

    let draft = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)?
    };

    RunConfig::try_from(draft)
}
