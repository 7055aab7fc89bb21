use std::path::PathBuf;

use serde::Deserialize;

/// File counterpart of the command line options.  Explicit flags win over
/// the file; the file wins over built-in defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub scope: Option<String>,
    pub output_path: Option<PathBuf>,
    pub genre_column: Option<usize>,
}
