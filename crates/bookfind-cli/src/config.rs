//! Path resolution for the CLI.
//!
//! The result file is chosen from, in order:
//! 1. The optional third positional argument
//! 2. `$BOOKFIND_RESULT_FILE`
//! 3. `found.dat` in the working directory

use bookfind_core::config::DEFAULT_RESULT_FILENAME;
use std::path::{Path, PathBuf};

/// Environment variable for a custom result file
const RESULT_FILE_ENV: &str = "BOOKFIND_RESULT_FILE";

/// Returns the path the match count is written to.
pub fn result_path(custom: Option<&Path>) -> PathBuf {
    result_path_with_env(custom, std::env::var_os(RESULT_FILE_ENV).map(PathBuf::from))
}

fn result_path_with_env(custom: Option<&Path>, env: Option<PathBuf>) -> PathBuf {
    if let Some(path) = custom {
        return path.to_path_buf();
    }
    env.filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_FILENAME))
}
