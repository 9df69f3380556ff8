//! Canonical path form
//!
//! Stored paths are the percent-encoded absolute form of the input: the
//! path rendered as a `file://` URL with the scheme stripped. This is the
//! storage key format earlier releases wrote, so `test file.txt` in
//! `/tmp` is stored as `/tmp/test%20file.txt`. The path does not have to
//! exist; tagging a path ahead of creating it is allowed.

use std::path::{Path, PathBuf};

use url::Url;

/// Strip the scheme from a `file://` URL.
const FILE_SCHEME: &str = "file://";

/// Normalize a user-supplied path into its canonical storage form.
///
/// Relative paths are resolved against the current directory lexically
/// (no symlink resolution, no existence check). Inputs that cannot be
/// rendered as a file URL are stored as given.
pub fn canonicalize(raw: &str) -> String {
    let path = Path::new(raw);
    let absolute: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return raw.to_string(),
        }
    };

    match Url::from_file_path(&absolute) {
        Ok(url) => url
            .as_str()
            .strip_prefix(FILE_SCHEME)
            .unwrap_or(url.as_str())
            .to_string(),
        Err(()) => raw.to_string(),
    }
}

/// Whether a raw path should be treated as a glob pattern for bulk
/// tagging.
pub fn is_glob_pattern(raw: &str) -> bool {
    raw.contains(['*', '?', '['])
}
