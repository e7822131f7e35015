//! Path helpers for configured file locations.

use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// Falls back to the unexpanded path when `$HOME` is unset, so a missing
/// environment variable surfaces later as an ordinary "file not found".
///
/// # Examples
///
/// ```
/// use rosterview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative.json"), "relative.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME").map(PathBuf::from) else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

/// Expands `~` in an optional configured path.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(expand_tilde(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("./students.json"), "./students.json");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn test_expands_home_prefix() {
        if let Some(home) = std::env::var_os("HOME") {
            let expected = PathBuf::from(home).join("data.json");
            assert_eq!(expand_path("~/data.json"), expected);
        }
    }
}
