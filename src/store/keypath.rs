//! Logical-key codec.
//!
//! Schema keys are slash-delimited, with the final segment naming a value
//! and everything before it naming the container, e.g.
//! `Cameras/1/description`. Containers live under one fixed root inside
//! the backend's namespace.

/// Root container every schema key lives under.
pub const ROOT_KEY: &str = "Software/VirtualCamera";

/// Key segment separator.
pub const SEPARATOR: char = '/';

/// Split a logical key into (container path, value name).
///
/// A key without a separator names a value directly under the root. A
/// trailing separator yields an empty value name, which delete/copy
/// operations read as "the container itself".
pub(crate) fn split_key(key: &str) -> (String, String) {
    match key.rfind(SEPARATOR) {
        None => (ROOT_KEY.to_string(), key.to_string()),
        Some(pos) => {
            let container = format!("{ROOT_KEY}{SEPARATOR}{}", &key[..pos]);
            (container, key[pos + 1..].to_string())
        }
    }
}

/// Absolute container path for a logical container key.
pub(crate) fn container_path(key: &str) -> String {
    let trimmed = key.trim_end_matches(SEPARATOR);

    if trimmed.is_empty() {
        ROOT_KEY.to_string()
    } else {
        format!("{ROOT_KEY}{SEPARATOR}{trimmed}")
    }
}
