//! Path Utilities
//!
//! POSIX-style path manipulation for deriving module specifiers. Paths
//! handled here are always absolute, `/`-separated module paths; no
//! filesystem access is involved.

/// Remove the final extension from a path, if any.
pub fn strip_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(pos) if !path[pos..].contains('/') => &path[..pos],
        _ => path,
    }
}

/// Get directory name from a path.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(pos) => &path[..pos],
        None => ".",
    }
}

/// Relative path from the directory `from_dir` to `to_path`, using `/`
/// separators and `..` segments where needed.
pub fn relative_path(from_dir: &str, to_path: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = to_path.split('/').filter(|s| !s.is_empty()).collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let mut segments: Vec<&str> = Vec::new();
    for _ in common..from.len() {
        segments.push("..");
    }
    segments.extend(&to[common..]);
    segments.join("/")
}

/// Module specifier for importing `to_module` from `from_module`:
/// relative, extension stripped, and `./`-prefixed unless the path
/// already climbs out of the current directory.
pub fn relative_import_specifier(from_module: &str, to_module: &str) -> String {
    let relative = relative_path(dirname(from_module), strip_extension(to_module));
    if relative.starts_with("..") {
        relative
    } else {
        format!("./{}", relative)
    }
}
