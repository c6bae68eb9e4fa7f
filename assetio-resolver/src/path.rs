//! Lexical path helpers used by the default resolver.
//!
//! None of these touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Collapses `.`, `..` and repeated separators without resolving links.
///
/// `..` above the root is dropped; leading `..` of a relative path is kept.
/// A relative path that collapses to nothing becomes `"."`.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut out = PathBuf::new();
    let mut depth = 0usize;
    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        return ".".to_string();
    }
    out.to_string_lossy().into_owned()
}

/// Whether `path` is explicitly relative to its anchor (`./` or `../`).
#[must_use]
pub fn is_file_relative(path: &str) -> bool {
    path.starts_with("./") || path.starts_with("../") || path == "." || path == ".."
}

/// Whether `path` is a bare relative path to look up on the search paths.
#[must_use]
pub fn is_search_path(path: &str) -> bool {
    !path.is_empty() && !Path::new(path).is_absolute() && !is_file_relative(path)
}

/// Anchors `path` to the directory containing `anchor`.
#[must_use]
pub fn anchor_to(anchor: &str, path: &str) -> String {
    if Path::new(path).is_absolute() {
        return normalize(path);
    }
    let dir = Path::new(anchor).parent().unwrap_or(Path::new(""));
    normalize(&dir.join(path).to_string_lossy())
}

/// Makes `path` absolute against `working_dir` and normalizes it.
#[must_use]
pub fn absolute(path: &str, working_dir: &Path) -> String {
    if Path::new(path).is_absolute() {
        normalize(path)
    } else {
        normalize(&working_dir.join(path).to_string_lossy())
    }
}

/// Extension of the final path component, without the dot.
///
/// Dot-files such as `.hidden` have no extension.
#[must_use]
pub fn extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
