use std::path::{Component, Path, PathBuf};

/// Resolves a request path to a file under the served root.
///
/// The literal path `/` maps to the configured index file. Every other path
/// is joined onto the root segment by segment; `..` segments and absolute
/// re-anchoring components are rejected so a request can never name a file
/// outside the root. Returns `None` for rejected paths.
pub fn resolve_path(root: &Path, index: &str, request_path: &str) -> Option<PathBuf> {
    if request_path == "/" {
        return Some(root.join(index));
    }

    let relative = request_path.strip_prefix('/')?;
    let mut resolved = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            // Anything that could climb out of or re-anchor the root.
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            Component::CurDir => {}
        }
    }

    Some(resolved)
}
