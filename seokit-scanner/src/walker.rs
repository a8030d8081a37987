use crate::error::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory names never descended into, besides anything starting with `.`.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "vendor", "__pycache__"];

/// Lazy depth-first walk yielding every `.html`/`.htm` file under a root.
///
/// Entries of each directory are visited in file-name order. Directories that
/// cannot be listed are logged and skipped. Symlinked directories are not
/// followed.
pub struct HtmlFileWalker {
    stack: Vec<std::vec::IntoIter<PathBuf>>,
}

impl HtmlFileWalker {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let entries = list_dir(root).map_err(|source| ScanError::Read {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            stack: vec![entries.into_iter()],
        })
    }
}

impl Iterator for HtmlFileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let path = match self.stack.last_mut()?.next() {
                Some(path) => path,
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let file_type = match fs::symlink_metadata(&path) {
                Ok(meta) => meta.file_type(),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                if is_excluded_dir(&path) {
                    debug!("Skipping excluded directory {}", path.display());
                    continue;
                }
                match list_dir(&path) {
                    Ok(entries) => {
                        debug!("Descending into {}", path.display());
                        self.stack.push(entries.into_iter());
                    }
                    Err(e) => warn!("Cannot read directory {}: {}", path.display(), e),
                }
                continue;
            }

            if is_html_file(&path) && path.is_file() {
                return Some(path);
            }
        }
    }
}

/// True for `.html` and `.htm` files, ignoring case.
pub fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

fn is_excluded_dir(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .map(|name| name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref()))
        .unwrap_or(false)
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html_file_case_insensitive() {
        assert!(is_html_file(Path::new("index.html")));
        assert!(is_html_file(Path::new("about.HTM")));
        assert!(is_html_file(Path::new("dir/Page.Html")));
        assert!(!is_html_file(Path::new("style.css")));
        assert!(!is_html_file(Path::new("html")));
        assert!(!is_html_file(Path::new("notes.html.bak")));
    }

    #[test]
    fn test_is_excluded_dir() {
        assert!(is_excluded_dir(Path::new("site/.git")));
        assert!(is_excluded_dir(Path::new("site/node_modules")));
        assert!(is_excluded_dir(Path::new("vendor")));
        assert!(is_excluded_dir(Path::new("__pycache__")));
        assert!(!is_excluded_dir(Path::new("site/blog")));
        assert!(!is_excluded_dir(Path::new("site/vendors")));
    }
}
