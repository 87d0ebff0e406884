//! Persisting rendered pages under the destination directory.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;
use crate::types::Href;

/// Persists rendered content.
pub trait OutputWriter {
    /// Write `content` at `relative_path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutputPathEscapes` for paths leaving the output root,
    /// or `Error::Io` if the file or its directories cannot be written.
    fn write(&self, relative_path: &Path, content: &str) -> Result<(), Error>;
}

/// Writes files below a destination directory, creating directories as needed.
pub struct FsWriter {
    /// Output root.
    root: PathBuf,
}

impl FsWriter {
    /// Writer rooted at `root`. The directory is created on first write.
    pub const fn new(root: PathBuf) -> Self {
        return Self { root };
    }
}

impl OutputWriter for FsWriter {
    fn write(&self, relative_path: &Path, content: &str) -> Result<(), Error> {
        let stays_inside = relative_path
            .components()
            .all(|c| return matches!(c, Component::Normal(_) | Component::CurDir));
        if !stays_inside {
            return Err(Error::OutputPathEscapes { path: relative_path.to_path_buf() });
        }

        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote page");
        return Ok(());
    }
}

/// Relative page path for an href: `#/kind/enyo/Control` → `kind/enyo/Control.html`.
/// Characters that are awkward in file names become `_`.
pub fn page_path_for(href: &Href) -> PathBuf {
    let fragment = href.as_str().trim_start_matches('#').trim_start_matches('/');
    let mut sanitized: String = fragment
        .chars()
        .map(|c| {
            let keep = c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.');
            return if keep { c } else { '_' };
        })
        .collect();
    // Dot segments would climb out of the output root.
    sanitized = sanitized
        .split('/')
        .map(|part| return if part == "." || part == ".." { "_" } else { part })
        .collect::<Vec<_>>()
        .join("/");
    sanitized.push_str(".html");
    return PathBuf::from(sanitized);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_path_replaces_unsafe_characters() {
        let href = Href("#/kind/enyo/Control/Control:render".to_string());
        assert_eq!(page_path_for(&href), PathBuf::from("kind/enyo/Control/Control_render.html"));
    }

    #[test]
    fn page_path_keeps_member_hash_out() {
        let href = Href("#/member/Foo#bar".to_string());
        assert_eq!(page_path_for(&href), PathBuf::from("member/Foo_bar.html"));
    }

    #[test]
    fn page_path_neutralizes_dot_segments() {
        let href = Href("#/kind/../x".to_string());
        assert_eq!(page_path_for(&href), PathBuf::from("kind/_/x.html"));
    }

    #[test]
    fn writes_nested_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let writer = FsWriter::new(root.path().join("out"));
        let path = Path::new("kind/Foo.html");

        writer.write(path, "one").unwrap();
        writer.write(path, "two").unwrap();
        assert_eq!(std::fs::read_to_string(root.path().join("out/kind/Foo.html")).unwrap(), "two");
    }

    #[test]
    fn refuses_escaping_paths() {
        let root = tempfile::tempdir().unwrap();
        let writer = FsWriter::new(root.path().to_path_buf());
        assert!(matches!(
            writer.write(Path::new("../evil.html"), ""),
            Err(Error::OutputPathEscapes { .. })
        ));
    }
}
