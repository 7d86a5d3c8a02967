use std::io;
use std::path::{Component, Path, PathBuf};

/// The directory `/files/` requests are served from.
#[derive(Debug, Clone)]
pub struct ServedDir {
    root: PathBuf,
}

impl ServedDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` under the served directory.
    ///
    /// Returns `None` for names that could leave it: empty names, absolute
    /// paths, and anything with a `..` component.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let rel = Path::new(name);
        let mut parts = 0;
        for component in rel.components() {
            match component {
                Component::Normal(_) => parts += 1,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if parts == 0 {
            return None;
        }

        Some(self.root.join(rel))
    }

    pub async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Creates or truncates the file at `path` with `contents`.
    pub async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
