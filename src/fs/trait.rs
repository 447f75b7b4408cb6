//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over the file checks and reads used by collection and extraction,
/// so both can run against memory in tests
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn count_files<F: FileSystem>(fs: F, paths: &[&str]) -> usize {
        paths.iter().filter(|p| fs.is_file(Path::new(p))).count()
    }

    #[test]
    fn test_borrowed_file_system_delegates() {
        let fs = MockFileSystem::new();
        fs.add_file("app.js", "app.get('/');");
        fs.add_dir("routes");

        assert_eq!(count_files(&fs, &["/mock/app.js", "/mock/routes"]), 1);
        assert!((&fs).is_dir(Path::new("/mock/routes")));
        assert!((&fs).exists(Path::new("/mock/app.js")));
        assert_eq!(
            (&fs).read_to_string(Path::new("/mock/app.js")).unwrap(),
            "app.get('/');"
        );
    }
}
