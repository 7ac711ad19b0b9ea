//! Filesystem abstraction layer for testability
//!
//! The lease resolver reads the DHCP lease file on every lookup. Routing
//! that read through a trait lets unit tests feed lease blobs without a
//! real file. Uses mockall for automatic mock generation in test builds.

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait abstracting filesystem operations for dependency injection.
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation using std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_real_fs_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("leases");
        std::fs::write(&path, "lease 10.0.0.5 {\n}").unwrap();

        let fs = RealFileSystem;
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "lease 10.0.0.5 {\n}");
    }

    #[test]
    fn test_real_fs_missing_file() {
        let fs = RealFileSystem;
        let path = Path::new("/nonexistent/macgate/leases");
        assert!(!fs.exists(path));
        let err = fs.read_to_string(path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_mock_fs() {
        let mut mock = MockFileSystem::new();
        mock.expect_read_to_string()
            .returning(|_| Ok("lease 10.0.0.5 {\n}".to_string()));
        let content = mock.read_to_string(Path::new("/anything")).unwrap();
        assert!(content.starts_with("lease"));
    }
}
