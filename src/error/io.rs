use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan directory '{path}': {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn directory_scan_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::DirectoryScanError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IoError::read_error("/path/to/node.cpp", source);
        assert!(err
            .to_string()
            .starts_with("failed to read file '/path/to/node.cpp'"));
    }

    #[test]
    fn test_directory_scan_error_display() {
        let path = PathBuf::from("/nonexistent/scan/root");
        let walk_result = walkdir::WalkDir::new(&path).into_iter().next();
        let Some(Err(source)) = walk_result else {
            panic!("Expected walkdir error but got success");
        };

        let err = IoError::directory_scan_error(&path, source);
        assert!(err.to_string().contains("/nonexistent/scan/root"));
    }
}
