use crate::domain::ports::Storage;
use crate::utils::error::{FlipError, Result};
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    type Input = BufReader<File>;
    type Output = File;

    fn open_input(&self, path: &Path) -> Result<Self::Input> {
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|source| open_error(path, source))?;
        Ok(BufReader::new(file))
    }

    fn create_output(&self, path: &Path) -> Result<Self::Output> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| open_error(path, source))
    }
}

fn open_error(path: &Path, source: std::io::Error) -> FlipError {
    FlipError::Open {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalStorage::new()
            .open_input(&temp_dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, FlipError::Open { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_create_output_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut out = LocalStorage::new().create_output(&path).unwrap();
        out.write_all(b"1\n").unwrap();
        drop(out);

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "1\n");
    }

    #[test]
    fn test_output_in_missing_directory_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalStorage::new()
            .create_output(&temp_dir.path().join("no/such/dir/out.txt"))
            .unwrap_err();
        assert!(matches!(err, FlipError::Open { .. }));
    }
}
