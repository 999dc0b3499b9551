use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Backing store for a small text document (config file, high score record).
pub trait ContentProvider {
    /// `Ok(None)` means the document does not exist yet.
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read {}: {}", self.file_path.display(), err)),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path.display(), e))
    }
}

/// In-memory document, used by tests and as a stand-in when no file should be touched.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
    read_only: bool,
}

impl MemoryContentProvider {
    pub fn new(content: Option<&str>) -> Self {
        Self {
            content: Mutex::new(content.map(str::to_string)),
            read_only: false,
        }
    }

    /// Every write fails, mimicking an unwritable disk.
    pub fn read_only(content: Option<&str>) -> Self {
        Self {
            content: Mutex::new(content.map(str::to_string)),
            read_only: true,
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().expect("content lock poisoned").clone()
    }
}

impl ContentProvider for MemoryContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        Ok(self.content())
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        if self.read_only {
            return Err("storage is read-only".to_string());
        }
        *self.content.lock().expect("content lock poisoned") = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("snake_storage_test_{}.txt", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentProvider::new(get_temp_file_path());
        assert_eq!(provider.get_content(), Ok(None));
    }

    #[test]
    fn test_file_round_trip() {
        let path = get_temp_file_path();
        let provider = FileContentProvider::new(path.clone());
        provider.set_content("12,3").unwrap();
        assert_eq!(provider.get_content(), Ok(Some("12,3".to_string())));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("snake_storage_no_such_dir_4b1d")
            .join("record.txt");
        let provider = FileContentProvider::new(path);
        assert!(provider.set_content("1,1").is_err());
    }

    #[test]
    fn test_read_only_memory_provider_rejects_writes() {
        let provider = MemoryContentProvider::read_only(Some("5,2"));
        assert!(provider.set_content("6,2").is_err());
        assert_eq!(provider.content(), Some("5,2".to_string()));
    }
}
