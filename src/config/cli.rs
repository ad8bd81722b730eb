use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed storage. Reads resolve paths exactly as supplied by
/// the caller; writes land under the configured output directory, created
/// on first write.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_path: String,
}

impl LocalStorage {
    pub fn new(output_path: String) -> Self {
        Self { output_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
