use std::fs;
use std::path::Path;

use formwork_core::FormworkError;

/// The single file-writing primitive every emitter goes through.
/// Writes are whole-file, UTF-8 and non-transactional: a failure
/// partway through a run leaves earlier files in place.
pub struct FileWriter;

impl FileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Unconditional overwrite. Parent directories are created as needed.
    pub fn write(&self, path: &Path, content: &str) -> Result<(), FormworkError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Write only when the file does not exist yet. Returns whether a
    /// write happened. Used for the shared base layout, which must
    /// never clobber user customizations.
    pub fn write_if_absent(&self, path: &Path, content: &str) -> Result<bool, FormworkError> {
        if path.exists() {
            return Ok(false);
        }

        self.write(path, content)?;
        Ok(true)
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}
