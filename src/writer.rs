use crate::{
    document::Document,
    error::{Error, Result},
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Writes documents into the output directory.
pub(crate) struct Writer {
    output_dir: PathBuf,
}

impl Writer {
    /// Creates a writer targeting `output_dir`.
    pub(crate) fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the path a document will be written to.
    pub(crate) fn output_path(&self, document: &Document) -> PathBuf {
        self.output_dir.join(&document.filename)
    }

    /// Writes one document, creating the output directory if needed.
    ///
    /// An existing file with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory cannot be created
    /// - File write operations fail
    pub(crate) fn write(&self, document: &Document) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| Error::create_dir(&self.output_dir, e))?;

        let path = self.output_path(document);
        Self::write_file_atomic(&path, &document.content)?;

        debug!("Wrote {} ({} bytes)", path.display(), document.content.len());
        Ok(path)
    }

    /// Writes a file through a hidden temporary sibling and a rename.
    fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
        let temp_path = Self::temp_path(path);
        let mut temp_file = fs::File::create(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file
            .sync_all()
            .map_err(|e| Error::io(&temp_path, e))?;

        drop(temp_file);

        fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

        Ok(())
    }

    /// `.{filename}.tmp` next to `path`; never a valid document name.
    fn temp_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        path.with_file_name(format!(".{name}.tmp"))
    }
}
