use super::OutputWriter;
use crate::Result;
use crate::format::{Format, RecordFormatter};
use crate::record::Record;
use crate::settings::PackageSettings;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Append-only log file, JSON lines by default.
pub struct FileWriter {
    file_path: PathBuf,
    settings: PackageSettings,
    formatter: RecordFormatter,
}

impl FileWriter {
    pub fn new(file_path: impl Into<PathBuf>, settings: PackageSettings) -> Self {
        Self {
            file_path: file_path.into(),
            settings,
            formatter: RecordFormatter::new(Format::Json),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.formatter = RecordFormatter::new(format);
        self
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Ensure directory exists
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append one line.
    ///
    /// # Concurrency Strategy
    /// The file is held under `fs2::lock_exclusive` for the duration of the
    /// write, so several processes can share one log file.
    fn append(&self, line: &str) -> Result<()> {
        self.ensure_dir()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        file.lock_exclusive()?;
        writeln!(file, "{}", line)?;

        // lock released on close
        drop(file);

        Ok(())
    }
}

impl OutputWriter for FileWriter {
    fn init(&self) {
        if let Err(e) = self.ensure_dir() {
            warn!(
                "Failed to create log directory for {}: {}",
                self.file_path.display(),
                e
            );
        }
    }

    fn write(&self, record: &Record) {
        if !self.settings.is_enabled(&record.package, record.level) {
            return;
        }

        if let Err(e) = self.append(&self.formatter.format(record)) {
            warn!(
                "Failed to write log record to {}: {}",
                self.file_path.display(),
                e
            );
        }
    }
}
