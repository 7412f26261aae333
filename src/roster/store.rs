//! Roster Store - file-backed storage for student records
//!
//! The store is the sole owner of the record collection and of the backing
//! file path for the lifetime of the process. All operations are synchronous
//! single passes over the in-memory roster; the backing file is opened,
//! fully read or written, and closed within a single call.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::{RosterReport, StudentRecord};
use crate::{Error, Result};

/// File-backed store of student records.
///
/// Records keep their insertion order, which doubles as display order.
/// Record ids are intended-unique: [`create`](Self::create) refuses
/// duplicates, but no uniqueness check is applied to loaded files.
///
/// The roster is loaded from the backing file at [`open`](Self::open) and
/// persisted on [`save`](Self::save) and when the store is dropped.
#[derive(Debug)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    path: PathBuf,
}

impl RosterStore {
    /// Open a store backed by the file at `path`.
    ///
    /// Reads the file line by line, skipping blank lines, and appends one
    /// record per line in file order. A missing file is treated as "no prior
    /// data" and yields an empty roster. Malformed lines are skipped with a
    /// warning rather than aborting the load; strict parsing is available
    /// via [`StudentRecord::from_line`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no backing file, starting empty");
                return Ok(Self {
                    records: Vec::new(),
                    path,
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match StudentRecord::from_line(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = idx + 1, %e, "skipping malformed roster line");
                    skipped += 1;
                }
            }
        }

        info!(
            path = %path.display(),
            records = records.len(),
            skipped,
            "roster loaded"
        );
        Ok(Self { records, path })
    }

    /// Persist the roster to the backing file, one line per record in
    /// roster order. The previous file contents are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    /// The in-memory roster is unaffected by a failed save.
    pub fn save(&self) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for record in &self.records {
            writeln!(writer, "{}", record.to_line())?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), records = self.records.len(), "roster saved");
        Ok(())
    }

    /// Add a record to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a record with the same id already
    /// exists; the roster is left unchanged.
    pub fn create(&mut self, record: StudentRecord) -> Result<()> {
        if self.find_by_id(record.id()).is_some() {
            return Err(Error::DuplicateId { id: record.id() });
        }
        self.records.push(record);
        Ok(())
    }

    /// Get the first record with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Get the first record with the given id, mutably.
    ///
    /// This is the handle for updating a located record: setters and
    /// course add/remove go through it.
    #[must_use]
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut StudentRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Get all records whose name contains `text` as a case-sensitive
    /// substring, in roster order. Empty when nothing matches.
    #[must_use]
    pub fn find_by_name(&self, text: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|r| r.name().contains(text))
            .collect()
    }

    /// Remove the first record with the given id, preserving the relative
    /// order of the remaining records, and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has the id.
    pub fn delete(&mut self, id: u32) -> Result<StudentRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound { id })?;
        Ok(self.records.remove(idx))
    }

    /// Compute the aggregate report: honor students in roster order plus
    /// average GPA and age.
    ///
    /// Returns `None` for an empty roster, where the averages are undefined.
    #[must_use]
    pub fn generate_report(&self) -> Option<RosterReport> {
        RosterReport::compute(&self.records)
    }

    /// Get the number of records in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records, in roster order.
    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Get the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RosterStore {
    /// Final save on destruction, mirroring the explicit-save path.
    ///
    /// Drop cannot report failure, so a failed save is logged and swallowed;
    /// callers who need the error use [`save`](Self::save) directly.
    fn drop(&mut self) {
        if let Err(e) = self.save() {
            error!(path = %self.path.display(), %e, "failed to save roster on drop");
        }
    }
}
