use std::path::{Path, PathBuf};

use crate::roster::StudentRecord;
use crate::store::{NewStudent, StoreError, StudentStore};

/// File-backed store: one JSON array holding the whole roster, read once at
/// construction and rewritten after every mutation. Records are addressed by
/// positional index; no record reference is ever persisted.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    records: Vec<StudentRecord>,
}

impl LocalStore {
    /// A missing file is a fresh roster; a present-but-unreadable one is a
    /// backend failure so the operator sees it rather than silently losing
    /// data to an overwrite.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let records = match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str::<Vec<StudentRecord>>(&raw).map_err(|e| {
                StoreError::BackendUnavailable(format!(
                    "malformed roster file {}: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::BackendUnavailable(format!(
                    "cannot read roster file {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(LocalStore {
            path: path.to_path_buf(),
            records,
        })
    }

    fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.records)
            .map_err(|e| StoreError::BackendUnavailable(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| {
            StoreError::BackendUnavailable(format!(
                "cannot write roster file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    fn resolve_index(&self, record_ref: &str) -> Result<usize, StoreError> {
        record_ref
            .parse::<usize>()
            .ok()
            .filter(|i| *i < self.records.len())
            .ok_or_else(|| StoreError::NotFound(format!("no student at index {record_ref}")))
    }
}

impl StudentStore for LocalStore {
    fn list(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let mut r = r.clone();
                r.record_ref = Some(i.to_string());
                r
            })
            .collect())
    }

    fn add(&mut self, new: &NewStudent) -> Result<StudentRecord, StoreError> {
        new.validate()?;
        let record = StudentRecord {
            id: new.id.trim().to_string(),
            name: new.name.trim().to_string(),
            phone: new.phone.trim().to_string(),
            paid: false,
            date_paid: None,
            record_ref: None,
        };
        self.records.push(record.clone());
        self.save()?;
        let mut created = record;
        created.record_ref = Some((self.records.len() - 1).to_string());
        Ok(created)
    }

    fn set_paid(&mut self, record_ref: &str, new_value: bool) -> Result<(), StoreError> {
        let idx = self.resolve_index(record_ref)?;
        let record = &mut self.records[idx];
        record.paid = new_value;
        record.date_paid = if new_value { Some(Self::today()) } else { None };
        self.save()
    }

    fn fetch_one(&self, record_ref: &str) -> Result<StudentRecord, StoreError> {
        let idx = self.resolve_index(record_ref)?;
        let mut r = self.records[idx].clone();
        r.record_ref = Some(idx.to_string());
        Ok(r)
    }
}
