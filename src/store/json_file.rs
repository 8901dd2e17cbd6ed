use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::store::Store;

/// Flat-file store: one pretty-printed JSON array per collection under the
/// configured data directory.
pub struct JsonFileStore {
    employees_path: PathBuf,
    attendance_path: PathBuf,
}

impl JsonFileStore {
    /// Creates the data directory and seeds missing collection files with
    /// empty lists, so a fresh deployment starts from a known state.
    pub fn new(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

        let store = Self {
            employees_path: data_dir.join("employees.json"),
            attendance_path: data_dir.join("attendance.json"),
        };
        for path in [&store.employees_path, &store.attendance_path] {
            if !path.exists() {
                fs::write(path, "[]")
                    .with_context(|| format!("failed to init {}", path.display()))?;
            }
        }
        Ok(store)
    }

    fn load_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read store file, loading empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed store file, loading empty");
                Vec::new()
            }
        }
    }

    fn save_list<T: Serialize>(path: &Path, list: &[T]) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(list)?;
        fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }
}

impl Store for JsonFileStore {
    fn load_employees(&self) -> Vec<Employee> {
        Self::load_list(&self.employees_path)
    }

    fn save_employees(&self, employees: &[Employee]) -> anyhow::Result<()> {
        Self::save_list(&self.employees_path, employees)
    }

    fn load_attendance(&self) -> Vec<AttendanceRecord> {
        Self::load_list(&self.attendance_path)
    }

    fn save_attendance(&self, records: &[AttendanceRecord]) -> anyhow::Result<()> {
        Self::save_list(&self.attendance_path, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u64) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: "EMP001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_in: Some("09:00:00".to_string()),
            check_out: None,
            status: "present".to_string(),
        }
    }

    #[test]
    fn new_seeds_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.load_employees().is_empty());
        assert!(store.load_attendance().is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("attendance.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn round_trips_attendance() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        store.save_attendance(&[record(1), record(2)]).unwrap();

        let loaded = store.load_attendance();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[0].check_in.as_deref(), Some("09:00:00"));
        assert!(loaded[0].check_out.is_none());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("attendance.json"), "{not json").unwrap();
        assert!(store.load_attendance().is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::remove_file(dir.path().join("employees.json")).unwrap();
        assert!(store.load_employees().is_empty());
    }
}
