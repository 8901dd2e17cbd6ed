use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;

mod json_file;
#[cfg(test)]
mod memory;

pub use json_file::JsonFileStore;
#[cfg(test)]
pub use memory::MemStore;

/// Persistence collaborator. Both collections are full-snapshot load/save:
/// there is no partial update, so callers must serialize their own
/// load-mutate-save cycles.
pub trait Store: Send + Sync {
    /// Loads all employees; an absent or unreadable backing store yields an
    /// empty list rather than an error.
    fn load_employees(&self) -> Vec<Employee>;

    fn save_employees(&self, employees: &[Employee]) -> anyhow::Result<()>;

    /// Loads all attendance records, empty on an absent/unreadable store.
    fn load_attendance(&self) -> Vec<AttendanceRecord>;

    fn save_attendance(&self, records: &[AttendanceRecord]) -> anyhow::Result<()>;
}
