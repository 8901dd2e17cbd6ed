use std::sync::Mutex;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::store::Store;

/// In-memory fake used by the ledger and directory tests.
#[derive(Default)]
pub struct MemStore {
    employees: Mutex<Vec<Employee>>,
    attendance: Mutex<Vec<AttendanceRecord>>,
}

impl Store for MemStore {
    fn load_employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    fn save_employees(&self, employees: &[Employee]) -> anyhow::Result<()> {
        *self.employees.lock().unwrap() = employees.to_vec();
        Ok(())
    }

    fn load_attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance.lock().unwrap().clone()
    }

    fn save_attendance(&self, records: &[AttendanceRecord]) -> anyhow::Result<()> {
        *self.attendance.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
