use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use tracing::info;

use crate::error::LedgerError;
use crate::model::employee::{Employee, EmployeeStatus, NewEmployee, UpdateEmployee};
use crate::store::Store;

/// Employee profiles keyed by "EMP"-prefixed id. Mutations run a full
/// load-mutate-save cycle against the store, serialized by an internal lock.
pub struct EmployeeDirectory {
    store: Arc<dyn Store>,
    write_lock: Mutex<()>,
}

impl EmployeeDirectory {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn list(&self) -> Vec<Employee> {
        self.store.load_employees()
    }

    pub fn get(&self, employee_id: &str) -> Option<Employee> {
        self.store
            .load_employees()
            .into_iter()
            .find(|e| e.id == employee_id)
    }

    /// Adds an employee with the next free "EMP" id: max existing numeric
    /// suffix + 1, or EMP001 when the directory is empty.
    pub fn add(&self, new: NewEmployee) -> Result<Employee, LedgerError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.store.load_employees();
        let employee = Employee {
            id: next_employee_id(&employees),
            name: new.name,
            email: new.email,
            department: new.department,
            position: new.position,
            phone: new.phone,
            join_date: new.join_date.unwrap_or_else(|| Local::now().date_naive()),
            status: EmployeeStatus::Active,
        };
        info!(employee_id = %employee.id, "Employee added");
        employees.push(employee.clone());
        self.store.save_employees(&employees)?;
        Ok(employee)
    }

    /// Overwrites only the supplied fields. Updating an id that does not
    /// exist is a silent no-op.
    pub fn update(&self, employee_id: &str, update: UpdateEmployee) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.store.load_employees();
        if let Some(emp) = employees.iter_mut().find(|e| e.id == employee_id) {
            if let Some(name) = update.name {
                emp.name = name;
            }
            if let Some(email) = update.email {
                emp.email = email;
            }
            if let Some(department) = update.department {
                emp.department = department;
            }
            if let Some(position) = update.position {
                emp.position = position;
            }
            if let Some(phone) = update.phone {
                emp.phone = phone;
            }
            if let Some(status) = update.status {
                emp.status = status;
            }
        }
        self.store.save_employees(&employees)?;
        Ok(())
    }

    /// Removes the employee; idempotent. Attendance records referencing the
    /// id are left in place and resolve to "Unknown" on display.
    pub fn delete(&self, employee_id: &str) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.store.load_employees();
        employees.retain(|e| e.id != employee_id);
        self.store.save_employees(&employees)?;
        Ok(())
    }
}

fn next_employee_id(employees: &[Employee]) -> String {
    let max_suffix = employees
        .iter()
        .filter_map(|e| e.id.strip_prefix("EMP").and_then(|s| s.parse::<u32>().ok()))
        .max();
    match max_suffix {
        Some(n) => format!("EMP{:03}", n + 1),
        None => "EMP001".to_string(),
    }
}
