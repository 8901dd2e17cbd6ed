use crate::api::attendance::{CheckRequest, ManualAttendanceRequest};
use crate::model::attendance::{
    AttendanceRecord, AttendanceReport, DashboardStats, RecentActivity, ReportSummary, TodayRecord,
};
use crate::model::employee::{Employee, EmployeeStatus, NewEmployee, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracker

Records employee profiles and daily check-in/check-out events, and derives
reports from them.

### 🔹 Key Features
- **Employee Directory**
  - Create, update, list, and delete employee profiles
- **Attendance Tracking**
  - Daily check-in/check-out with one record per employee per day
  - Manual corrections for admins
- **Dashboard & Reports**
  - Today's presence counts and average work hours
  - Per-employee summaries over a date range

### 📦 Response Format
- JSON-based RESTful responses
- Errors carry `{"success": false, "message": ...}`

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::today_attendance,
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::manual_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::dashboard::dashboard_stats,
        crate::api::reports::attendance_report
    ),
    components(
        schemas(
            Employee,
            EmployeeStatus,
            NewEmployee,
            UpdateEmployee,
            AttendanceRecord,
            TodayRecord,
            RecentActivity,
            DashboardStats,
            ReportSummary,
            AttendanceReport,
            CheckRequest,
            ManualAttendanceRequest
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Dashboard", description = "Dashboard statistics APIs"),
        (name = "Reports", description = "Attendance reporting APIs"),
    )
)]
pub struct ApiDoc;
