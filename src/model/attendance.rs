use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One attendance entry, keyed by (employee_id, date). Check-in/out times
/// are kept as raw "HH:MM:SS" strings: manual edits may store anything, and
/// unparseable values are simply excluded from hours aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "date": "2024-01-01",
        "check_in": "09:00:00",
        "check_out": "17:00:00",
        "status": "present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "09:00:00", nullable = true)]
    pub check_in: Option<String>,

    #[schema(example = "17:00:00", nullable = true)]
    pub check_out: Option<String>,

    #[schema(example = "present")]
    pub status: String,
}

/// Today's record joined with directory info for the live attendance view.
#[derive(Debug, Serialize, ToSchema)]
pub struct TodayRecord {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// Recent-activity entry on the dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecentActivity {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    #[schema(example = "John Doe")]
    pub employee_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 10)]
    pub total_employees: usize,
    #[schema(example = 4)]
    pub present_today: usize,
    #[schema(example = 5)]
    pub checked_out_today: usize,
    /// total_employees minus today's record count; goes negative when
    /// records exist for ids the directory no longer enumerates.
    #[schema(example = 1)]
    pub absent_today: i64,
    #[schema(example = 7.52)]
    pub avg_work_hours: f64,
    pub recent_activity: Vec<RecentActivity>,
}

/// Per-employee aggregate over a report range.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportSummary {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 20)]
    pub total_days: u32,
    #[schema(example = 18)]
    pub present_days: u32,
    #[schema(example = 2)]
    pub absent_days: u32,
    #[schema(example = 144.0)]
    pub total_hours: f64,
    #[schema(example = 8.0)]
    pub avg_hours: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceReport {
    pub records: Vec<AttendanceRecord>,
    pub summary: Vec<ReportSummary>,
}
