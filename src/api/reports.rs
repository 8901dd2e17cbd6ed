use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::ledger::AttendanceLedger;
use crate::model::attendance::AttendanceReport;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub employee_id: Option<String>,
}

// Empty or malformed date bounds are treated as unbounded.
fn parse_bound(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}

/// Attendance report over a date range
#[utoipa::path(
    get,
    path = "/api/reports/attendance",
    params(
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "Inclusive upper bound (YYYY-MM-DD)"),
        ("employee_id" = Option<String>, Query, description = "Restrict to one employee")
    ),
    responses(
        (status = 200, description = "Filtered records plus per-employee summary", body = AttendanceReport)
    ),
    tag = "Reports"
)]
pub async fn attendance_report(
    ledger: web::Data<AttendanceLedger>,
    query: web::Query<ReportQuery>,
) -> actix_web::Result<impl Responder> {
    let start_date = parse_bound(query.start_date.as_deref());
    let end_date = parse_bound(query.end_date.as_deref());
    let employee_id = query.employee_id.as_deref().filter(|s| !s.is_empty());

    Ok(HttpResponse::Ok().json(ledger.range_report(start_date, end_date, employee_id)))
}
