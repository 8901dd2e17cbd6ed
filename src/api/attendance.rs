use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::error::LedgerError;
use crate::ledger::AttendanceLedger;
use crate::model::attendance::{AttendanceRecord, TodayRecord};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub employee_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CheckRequest {
    #[serde(default)]
    #[schema(example = "EMP001")]
    pub employee_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ManualAttendanceRequest {
    #[serde(default)]
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "09:00:00", nullable = true)]
    pub check_in: Option<String>,
    #[schema(example = "17:00:00", nullable = true)]
    pub check_out: Option<String>,
    #[schema(example = "present", nullable = true)]
    pub status: Option<String>,
}

/// List attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(
        ("employee_id" = Option<String>, Query, description = "Filter by employee ID"),
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Filtered records, newest first", body = Vec<AttendanceRecord>)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    ledger: web::Data<AttendanceLedger>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = query.employee_id.as_deref().filter(|s| !s.is_empty());

    // An empty date param means "no filter"; a malformed one matches nothing.
    let date = match query.date.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(_) => return Ok(HttpResponse::Ok().json(Vec::<AttendanceRecord>::new())),
        },
        None => None,
    };

    Ok(HttpResponse::Ok().json(ledger.list_records(employee_id, date)))
}

/// Today's attendance with employee info
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    responses(
        (status = 200, description = "Today's records with employee name and department", body = Vec<TodayRecord>)
    ),
    tag = "Attendance"
)]
pub async fn today_attendance(
    ledger: web::Data<AttendanceLedger>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();
    Ok(HttpResponse::Ok().json(ledger.today_view(today)))
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/checkin",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Checked in", body = Object, example = json!({
            "success": true, "message": "Check-in successful", "time": "09:00:00"
        })),
        (status = 400, description = "Missing employee ID or already checked in today"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    ledger: web::Data<AttendanceLedger>,
    payload: web::Json<CheckRequest>,
) -> actix_web::Result<impl Responder> {
    let now = Local::now();
    let time = ledger.check_in(&payload.employee_id, now.date_naive(), now.time())?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Check-in successful",
        "time": time,
    })))
}

/// Check-out endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/checkout",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Checked out", body = Object, example = json!({
            "success": true, "message": "Check-out successful", "time": "17:00:00"
        })),
        (status = 400, description = "Missing employee ID, no check-in record, or already checked out")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    ledger: web::Data<AttendanceLedger>,
    payload: web::Json<CheckRequest>,
) -> actix_web::Result<impl Responder> {
    let now = Local::now();
    match ledger.check_out(&payload.employee_id, now.date_naive(), now.time()) {
        Ok(time) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Check-out successful",
            "time": time,
        }))),
        // This endpoint reports a missing record as 400, not 404.
        Err(e @ LedgerError::NotFound(_)) => Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": e.to_string(),
        }))),
        Err(e) => Err(e.into()),
    }
}

/// Manual attendance upsert (admin)
#[utoipa::path(
    post,
    path = "/api/attendance/manual",
    request_body = ManualAttendanceRequest,
    responses(
        (status = 200, description = "Record created or updated", body = Object, example = json!({
            "success": true
        }))
    ),
    tag = "Attendance"
)]
pub async fn manual_attendance(
    ledger: web::Data<AttendanceLedger>,
    payload: web::Json<ManualAttendanceRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    ledger.manual_upsert(
        &payload.employee_id,
        payload.date,
        payload.check_in,
        payload.check_out,
        payload.status,
    )?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Delete attendance record
#[utoipa::path(
    delete,
    path = "/api/attendance/{record_id}",
    params(
        ("record_id" = u64, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted (idempotent)", body = Object, example = json!({
            "success": true
        }))
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    ledger: web::Data<AttendanceLedger>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    ledger.delete_record(path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
