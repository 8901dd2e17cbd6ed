use actix_web::{HttpResponse, Responder, web};
use chrono::Local;

use crate::ledger::AttendanceLedger;
use crate::model::attendance::DashboardStats;

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Today's headline counts and recent activity", body = DashboardStats)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_stats(
    ledger: web::Data<AttendanceLedger>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();
    Ok(HttpResponse::Ok().json(ledger.dashboard_stats(today)))
}
