use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::directory::EmployeeDirectory;
use crate::model::employee::{Employee, NewEmployee, UpdateEmployee};

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employee profiles", body = Vec<Employee>)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    directory: web::Data<EmployeeDirectory>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(directory.list()))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee created", body = Object, example = json!({
            "success": true,
            "employee": {
                "id": "EMP001",
                "name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "position": "Developer",
                "phone": "+8801712345678",
                "join_date": "2024-01-01",
                "status": "active"
            }
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    directory: web::Data<EmployeeDirectory>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee = directory.add(payload.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "employee": employee,
    })))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID, e.g. EMP001")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Object, example = json!({
            "success": true
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    directory: web::Data<EmployeeDirectory>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployee>,
) -> actix_web::Result<impl Responder> {
    directory.update(&path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Employee deleted (idempotent)", body = Object, example = json!({
            "success": true
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    directory: web::Data<EmployeeDirectory>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    directory.delete(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
