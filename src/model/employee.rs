use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "EMP001",
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "position": "Developer",
        "phone": "+8801712345678",
        "join_date": "2024-01-01",
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = "EMP001")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Developer")]
    pub position: String,

    #[schema(example = "+8801712345678")]
    pub phone: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub join_date: NaiveDate,

    #[schema(example = "active")]
    pub status: EmployeeStatus,
}

/// Payload for directory add; id and status are assigned by the directory.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Developer")]
    pub position: String,
    #[schema(example = "+8801712345678")]
    pub phone: String,
    /// Defaults to today when absent.
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub join_date: Option<NaiveDate>,
}

/// Partial update; absent fields keep their prior values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub status: Option<EmployeeStatus>,
}
