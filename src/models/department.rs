//! Department model

use serde::{Deserialize, Serialize};

/// Department record
///
/// `employee_count` is derived at read time from the employees table and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub name: String,
    pub employee_count: i64,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub name: String,
}

/// Update department payload (rename only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    pub name: String,
}
