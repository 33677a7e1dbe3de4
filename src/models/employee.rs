//! Employee model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Employee record
///
/// `department_name` is resolved by joining the departments table at read
/// time and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub department_name: String,
    pub role: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub status: bool,
    pub joining_date: NaiveDate,
}

// Manual row mapping: salary is stored as its exact decimal text form
// (sqlx has no SQLite Decimal support).
impl<'r> sqlx::FromRow<'r, SqliteRow> for Employee {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let salary: String = row.try_get("salary")?;
        let salary = salary
            .parse::<Decimal>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "salary".into(),
                source: Box::new(e),
            })?;

        Ok(Self {
            employee_id: row.try_get("employee_id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            department_id: row.try_get("department_id")?,
            department_name: row.try_get("department_name")?,
            role: row.try_get("role")?,
            salary,
            status: row.try_get("status")?,
            joining_date: row.try_get("joining_date")?,
        })
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub role: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    #[serde(default = "default_true")]
    pub status: bool,
    pub joining_date: NaiveDate,
}

/// Update employee payload (full replace, every field re-supplied)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub role: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub status: bool,
    pub joining_date: NaiveDate,
}

fn default_true() -> bool {
    true
}
