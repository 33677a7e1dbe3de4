//! Employee statistics handlers

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Aggregated employee statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatistics {
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_salary: Decimal,
    pub department_distribution: Vec<DepartmentCount>,
}

/// Employees per department
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

/// Statistics router
pub fn router() -> Router<AppState> {
    Router::new().route("/api/employees/statistics", get(get_statistics))
}

/// GET /api/employees/statistics - aggregate over the full employee set
async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<EmployeeStatistics>> {
    let (total, active) = db::employee::employee_counts(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let salaries = db::employee::employee_salaries(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let distribution = db::employee::department_distribution(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Arithmetic mean in exact decimal arithmetic; 0 for an empty set
    let average_salary = if salaries.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = salaries.iter().copied().sum();
        sum / Decimal::from(salaries.len() as u64)
    };

    Ok(Json(EmployeeStatistics {
        total_employees: total,
        active_employees: active,
        inactive_employees: total - active,
        average_salary,
        department_distribution: distribution
            .into_iter()
            .map(|(department, count)| DepartmentCount { department, count })
            .collect(),
    }))
}
