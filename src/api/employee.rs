//! Employee API handlers

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::{header, StatusCode};

use crate::db::{self, RepoError};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::state::AppState;
use crate::validation;

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list).post(create))
        .route(
            "/api/employees/{id}",
            get(get_by_id).put(update).delete(delete),
        )
}

fn map_repo_err(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::EmployeeNotFound, msg),
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::EmployeeEmailExists, msg),
        RepoError::InvalidReference(msg) => {
            AppError::with_message(ErrorCode::EmployeeDepartmentInvalid, msg)
        }
        RepoError::Conflict(msg) => AppError::with_message(ErrorCode::InvalidRequest, msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

/// GET /api/employees - list all employees with department names
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = db::employee::list_employees(&state.pool)
        .await
        .map_err(map_repo_err)?;
    Ok(Json(employees))
}

/// GET /api/employees/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = db::employee::get_employee(&state.pool, id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
        })?;
    Ok(Json(employee))
}

/// POST /api/employees - create an employee
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<impl IntoResponse> {
    validation::validate_employee(
        &payload.name,
        &payload.email,
        &payload.role,
        payload.salary,
        payload.joining_date,
    )?;

    let employee = db::employee::create_employee(&state.pool, &payload)
        .await
        .map_err(map_repo_err)?;

    tracing::info!(employee_id = employee.employee_id, "Employee created");

    let location = format!("/api/employees/{}", employee.employee_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// PUT /api/employees/:id - full-record replace
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validation::validate_employee(
        &payload.name,
        &payload.email,
        &payload.role,
        payload.salary,
        payload.joining_date,
    )?;

    let employee = db::employee::update_employee(&state.pool, id, &payload)
        .await
        .map_err(map_repo_err)?;
    Ok(Json(employee))
}

/// DELETE /api/employees/:id - unconditional delete
async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    db::employee::delete_employee(&state.pool, id)
        .await
        .map_err(map_repo_err)?;

    tracing::info!(employee_id = id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
