//! Department API handlers

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::{header, StatusCode};

use crate::db::{self, RepoError};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Department, DepartmentCreate, DepartmentUpdate};
use crate::state::AppState;
use crate::validation;

/// Department router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/departments", get(list).post(create))
        .route(
            "/api/departments/{id}",
            get(get_by_id).put(update).delete(delete),
        )
}

fn map_repo_err(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::DepartmentNotFound, msg),
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::DepartmentNameExists, msg),
        RepoError::Conflict(msg) => {
            AppError::with_message(ErrorCode::DepartmentHasEmployees, msg)
        }
        RepoError::InvalidReference(msg) => AppError::with_message(ErrorCode::InvalidRequest, msg),
        RepoError::Database(msg) => AppError::database(msg),
    }
}

/// GET /api/departments - list all departments with employee counts
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = db::department::list_departments(&state.pool)
        .await
        .map_err(map_repo_err)?;
    Ok(Json(departments))
}

/// GET /api/departments/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let department = db::department::get_department(&state.pool, id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::DepartmentNotFound,
                format!("Department {id} not found"),
            )
        })?;
    Ok(Json(department))
}

/// POST /api/departments - create a department
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<impl IntoResponse> {
    validation::validate_department_name(&payload.name)?;

    let department = db::department::create_department(&state.pool, &payload)
        .await
        .map_err(map_repo_err)?;

    tracing::info!(department_id = department.department_id, "Department created");

    let location = format!("/api/departments/{}", department.department_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(department),
    ))
}

/// PUT /api/departments/:id - rename
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    validation::validate_department_name(&payload.name)?;

    let department = db::department::update_department(&state.pool, id, &payload)
        .await
        .map_err(map_repo_err)?;
    Ok(Json(department))
}

/// DELETE /api/departments/:id - rejected while employees reference it
async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    db::department::delete_department(&state.pool, id)
        .await
        .map_err(map_repo_err)?;

    tracing::info!(department_id = id, "Department deleted");

    Ok(StatusCode::NO_CONTENT)
}
