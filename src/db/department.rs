//! Department database operations

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::models::{Department, DepartmentCreate, DepartmentUpdate};

/// List all departments with their live employee counts, ordered by name.
pub async fn list_departments(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments: Vec<Department> = sqlx::query_as(
        r#"
        SELECT d.department_id, d.name, COUNT(e.employee_id) AS employee_count
        FROM departments d
        LEFT JOIN employees e ON e.department_id = d.department_id
        GROUP BY d.department_id, d.name
        ORDER BY d.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

/// Find a department by id, with its live employee count.
pub async fn get_department(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department: Option<Department> = sqlx::query_as(
        r#"
        SELECT d.department_id, d.name,
               (SELECT COUNT(*) FROM employees e WHERE e.department_id = d.department_id)
                   AS employee_count
        FROM departments d
        WHERE d.department_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// Find a department id by name.
async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<i64>> {
    let id: Option<i64> =
        sqlx::query_scalar("SELECT department_id FROM departments WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
    Ok(id)
}

/// Create a new department. A fresh department has no employees.
pub async fn create_department(
    pool: &SqlitePool,
    data: &DepartmentCreate,
) -> RepoResult<Department> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Department '{}' already exists",
            data.name
        )));
    }

    let result = sqlx::query("INSERT INTO departments (name) VALUES ($1)")
        .bind(&data.name)
        .execute(pool)
        .await?;

    Ok(Department {
        department_id: result.last_insert_rowid(),
        name: data.name.clone(),
        employee_count: 0,
    })
}

/// Rename a department.
pub async fn update_department(
    pool: &SqlitePool,
    id: i64,
    data: &DepartmentUpdate,
) -> RepoResult<Department> {
    get_department(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))?;

    if let Some(other) = find_by_name(pool, &data.name).await?
        && other != id
    {
        return Err(RepoError::Duplicate(format!(
            "Department '{}' already exists",
            data.name
        )));
    }

    sqlx::query("UPDATE departments SET name = $1 WHERE department_id = $2")
        .bind(&data.name)
        .bind(id)
        .execute(pool)
        .await?;

    get_department(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}

/// Delete a department, guarded: rejected while any employee references it.
///
/// The count check and the delete run in one transaction; the FK constraint
/// on employees remains the backstop for inserts racing the delete.
pub async fn delete_department(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE department_id = $1")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    if count > 0 {
        return Err(RepoError::Conflict(format!(
            "Cannot delete department {id}: {count} employee(s) still assigned"
        )));
    }

    let result = sqlx::query("DELETE FROM departments WHERE department_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Department {id} not found")));
    }

    tx.commit().await?;
    Ok(())
}
