//! Employee database operations

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate};

// Every read resolves department_name through the join; it is never stored.
const SELECT_EMPLOYEE: &str = r#"
    SELECT e.employee_id, e.name, e.email, e.department_id,
           d.name AS department_name, e.role, e.salary, e.status, e.joining_date
    FROM employees e
    JOIN departments d ON d.department_id = e.department_id
"#;

/// List all employees with resolved department names, ordered by name.
pub async fn list_employees(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees: Vec<Employee> =
        sqlx::query_as(&format!("{SELECT_EMPLOYEE} ORDER BY e.name"))
            .fetch_all(pool)
            .await?;
    Ok(employees)
}

/// Find an employee by id.
pub async fn get_employee(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee: Option<Employee> =
        sqlx::query_as(&format!("{SELECT_EMPLOYEE} WHERE e.employee_id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

/// Find an employee id by email.
async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<i64>> {
    let id: Option<i64> = sqlx::query_scalar("SELECT employee_id FROM employees WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(id)
}

async fn department_exists(pool: &SqlitePool, department_id: i64) -> RepoResult<bool> {
    let id: Option<i64> =
        sqlx::query_scalar("SELECT department_id FROM departments WHERE department_id = $1")
            .bind(department_id)
            .fetch_optional(pool)
            .await?;
    Ok(id.is_some())
}

/// Create a new employee. The department must exist and the email must be
/// unused.
pub async fn create_employee(pool: &SqlitePool, data: &EmployeeCreate) -> RepoResult<Employee> {
    if !department_exists(pool, data.department_id).await? {
        return Err(RepoError::InvalidReference(format!(
            "Department {} does not exist",
            data.department_id
        )));
    }

    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' is already in use",
            data.email
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, email, department_id, role, salary, status, joining_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.department_id)
    .bind(&data.role)
    .bind(data.salary.to_string())
    .bind(data.status)
    .bind(data.joining_date)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get_employee(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Employee {id} missing after insert")))
}

/// Replace an employee record in full.
pub async fn update_employee(
    pool: &SqlitePool,
    id: i64,
    data: &EmployeeUpdate,
) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> =
        sqlx::query_scalar("SELECT employee_id FROM employees WHERE employee_id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    if existing.is_none() {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }

    let department: Option<i64> =
        sqlx::query_scalar("SELECT department_id FROM departments WHERE department_id = $1")
            .bind(data.department_id)
            .fetch_optional(&mut *tx)
            .await?;
    if department.is_none() {
        return Err(RepoError::InvalidReference(format!(
            "Department {} does not exist",
            data.department_id
        )));
    }

    // Check duplicate email if changing owner
    let email_owner: Option<i64> =
        sqlx::query_scalar("SELECT employee_id FROM employees WHERE email = $1")
            .bind(&data.email)
            .fetch_optional(&mut *tx)
            .await?;
    if let Some(other) = email_owner
        && other != id
    {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' is already in use",
            data.email
        )));
    }

    sqlx::query(
        r#"
        UPDATE employees SET
            name = $1, email = $2, department_id = $3, role = $4,
            salary = $5, status = $6, joining_date = $7
        WHERE employee_id = $8
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.department_id)
    .bind(&data.role)
    .bind(data.salary.to_string())
    .bind(data.status)
    .bind(data.joining_date)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    // Read back the updated record with its department name resolved
    let employee: Option<Employee> =
        sqlx::query_as(&format!("{SELECT_EMPLOYEE} WHERE e.employee_id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let employee =
        employee.ok_or_else(|| RepoError::Database(format!("Employee {id} missing after update")))?;

    tx.commit().await?;
    Ok(employee)
}

/// Hard delete an employee. No guard; employees are leaf records.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}

/// Total and active employee counts.
pub async fn employee_counts(pool: &SqlitePool) -> RepoResult<(i64, i64)> {
    let counts: (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(status), 0) FROM employees")
            .fetch_one(pool)
            .await?;
    Ok(counts)
}

/// All salaries, for exact-decimal aggregation in application code.
pub async fn employee_salaries(pool: &SqlitePool) -> RepoResult<Vec<Decimal>> {
    let raw: Vec<String> = sqlx::query_scalar("SELECT salary FROM employees")
        .fetch_all(pool)
        .await?;
    raw.into_iter()
        .map(|s| {
            s.parse::<Decimal>()
                .map_err(|e| RepoError::Database(format!("Invalid stored salary '{s}': {e}")))
        })
        .collect()
}

/// Employee counts grouped by department name, largest first.
pub async fn department_distribution(pool: &SqlitePool) -> RepoResult<Vec<(String, i64)>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT d.name, COUNT(*) AS count
        FROM employees e
        JOIN departments d ON d.department_id = e.department_id
        GROUP BY d.name
        ORDER BY count DESC, d.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
