//! Input validation
//!
//! Centralized text length constants and field validation for the CRUD
//! handlers. All constraints are enforced server-side; the UI performs the
//! same checks client-side but is not trusted. Failures collect every
//! offending field into the error details.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};

// ── Field limits ────────────────────────────────────────────────────

/// Employee and department names
pub const MAX_NAME_LEN: usize = 100;

/// Email addresses (column width, not RFC 5321)
pub const MAX_EMAIL_LEN: usize = 100;

/// Free-text role titles
pub const MAX_ROLE_LEN: usize = 50;

/// Upper salary bound, rejects clearly malformed input
pub const MAX_SALARY: i64 = 10_000_000;

/// Earliest accepted joining date
pub const MIN_JOINING_YEAR: i32 = 1900;

// ── Validators ──────────────────────────────────────────────────────

/// Validate the mutable fields of an employee (create and full-replace
/// update share the same rules).
pub fn validate_employee(
    name: &str,
    email: &str,
    role: &str,
    salary: Decimal,
    joining_date: NaiveDate,
) -> AppResult<()> {
    let mut errors: Vec<(&'static str, String)> = Vec::new();

    if name.trim().is_empty() {
        errors.push(("name", "must not be empty".into()));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(("name", format!("must be at most {MAX_NAME_LEN} characters")));
    } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        errors.push(("name", "may only contain letters and spaces".into()));
    }

    if email.trim().is_empty() {
        errors.push(("email", "must not be empty".into()));
    } else if email.len() > MAX_EMAIL_LEN {
        errors.push(("email", format!("must be at most {MAX_EMAIL_LEN} characters")));
    } else if !email.validate_email() {
        errors.push(("email", "must be a valid email address".into()));
    }

    if role.trim().is_empty() {
        errors.push(("role", "must not be empty".into()));
    } else if role.len() > MAX_ROLE_LEN {
        errors.push(("role", format!("must be at most {MAX_ROLE_LEN} characters")));
    }

    if salary <= Decimal::ZERO {
        errors.push(("salary", "must be positive".into()));
    } else if salary > Decimal::from(MAX_SALARY) {
        errors.push(("salary", format!("must be at most {MAX_SALARY}")));
    } else if salary.round_dp(2) != salary {
        errors.push(("salary", "may have at most 2 decimal places".into()));
    }

    let today = Utc::now().date_naive();
    if joining_date > today {
        errors.push(("joiningDate", "must not be in the future".into()));
    } else if joining_date.year() < MIN_JOINING_YEAR {
        errors.push(("joiningDate", format!("must not predate {MIN_JOINING_YEAR}")));
    }

    collect(errors)
}

/// Validate a department name (create and rename share the same rules).
pub fn validate_department_name(name: &str) -> AppResult<()> {
    let mut errors: Vec<(&'static str, String)> = Vec::new();

    if name.trim().is_empty() {
        errors.push(("name", "must not be empty".into()));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(("name", format!("must be at most {MAX_NAME_LEN} characters")));
    }

    collect(errors)
}

fn collect(errors: Vec<(&'static str, String)>) -> AppResult<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let mut err = AppError::validation("Validation failed for one or more fields");
    for (field, reason) in errors {
        err = err.with_detail(field, reason);
    }
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn valid() -> AppResult<()> {
        validate_employee(
            "Ann Lee",
            "ann@x.com",
            "Developer",
            Decimal::new(9_000_000, 2), // 90000.00
            date("2023-01-15"),
        )
    }

    #[test]
    fn accepts_valid_employee() {
        assert!(valid().is_ok());
    }

    #[test]
    fn rejects_bad_name() {
        let too_long = "a".repeat(101);
        for name in ["", "   ", "Ann3", "Ann-Lee", too_long.as_str()] {
            let err = validate_employee(
                name,
                "ann@x.com",
                "Developer",
                Decimal::from(90_000),
                date("2023-01-15"),
            )
            .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed, "name: {name:?}");
            assert!(err.details.unwrap().contains_key("name"));
        }
    }

    #[test]
    fn rejects_bad_email() {
        let too_long = format!("{}@x.com", "a".repeat(100));
        for email in ["", "not-an-email", "a@", too_long.as_str()] {
            let err = validate_employee(
                "Ann Lee",
                email,
                "Developer",
                Decimal::from(90_000),
                date("2023-01-15"),
            )
            .unwrap_err();
            assert!(err.details.unwrap().contains_key("email"), "email: {email:?}");
        }
    }

    #[test]
    fn rejects_bad_role() {
        let too_long = "r".repeat(51);
        for role in ["", too_long.as_str()] {
            let err = validate_employee(
                "Ann Lee",
                "ann@x.com",
                role,
                Decimal::from(90_000),
                date("2023-01-15"),
            )
            .unwrap_err();
            assert!(err.details.unwrap().contains_key("role"));
        }
    }

    #[test]
    fn rejects_bad_salary() {
        // zero, negative, over the cap, more than 2 decimal places
        for salary in [
            Decimal::ZERO,
            Decimal::from(-1),
            Decimal::from(MAX_SALARY + 1),
            Decimal::new(100_125, 3), // 100.125
        ] {
            let err = validate_employee(
                "Ann Lee",
                "ann@x.com",
                "Developer",
                salary,
                date("2023-01-15"),
            )
            .unwrap_err();
            assert!(err.details.unwrap().contains_key("salary"), "salary: {salary}");
        }
    }

    #[test]
    fn accepts_salary_with_trailing_zeros() {
        let result = validate_employee(
            "Ann Lee",
            "ann@x.com",
            "Developer",
            Decimal::new(9_000_000, 2), // 90000.00, scale 2
            date("2023-01-15"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_bad_joining_date() {
        let future = Utc::now().date_naive() + chrono::Days::new(1);
        for jd in [future, date("1899-12-31")] {
            let err = validate_employee(
                "Ann Lee",
                "ann@x.com",
                "Developer",
                Decimal::from(90_000),
                jd,
            )
            .unwrap_err();
            assert!(err.details.unwrap().contains_key("joiningDate"), "date: {jd}");
        }
    }

    #[test]
    fn collects_all_offending_fields() {
        let err = validate_employee("", "nope", "", Decimal::ZERO, date("1800-01-01")).unwrap_err();
        let details = err.details.unwrap();
        for field in ["name", "email", "role", "salary", "joiningDate"] {
            assert!(details.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn department_name_rules() {
        assert!(validate_department_name("Engineering").is_ok());
        assert!(validate_department_name("R & D").is_ok());
        assert!(validate_department_name("").is_err());
        assert!(validate_department_name("  ").is_err());
        assert!(validate_department_name(&"d".repeat(101)).is_err());
        assert!(validate_department_name(&"d".repeat(100)).is_ok());
    }
}
