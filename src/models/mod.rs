//! Data models
//!
//! Each entity has a record type (as returned by the API, including its
//! derived fields) plus create/update payloads. JSON uses camelCase field
//! names as consumed by the admin front end.

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
