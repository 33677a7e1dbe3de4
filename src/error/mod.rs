//! Unified error system
//!
//! - [`ErrorCode`]: standardized numeric error codes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error type with code, message and optional details
//! - [`ApiResponse`]: unified API error/response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: general errors
//! - 61xx: department errors
//! - 8xxx: employee errors
//! - 9xxx: system errors
//!
//! # Example
//!
//! ```
//! use staff_admin::error::{AppError, ErrorCode};
//!
//! // Error with the default message for the code
//! let err = AppError::new(ErrorCode::EmployeeNotFound);
//!
//! // Error with a custom message and field-level detail
//! let err = AppError::validation("Invalid email format")
//!     .with_detail("email", "must be a valid email address");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCategory, ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
