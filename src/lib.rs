//! staff-admin - employee/department record-keeping service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs      # env-var configuration
//! ├── state.rs       # shared application state (pool + config)
//! ├── error/         # error codes, AppError, response envelope
//! ├── models/        # Department / Employee records and payloads
//! ├── validation.rs  # server-side field validation
//! ├── db/            # repository layer over SQLite
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod validation;

// Re-export public types
pub use config::Config;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use state::AppState;
