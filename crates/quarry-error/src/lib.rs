//! # quarry-error
//!
//! Structured errors for the quarry query server.
//!
//! ## Design Philosophy
//!
//! - **ErrorCode**: every error carries a SQLSTATE the wire layer can send as is
//! - **Hint / Detail**: remediation and diagnostics, shown only when asked for
//! - **SourceContext**: the raise site, captured through `#[track_caller]`
//! - **Tracking tag**: an internal token (issue number, stack trace) for
//!   aggregating reports
//!
//! ## Usage
//!
//! ```rust
//! use quarry_error::{Error, ErrorCode, full_error, pgerror};
//!
//! fn lookup(name: &str) -> Result<(), Error> {
//!     Err(pgerror!(ErrorCode::UndefinedTable, "relation \"{}\" does not exist", name)
//!         .with_hint("check the search_path"))
//! }
//!
//! let err = lookup("users").unwrap_err();
//! assert_eq!(err.to_string(), "relation \"users\" does not exist");
//! assert_eq!(
//!     full_error(&err),
//!     "relation \"users\" does not exist\nHINT: check the search_path"
//! );
//! ```
//!
//! ## Principles
//!
//! - `Display` is the message only; [`full_error`] adds hint and detail
//! - Errors are annotated by their owner before being returned, then read-only
//! - Wrapping layers are seen through with [`structured_cause`]

mod cause;
mod code;
mod config;
mod error;
mod format;
mod policy;
mod source;
pub mod trace;
mod wire;

pub use cause::{code_of, structured_cause};
pub use code::ErrorCode;
pub use config::{ConfigError, ReportConfig};
pub use error::Error;
pub use format::{DRIVER_PREFIX, ErrorFields, full_error, render_fields};
pub use policy::{
    assertion_failed, dangerous_statement, unimplemented, unimplemented_with_issue,
    wrong_number_of_prepared_statements,
};
pub use source::SourceContext;
pub use trace::{MAX_TRACE_FRAMES, capture_trace};

/// Result type alias using quarry Error
pub type Result<T> = std::result::Result<T, Error>;
