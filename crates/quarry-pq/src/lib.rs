//! # quarry-pq
//!
//! The client half of quarry's PostgreSQL protocol support. This crate only
//! deals with what the server reports back: ErrorResponse field tags and the
//! [`DbError`] built from them.
//!
//! ```rust
//! use quarry_pq::DbError;
//!
//! let err = DbError::parse([(b'S', "ERROR"), (b'C', "0A000"), (b'M', "unimplemented: cursors")])
//!     .unwrap();
//! assert_eq!(err.to_string(), "pq: unimplemented: cursors");
//! ```

mod error;
mod field;

pub use error::{DbError, Error};
pub use field::ErrorField;

/// Result type alias using the driver Error
pub type Result<T> = std::result::Result<T, Error>;
