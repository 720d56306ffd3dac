//! The structured error type.

use std::fmt;

use serde::Serialize;

use crate::{ErrorCode, SourceContext};

/// An error with a SQLSTATE code, an optional hint and detail, and the
/// location it was raised at.
///
/// `Display` shows the message only. Hint and detail are revealed by
/// [`full_error`](crate::full_error) or by the wire layer.
///
/// Annotation takes `&mut self` or `self`, so only the current owner can
/// change a hint or detail. Once the error is boxed, wrapped or shared it is
/// read-only.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<SourceContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking: Option<String>,
}

impl Error {
    /// Create a new error raised at the caller's location.
    #[track_caller]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new_at(SourceContext::caller(), code, message)
    }

    /// Create a new error raised at an explicit location.
    pub fn new_at(location: SourceContext, code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "error message must not be empty");

        Self {
            code,
            message,
            hint: None,
            detail: None,
            location: Some(location),
            tracking: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the hint, if any
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Get the detail, if any
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Get the raise site
    pub fn location(&self) -> Option<&SourceContext> {
        self.location.as_ref()
    }

    /// Get the internal tracking tag.
    ///
    /// The tag is for aggregation (an issue reference, a stack trace) and is
    /// never part of a user-visible string.
    pub fn tracking(&self) -> Option<&str> {
        self.tracking.as_deref()
    }

    /// Annotate with a hint. Accepts `format_args!` for formatted hints.
    pub fn set_hint(&mut self, hint: impl fmt::Display) -> &mut Self {
        self.hint = Some(hint.to_string());
        self
    }

    /// Annotate with details.
    pub fn set_detail(&mut self, detail: impl fmt::Display) -> &mut Self {
        self.detail = Some(detail.to_string());
        self
    }

    /// Set the internal tracking tag.
    pub fn set_tracking(&mut self, tracking: impl fmt::Display) -> &mut Self {
        self.tracking = Some(tracking.to_string());
        self
    }

    pub fn with_hint(mut self, hint: impl fmt::Display) -> Self {
        self.set_hint(hint);
        self
    }

    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.set_detail(detail);
        self
    }

    pub fn with_tracking(mut self, tracking: impl fmt::Display) -> Self {
        self.set_tracking(tracking);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({:?})", self.code, self.code)?;
        writeln!(f)?;
        writeln!(f, "    Message: {}", self.message)?;

        if let Some(hint) = &self.hint {
            writeln!(f, "    Hint: {}", hint)?;
        }
        if let Some(detail) = &self.detail {
            writeln!(f, "    Detail: {}", detail)?;
        }
        if let Some(location) = &self.location {
            writeln!(f, "    Location: {}", location)?;
        }
        if let Some(tracking) = &self.tracking {
            writeln!(f, "    Tracking: {}", tracking)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Create an [`Error`] with a formatted message.
///
/// ```rust
/// use quarry_error::{ErrorCode, pgerror};
///
/// let err = pgerror!(ErrorCode::UndefinedTable, "relation {:?} does not exist", "users");
/// assert_eq!(err.to_string(), "relation \"users\" does not exist");
/// ```
///
/// `at = ctx` records an explicit [`SourceContext`] instead of the macro call
/// site.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! pgerror {
    (at = $ctx:expr, $code:expr, $($arg:tt)+) => {
        $crate::Error::new_at($ctx, $code, ::std::format!($($arg)+))
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new_at($crate::source_context!(), $code, ::std::format!($($arg)+))
    };
}
