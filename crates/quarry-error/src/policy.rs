//! Pre-annotated errors for situations the server reports in a fixed way.
//!
//! Every constructor is `#[track_caller]`: the recorded location is the code
//! that raised the error. Each formatted variant is a macro wrapping the
//! function with `format_args!`.

use std::fmt;

use crate::trace::{self, capture_trace};
use crate::{Error, ErrorCode, ReportConfig};

/// Reject a statement blocked by `sql_safe_updates`.
#[track_caller]
pub fn dangerous_statement(reason: impl fmt::Display) -> Error {
    let err = Error::new(
        ErrorCode::Warning,
        format!("rejected: {reason} (sql_safe_updates = true)"),
    );
    tracing::warn!(code = %err.code(), "{}", err);
    err
}

/// A query string given to PREPARE held `n` statements instead of one.
#[track_caller]
pub fn wrong_number_of_prepared_statements(n: usize) -> Error {
    Error::new(
        ErrorCode::InvalidPreparedStatementDefinition,
        format!("prepared statement had {n} statements, expected 1"),
    )
}

/// Report a condition that should be impossible.
///
/// The stack trace from the caller upwards is stored both as the detail and
/// as the tracking tag; the hint asks the user to file a bug.
#[track_caller]
#[inline(never)]
pub fn assertion_failed(reason: impl fmt::Display) -> Error {
    let mut err = Error::new(ErrorCode::InternalError, format!("internal error: {reason}"));

    // Skip this function's own frame.
    let mut stack = capture_trace(1);
    if stack.is_empty() {
        if let Some(location) = err.location() {
            let file = trace::base_name(std::path::Path::new(location.file()));
            stack = format!("{}:{}", file, location.line());
        }
    }

    err.set_tracking(&stack)
        .set_detail(&stack)
        .set_hint(ReportConfig::current().assertion_hint());

    tracing::error!(code = %err.code(), trace = %stack, "{}", err);
    err
}

/// A feature that is deliberately unsupported, with a tracking issue.
///
/// Tracked as `#<issue>`; the hint links to the issue.
#[track_caller]
pub fn unimplemented_with_issue(issue: u32, message: impl fmt::Display) -> Error {
    let err = Error::new(ErrorCode::FeatureNotSupported, format!("unimplemented: {message}"))
        .with_tracking(format_args!("#{issue}"))
        .with_hint(ReportConfig::current().issue_hint(issue));
    tracing::debug!(issue, "{}", err);
    err
}

/// A feature that is not implemented and has no tracking issue yet.
///
/// `feature` is recorded as the tracking tag and is never printed.
#[track_caller]
pub fn unimplemented(feature: &str, message: impl fmt::Display) -> Error {
    let err = Error::new(ErrorCode::FeatureNotSupported, message.to_string())
        .with_tracking(feature)
        .with_hint(ReportConfig::current().unimplemented_hint());
    tracing::debug!(feature, "{}", err);
    err
}

/// Formatted [`dangerous_statement`].
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! dangerous_statement {
    ($($arg:tt)+) => {
        $crate::dangerous_statement(::std::format_args!($($arg)+))
    };
}

/// Formatted [`assertion_failed`].
///
/// ```rust
/// let err = quarry_error::assertion_error!("unknown plan node {}", 17);
/// assert_eq!(err.to_string(), "internal error: unknown plan node 17");
/// ```
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! assertion_error {
    ($($arg:tt)+) => {
        $crate::assertion_failed(::std::format_args!($($arg)+))
    };
}

/// Formatted [`unimplemented_with_issue`].
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! unimplemented_with_issue {
    ($issue:expr, $($arg:tt)+) => {
        $crate::unimplemented_with_issue($issue, ::std::format_args!($($arg)+))
    };
}

/// Formatted [`unimplemented`].
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! unimplemented_feature {
    ($feature:expr, $($arg:tt)+) => {
        $crate::unimplemented($feature, ::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn is_trace_shaped(trace: &str) -> bool {
        !trace.is_empty()
            && trace.split(',').all(|entry| {
                entry
                    .rsplit_once(':')
                    .is_some_and(|(file, line)| !file.is_empty() && line.parse::<u32>().is_ok())
            })
    }

    #[test]
    fn test_dangerous_statement() {
        let err = dangerous_statement("DELETE without WHERE clause");
        assert_eq!(err.code(), ErrorCode::Warning);
        assert_eq!(
            err.message(),
            "rejected: DELETE without WHERE clause (sql_safe_updates = true)"
        );

        let err = crate::dangerous_statement!("ALTER TABLE {} DROP COLUMN", "users");
        assert!(err.message().ends_with(" (sql_safe_updates = true)"));
        assert!(err.message().starts_with("rejected: ALTER TABLE users"));
    }

    #[test]
    fn test_wrong_number_of_prepared_statements() {
        let err = wrong_number_of_prepared_statements(5);
        assert_eq!(err.code(), ErrorCode::InvalidPreparedStatementDefinition);
        assert_eq!(err.message(), "prepared statement had 5 statements, expected 1");
    }

    #[test]
    fn test_assertion_failed() {
        let (err, line) = (crate::assertion_error!("bad state {}", 3), line!());
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "internal error: bad state 3");
        assert_eq!(err.hint(), Some(ReportConfig::current().assertion_hint().as_str()));

        let detail = err.detail().unwrap();
        assert!(is_trace_shaped(detail), "unexpected trace {detail:?}");
        assert_eq!(err.tracking(), Some(detail));
        assert!(
            detail.starts_with(&format!("policy.rs:{line}")),
            "trace should start at the raise site: {detail:?}"
        );
        assert_eq!(err.location().unwrap().line(), line);
    }

    #[test]
    fn test_assertion_message_is_not_a_format_string() {
        let err = assertion_failed("100% {broken}");
        assert_eq!(err.message(), "internal error: 100% {broken}");
    }

    #[test]
    fn test_unimplemented_with_issue() {
        let err = unimplemented_with_issue(12345, "LATERAL joins");
        assert_eq!(err.code(), ErrorCode::FeatureNotSupported);
        assert_eq!(err.message(), "unimplemented: LATERAL joins");
        assert_eq!(err.tracking(), Some("#12345"));
        assert!(err.hint().unwrap().contains("12345"));
        assert_eq!(err.hint(), Some(ReportConfig::current().issue_hint(12345).as_str()));

        let err = crate::unimplemented_with_issue!(9, "{} on {}", "RETURNING", "UPSERT");
        assert_eq!(err.message(), "unimplemented: RETURNING on UPSERT");
        assert_eq!(err.tracking(), Some("#9"));
    }

    #[test]
    fn test_unimplemented_feature() {
        let err = crate::unimplemented_feature!("alter-type", "cannot alter type of column {}", "a");
        assert_eq!(err.code(), ErrorCode::FeatureNotSupported);
        assert_eq!(err.message(), "cannot alter type of column a");
        assert_eq!(err.tracking(), Some("alter-type"));
        assert_eq!(err.hint(), Some(ReportConfig::current().unimplemented_hint().as_str()));
        assert!(!err.to_string().contains("alter-type"));
    }

    #[test]
    fn test_constructors_record_raise_site() {
        let (err, line) = (wrong_number_of_prepared_statements(2), line!());
        assert_eq!(err.location().unwrap().file(), file!());
        assert_eq!(err.location().unwrap().line(), line);

        let (err, line) = (crate::unimplemented_with_issue!(1, "x"), line!());
        assert_eq!(err.location().unwrap().line(), line);
    }
}
