//! Rendering an error together with its hint and detail.

use std::error::Error as StdError;

use quarry_pq::DbError;

use crate::{Error, structured_cause};

/// Prefix the driver puts in front of server messages.
pub const DRIVER_PREFIX: &str = "pq: ";

/// The fields shared by quarry's [`Error`] and the driver's [`DbError`].
pub trait ErrorFields {
    fn message(&self) -> &str;

    fn hint(&self) -> Option<&str>;

    fn detail(&self) -> Option<&str>;

    /// Text rendered in front of the message.
    fn prefix(&self) -> &str {
        ""
    }
}

impl ErrorFields for Error {
    fn message(&self) -> &str {
        Error::message(self)
    }

    fn hint(&self) -> Option<&str> {
        Error::hint(self)
    }

    fn detail(&self) -> Option<&str> {
        Error::detail(self)
    }
}

impl ErrorFields for DbError {
    fn message(&self) -> &str {
        DbError::message(self)
    }

    fn hint(&self) -> Option<&str> {
        DbError::hint(self)
    }

    fn detail(&self) -> Option<&str> {
        DbError::detail(self)
    }

    fn prefix(&self) -> &str {
        DRIVER_PREFIX
    }
}

/// Render `prefix + message`, followed by `\nHINT: ` and `\nDETAIL: ` lines
/// for a non-empty hint and detail.
pub fn render_fields(fields: &dyn ErrorFields) -> String {
    format_msg_hint_detail(fields.prefix(), fields.message(), fields.hint(), fields.detail())
}

/// Render any error with the hint and detail it carries.
///
/// - A driver [`DbError`] renders with the driver prefix.
/// - An error whose chain holds an [`Error`] renders its own `Display`
///   (wrappers may have added context) followed by the inner hint and detail.
/// - Anything else renders as its `Display`.
pub fn full_error(err: &(dyn StdError + 'static)) -> String {
    if let Some(db) = driver_error(err) {
        render_fields(db)
    } else if let Some(pg) = structured_cause(err) {
        format_msg_hint_detail("", &err.to_string(), pg.hint(), pg.detail())
    } else {
        err.to_string()
    }
}

fn driver_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a DbError> {
    err.downcast_ref::<DbError>().or_else(|| {
        err.downcast_ref::<quarry_pq::Error>()
            .and_then(quarry_pq::Error::as_db_error)
    })
}

fn format_msg_hint_detail(
    prefix: &str,
    message: &str,
    hint: Option<&str>,
    detail: Option<&str>,
) -> String {
    let mut out = String::with_capacity(prefix.len() + message.len());
    out.push_str(prefix);
    out.push_str(message);
    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        out.push_str("\nHINT: ");
        out.push_str(hint);
    }
    if let Some(detail) = detail.filter(|d| !d.is_empty()) {
        out.push_str("\nDETAIL: ");
        out.push_str(detail);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    fn db_error(extra: &[(u8, &'static str)]) -> DbError {
        let mut fields = vec![(b'S', "ERROR"), (b'C', "42601"), (b'M', "X")];
        fields.extend_from_slice(extra);
        DbError::parse(fields).unwrap()
    }

    #[test]
    fn test_full_error_hint_and_detail() {
        let err = Error::new(ErrorCode::SyntaxError, "M")
            .with_hint("H")
            .with_detail("D");
        assert_eq!(full_error(&err), "M\nHINT: H\nDETAIL: D");
    }

    #[test]
    fn test_full_error_hint_only() {
        let err = Error::new(ErrorCode::SyntaxError, "M").with_hint("H");
        assert_eq!(full_error(&err), "M\nHINT: H");
    }

    #[test]
    fn test_full_error_detail_only() {
        let err = Error::new(ErrorCode::SyntaxError, "M").with_detail("D");
        assert_eq!(full_error(&err), "M\nDETAIL: D");
    }

    #[test]
    fn test_full_error_bare() {
        let err = Error::new(ErrorCode::SyntaxError, "M");
        assert_eq!(full_error(&err), "M");
    }

    #[test]
    fn test_full_error_skips_empty_annotations() {
        let err = Error::new(ErrorCode::SyntaxError, "M")
            .with_hint("")
            .with_detail("");
        assert_eq!(full_error(&err), "M");
    }

    #[test]
    fn test_full_error_driver() {
        assert_eq!(full_error(&db_error(&[])), "pq: X");
        assert_eq!(
            full_error(&db_error(&[(b'H', "H"), (b'D', "D")])),
            "pq: X\nHINT: H\nDETAIL: D"
        );

        let wrapped = quarry_pq::Error::from(db_error(&[(b'D', "D")]));
        assert_eq!(full_error(&wrapped), "pq: X\nDETAIL: D");
    }

    #[test]
    fn test_full_error_plain() {
        let err = std::io::Error::other("connection reset");
        assert_eq!(full_error(&err), "connection reset");
    }

    #[test]
    fn test_render_fields_uses_prefix() {
        let db = db_error(&[(b'H', "H")]);
        assert_eq!(render_fields(&db), "pq: X\nHINT: H");

        let err = Error::new(ErrorCode::SyntaxError, "X").with_hint("H");
        assert_eq!(render_fields(&err), "X\nHINT: H");
    }
}
