//! ErrorResponse / NoticeResponse field tags.

use strum_macros::Display;

/// One field of an ErrorResponse message, identified on the wire by a single
/// byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum ErrorField {
    /// Localized severity (`S`)
    Severity,
    /// Non-localized severity (`V`)
    SeverityNonLocalized,
    /// SQLSTATE code (`C`)
    Code,
    /// Primary message (`M`)
    Message,
    /// Secondary message carrying more detail (`D`)
    Detail,
    /// Suggestion on what to do about the problem (`H`)
    Hint,
    /// Cursor position into the original query string, 1-based (`P`)
    Position,
    /// Cursor position into an internally generated command (`p`)
    InternalPosition,
    /// Text of the internally generated command (`q`)
    InternalQuery,
    /// Call stack context (`W`)
    Where,
    /// Schema name (`s`)
    Schema,
    /// Table name (`t`)
    Table,
    /// Column name (`c`)
    Column,
    /// Data type name (`d`)
    DataType,
    /// Constraint name (`n`)
    Constraint,
    /// Source file where the error was reported (`F`)
    File,
    /// Source line where the error was reported (`L`)
    Line,
    /// Source routine where the error was reported (`R`)
    Routine,
}

impl ErrorField {
    /// The wire tag for this field.
    pub fn tag(&self) -> u8 {
        match self {
            ErrorField::Severity => b'S',
            ErrorField::SeverityNonLocalized => b'V',
            ErrorField::Code => b'C',
            ErrorField::Message => b'M',
            ErrorField::Detail => b'D',
            ErrorField::Hint => b'H',
            ErrorField::Position => b'P',
            ErrorField::InternalPosition => b'p',
            ErrorField::InternalQuery => b'q',
            ErrorField::Where => b'W',
            ErrorField::Schema => b's',
            ErrorField::Table => b't',
            ErrorField::Column => b'c',
            ErrorField::DataType => b'd',
            ErrorField::Constraint => b'n',
            ErrorField::File => b'F',
            ErrorField::Line => b'L',
            ErrorField::Routine => b'R',
        }
    }

    /// Look up a field by wire tag. Unknown tags yield `None`; the protocol
    /// requires clients to ignore them.
    pub fn from_tag(tag: u8) -> Option<Self> {
        let field = match tag {
            b'S' => ErrorField::Severity,
            b'V' => ErrorField::SeverityNonLocalized,
            b'C' => ErrorField::Code,
            b'M' => ErrorField::Message,
            b'D' => ErrorField::Detail,
            b'H' => ErrorField::Hint,
            b'P' => ErrorField::Position,
            b'p' => ErrorField::InternalPosition,
            b'q' => ErrorField::InternalQuery,
            b'W' => ErrorField::Where,
            b's' => ErrorField::Schema,
            b't' => ErrorField::Table,
            b'c' => ErrorField::Column,
            b'd' => ErrorField::DataType,
            b'n' => ErrorField::Constraint,
            b'F' => ErrorField::File,
            b'L' => ErrorField::Line,
            b'R' => ErrorField::Routine,
            _ => return None,
        };
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        assert_eq!(ErrorField::from_tag(b'H'), Some(ErrorField::Hint));
        assert_eq!(ErrorField::from_tag(b'p'), Some(ErrorField::InternalPosition));
        assert_eq!(ErrorField::from_tag(b'Z'), None);
        assert_eq!(ErrorField::Routine.tag(), b'R');
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ErrorField::Message.to_string(), "Message");
        assert_eq!(ErrorField::SeverityNonLocalized.to_string(), "SeverityNonLocalized");
    }
}
