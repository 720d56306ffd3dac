//! Server-reported errors as seen by the client.

use std::fmt;

use thiserror::Error;

use crate::ErrorField;

/// Errors surfaced by the driver.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with an ErrorResponse.
    #[error(transparent)]
    Db(Box<DbError>),

    /// An ErrorResponse lacked one of the fields the protocol always sends.
    #[error("error response is missing the {0} field")]
    MissingField(ErrorField),

    /// A numeric field did not hold a number.
    #[error("error response has an invalid {field} field: {value:?}")]
    InvalidField {
        /// The offending field
        field: ErrorField,
        /// Its raw value
        value: String,
    },
}

impl Error {
    /// The server error, if this is one.
    pub fn as_db_error(&self) -> Option<&DbError> {
        match self {
            Error::Db(db) => Some(db),
            _ => None,
        }
    }
}

impl From<DbError> for Error {
    fn from(db: DbError) -> Self {
        Error::Db(Box::new(db))
    }
}

/// An error reported by the server in an ErrorResponse message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbError {
    severity: String,
    code: String,
    message: String,
    detail: Option<String>,
    hint: Option<String>,
    position: Option<u32>,
    where_: Option<String>,
    schema: Option<String>,
    table: Option<String>,
    column: Option<String>,
    datatype: Option<String>,
    constraint: Option<String>,
    file: Option<String>,
    line: Option<u32>,
    routine: Option<String>,
}

impl DbError {
    /// Build a `DbError` from the fields of an ErrorResponse.
    ///
    /// Severity, code and message are mandatory. Fields with unknown tags are
    /// skipped, as the protocol asks of frontends.
    pub fn parse<I, S>(fields: I) -> Result<DbError, Error>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut severity = None;
        let mut severity_nonlocalized = None;
        let mut code = None;
        let mut message = None;
        let mut detail = None;
        let mut hint = None;
        let mut position = None;
        let mut where_ = None;
        let mut schema = None;
        let mut table = None;
        let mut column = None;
        let mut datatype = None;
        let mut constraint = None;
        let mut file = None;
        let mut line = None;
        let mut routine = None;

        for (tag, value) in fields {
            let Some(field) = ErrorField::from_tag(tag) else {
                continue;
            };
            let value = value.into();
            match field {
                ErrorField::Severity => severity = Some(value),
                ErrorField::SeverityNonLocalized => severity_nonlocalized = Some(value),
                ErrorField::Code => code = Some(value),
                ErrorField::Message => message = Some(value),
                ErrorField::Detail => detail = Some(value),
                ErrorField::Hint => hint = Some(value),
                ErrorField::Position => position = Some(parse_number(field, value)?),
                ErrorField::Where => where_ = Some(value),
                ErrorField::Schema => schema = Some(value),
                ErrorField::Table => table = Some(value),
                ErrorField::Column => column = Some(value),
                ErrorField::DataType => datatype = Some(value),
                ErrorField::Constraint => constraint = Some(value),
                ErrorField::File => file = Some(value),
                ErrorField::Line => line = Some(parse_number(field, value)?),
                ErrorField::Routine => routine = Some(value),
                // Internal query positions only matter to PL debuggers.
                ErrorField::InternalPosition | ErrorField::InternalQuery => {}
            }
        }

        Ok(DbError {
            severity: severity
                .or(severity_nonlocalized)
                .ok_or(Error::MissingField(ErrorField::Severity))?,
            code: code.ok_or(Error::MissingField(ErrorField::Code))?,
            message: message.ok_or(Error::MissingField(ErrorField::Message))?,
            detail,
            hint,
            position,
            where_,
            schema,
            table,
            column,
            datatype,
            constraint,
            file,
            line,
            routine,
        })
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    /// The SQLSTATE code, exactly as the server sent it.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// 1-based character offset into the query string.
    pub fn position(&self) -> Option<u32> {
        self.position
    }

    pub fn where_(&self) -> Option<&str> {
        self.where_.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// Server source file that raised the error.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn routine(&self) -> Option<&str> {
        self.routine.as_deref()
    }
}

fn parse_number(field: ErrorField, value: String) -> Result<u32, Error> {
    value
        .parse()
        .map_err(|_| Error::InvalidField { field, value })
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pq: {}", self.message)
    }
}

impl std::error::Error for DbError {}
