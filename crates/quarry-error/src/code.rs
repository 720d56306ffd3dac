//! SQLSTATE codes for quarry errors

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// The SQLSTATE classification of an error.
///
/// Codes are opaque identifiers: they are compared and sent to clients, never
/// interpreted beyond their two-character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, Serialize)]
#[serde(into = "&'static str")]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Class 01 - Warning
    // =========================================================================
    #[strum(serialize = "01000")]
    Warning,

    // =========================================================================
    // Class 02 - No Data
    // =========================================================================
    #[strum(serialize = "02000")]
    NoData,

    // =========================================================================
    // Class 08 - Connection Exception
    // =========================================================================
    #[strum(serialize = "08000")]
    ConnectionException,
    #[strum(serialize = "08003")]
    ConnectionDoesNotExist,
    #[strum(serialize = "08006")]
    ConnectionFailure,
    #[strum(serialize = "08P01")]
    ProtocolViolation,

    // =========================================================================
    // Class 0A - Feature Not Supported
    // =========================================================================
    /// Intentionally unsupported; always carries a tracking tag
    #[strum(serialize = "0A000")]
    FeatureNotSupported,

    // =========================================================================
    // Class 21 - Cardinality Violation
    // =========================================================================
    #[strum(serialize = "21000")]
    CardinalityViolation,

    // =========================================================================
    // Class 22 - Data Exception
    // =========================================================================
    #[strum(serialize = "22000")]
    DataException,
    #[strum(serialize = "22001")]
    StringDataRightTruncation,
    #[strum(serialize = "22003")]
    NumericValueOutOfRange,
    #[strum(serialize = "22007")]
    InvalidDatetimeFormat,
    #[strum(serialize = "22008")]
    DatetimeFieldOverflow,
    #[strum(serialize = "22012")]
    DivisionByZero,
    #[strum(serialize = "22023")]
    InvalidParameterValue,
    #[strum(serialize = "22P02")]
    InvalidTextRepresentation,

    // =========================================================================
    // Class 23 - Integrity Constraint Violation
    // =========================================================================
    #[strum(serialize = "23000")]
    IntegrityConstraintViolation,
    #[strum(serialize = "23502")]
    NotNullViolation,
    #[strum(serialize = "23503")]
    ForeignKeyViolation,
    #[strum(serialize = "23505")]
    UniqueViolation,
    #[strum(serialize = "23514")]
    CheckViolation,

    // =========================================================================
    // Class 25 - Invalid Transaction State
    // =========================================================================
    #[strum(serialize = "25000")]
    InvalidTransactionState,
    #[strum(serialize = "25001")]
    ActiveSqlTransaction,
    #[strum(serialize = "25006")]
    ReadOnlySqlTransaction,
    #[strum(serialize = "25P02")]
    InFailedSqlTransaction,

    // =========================================================================
    // Class 26 / 28 / 34 / 3D / 3F - Invalid names and authorization
    // =========================================================================
    #[strum(serialize = "26000")]
    InvalidSqlStatementName,
    #[strum(serialize = "28000")]
    InvalidAuthorizationSpecification,
    #[strum(serialize = "28P01")]
    InvalidPassword,
    #[strum(serialize = "34000")]
    InvalidCursorName,
    #[strum(serialize = "3D000")]
    InvalidCatalogName,
    #[strum(serialize = "3F000")]
    InvalidSchemaName,

    // =========================================================================
    // Class 40 - Transaction Rollback
    // =========================================================================
    #[strum(serialize = "40001")]
    SerializationFailure,
    #[strum(serialize = "40003")]
    StatementCompletionUnknown,

    // =========================================================================
    // Class 42 - Syntax Error or Access Rule Violation
    // =========================================================================
    #[strum(serialize = "42000")]
    SyntaxErrorOrAccessRuleViolation,
    #[strum(serialize = "42501")]
    InsufficientPrivilege,
    #[strum(serialize = "42601")]
    SyntaxError,
    #[strum(serialize = "42602")]
    InvalidName,
    #[strum(serialize = "42622")]
    NameTooLong,
    #[strum(serialize = "42701")]
    DuplicateColumn,
    #[strum(serialize = "42703")]
    UndefinedColumn,
    #[strum(serialize = "42704")]
    UndefinedObject,
    #[strum(serialize = "42710")]
    DuplicateObject,
    #[strum(serialize = "42804")]
    DatatypeMismatch,
    #[strum(serialize = "42809")]
    WrongObjectType,
    #[strum(serialize = "42830")]
    InvalidForeignKey,
    #[strum(serialize = "42883")]
    UndefinedFunction,
    #[strum(serialize = "42P01")]
    UndefinedTable,
    #[strum(serialize = "42P03")]
    DuplicateCursor,
    #[strum(serialize = "42P04")]
    DuplicateDatabase,
    #[strum(serialize = "42P06")]
    DuplicateSchema,
    #[strum(serialize = "42P07")]
    DuplicateRelation,
    /// A prepared statement must contain exactly one statement
    #[strum(serialize = "42P14")]
    InvalidPreparedStatementDefinition,
    #[strum(serialize = "42P18")]
    IndeterminateDatatype,

    // =========================================================================
    // Class 53 / 54 / 55 / 57 / 58 - Resources, limits and operator action
    // =========================================================================
    #[strum(serialize = "53000")]
    InsufficientResources,
    #[strum(serialize = "53100")]
    DiskFull,
    #[strum(serialize = "53200")]
    OutOfMemory,
    #[strum(serialize = "54000")]
    ProgramLimitExceeded,
    #[strum(serialize = "55000")]
    ObjectNotInPrerequisiteState,
    #[strum(serialize = "57014")]
    QueryCanceled,
    #[strum(serialize = "57P01")]
    AdminShutdown,
    #[strum(serialize = "58000")]
    SystemError,
    #[strum(serialize = "58030")]
    IoError,

    // =========================================================================
    // Class XX - Internal Error
    // =========================================================================
    /// Raised for conditions that should be impossible: always a bug
    #[strum(serialize = "XX000")]
    InternalError,
    #[strum(serialize = "XX001")]
    DataCorrupted,
}

impl ErrorCode {
    /// The five-character SQLSTATE string.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The two-character SQLSTATE class.
    pub fn class(&self) -> &'static str {
        &self.as_str()[..2]
    }

    pub fn is_warning(&self) -> bool {
        self.class() == "01"
    }
}
