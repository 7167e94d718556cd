/// An error that can occur while talking to the engine or mapping rows.
///
/// Engine failures are collapsed into a single variant carrying the engine's
/// message text; callers distinguish subcategories only through the message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied argument failed validation before any engine call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The connection handle has been closed.
    #[error("connection is closed")]
    ConnectionClosed,

    /// SQL execution failure reported by the engine.
    #[error("SQL execution failure: `{0}`")]
    Sql(String),

    /// A generated repository operation did not run to completion.
    #[error("{entity}.{operation} failed: {message}")]
    EntityOperation {
        entity: &'static str,
        operation: &'static str,
        message: String,
    },

    /// A required column is missing from the result row.
    #[error("column `{0}` is missing from the result row")]
    ColumnNotFound(String),

    /// A single-row query matched nothing.
    #[error("record not found")]
    RecordNotFound,

    /// A column value could not be converted to the requested type.
    #[error("cannot convert column `{column}` to {target}")]
    TypeConversion {
        column: String,
        target: &'static str,
    },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn entity_operation(entity: &'static str, operation: &'static str, cause: Error) -> Self {
        Self::EntityOperation {
            entity,
            operation,
            message: cause.to_string(),
        }
    }

    pub fn type_conversion(column: impl Into<String>, target: &'static str) -> Self {
        Self::TypeConversion {
            column: column.into(),
            target,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sql(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
