#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    BadParamInput(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    ValidationFailed(String),

    #[error("forbidden")]
    Forbidden,

    #[error("payment service: {0}")]
    Payment(String),

    #[error("lookup cancelled")]
    Cancelled,

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Internal(other.into()),
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::BadParamInput(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::BadParamInput(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::BadParamInput(format!($fmt, $($arg)*)))
    };
}

/// Unwraps an `Option` from a single-row lookup, turning `None` into
/// [`Error::NotFound`].
pub trait OrNotFound<T> {
    fn or_not_found(self) -> Result<T>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self) -> Result<T> {
        self.ok_or(Error::NotFound)
    }
}
