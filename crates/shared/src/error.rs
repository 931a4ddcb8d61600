#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load suggestions: meal catalog unavailable: {0}")]
    Catalog(anyhow::Error),

    #[error("failed to load suggestions: plan history unavailable: {0}")]
    History(anyhow::Error),

    #[error("invalid suggestion settings: {0}")]
    InvalidSettings(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the failure came from an upstream source and a caller-level
    /// retry makes sense.
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Error::Catalog(_) | Error::History(_))
    }
}

impl From<time::error::Parse> for Error {
    fn from(value: time::error::Parse) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail_settings {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidSettings(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidSettings(format!($fmt, $($arg)*)))
    };
}
