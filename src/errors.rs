use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirfoilError>;

#[derive(Debug, Error)]
pub enum AirfoilError {
    /// A record could not be decoded. `line` is the 1-based line of the source text where
    /// decoding stopped, which is one past the end when the text ran out early.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("unsupported format '{0}', expected one of: af, lednicer, selig")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AirfoilError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        AirfoilError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
