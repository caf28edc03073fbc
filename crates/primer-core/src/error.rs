use std::fmt;

#[derive(Debug)]
pub enum PrimerError {
    MissingDependency(String),

    Materialization { source: String, cause: String },

    Io(std::io::Error),
}

impl fmt::Display for PrimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDependency(tool) => {
                write!(f, "missing required tool '{tool}': install it and re-run")
            }
            Self::Materialization { source, cause } => {
                write!(f, "failed to materialize '{source}': {cause}")
            }
            Self::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PrimerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => err.source(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PrimerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, PrimerError>;
