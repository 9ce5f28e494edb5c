use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum OctaveError {
    #[error("Invalid config: interval and fmin/fmax are mutually exclusive")]
    ConflictingSelection,

    #[error("Invalid config: {message}")]
    Config { message: String },

    #[error("Cannot set {field}: calculator is configured by {mode}")]
    Locked {
        field: &'static str,
        mode: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl OctaveError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// Errors travel alongside band tables in JSON reports.
impl Serialize for OctaveError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OctaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message() {
        let err = OctaveError::Locked {
            field: "fmin",
            mode: "interval",
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Cannot set fmin: calculator is configured by interval\"");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<Vec<f64>>("[1.0,").unwrap_err();
        let err: OctaveError = parse.into();
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
