use thiserror::Error;

/// Boundary error type.
///
/// The codec, planner and resolver are total and never produce one of these. They are
/// raised only when a caller hands over a value that cannot be turned into a typed input
/// (an arity of 6, a percent of "abc", a spacing mode of "loose") or when the reference
/// caller fails to read its input.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid arity: {0} (expected 5 or 7)")]
    InvalidArity(usize),

    #[error("Invalid font scale percent: {0}")]
    InvalidPercent(String),

    #[error("Invalid spacing mode: {0} (expected tight, normal or wide)")]
    InvalidSpacingMode(String),

    #[error("Unknown record kind: {0} (expected experience, education or project)")]
    UnknownRecordKind(String),

    #[error("Template catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Stable machine-readable code, mirrored in the binary's error output.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArity(_) => "INVALID_ARITY",
            AppError::InvalidPercent(_) => "INVALID_PERCENT",
            AppError::InvalidSpacingMode(_) => "INVALID_SPACING_MODE",
            AppError::UnknownRecordKind(_) => "UNKNOWN_RECORD_KIND",
            AppError::Catalog(_) => "CATALOG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::InvalidArity(6).code(), "INVALID_ARITY");
        assert_eq!(
            AppError::InvalidSpacingMode("loose".into()).code(),
            "INVALID_SPACING_MODE"
        );
    }

    #[test]
    fn test_display_names_offending_value() {
        let msg = AppError::InvalidPercent("abc".to_string()).to_string();
        assert!(msg.contains("abc"), "message was {msg}");
    }
}
