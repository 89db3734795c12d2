use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the growth engine and its entity models.
///
/// Constructors and setters validate their inputs and report failures here instead of
/// letting NaN or infinity leak into the growth law.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid physical input (non-positive radius, density, temperature, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A computation produced a non-finite value.
    #[error("numerical error: {0}")]
    MathError(String),

    /// Scenario description is inconsistent or incomplete.
    #[error("invalid scenario: {0}")]
    Config(String),

    /// Scenario JSON could not be parsed or written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("radius must be finite and > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<f64>("not a number").unwrap_err();
        let e: Error = parse.into();
        assert!(matches!(e, Error::Json(_)));
    }
}
