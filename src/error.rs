//! Error types.
//!
//! The analysis core reports failures through [`AnalysisError`], a closed set
//! of data-quality conditions. These are not transient faults: retrying with
//! the same input is meaningless, so every error is surfaced immediately to
//! the caller and never caught or downgraded inside the pipeline.
//!
//! The binary wraps core and I/O failures in [`AppError`], which carries the
//! process exit code.

/// A failure detected by the analysis core.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The two input series share no overlapping valid year range.
    EmptyIntersection,
    /// The requested lag or lag window yields no usable candidates.
    InvalidLagWindow(String),
    /// One or both standardized series have zero variance.
    UndefinedCorrelation,
    /// Fewer aligned observations than the operation requires.
    InsufficientData { needed: usize, got: usize },
    /// The lagged predictor is constant, making the design matrix singular.
    SingularDesign,
}

impl AnalysisError {
    /// Process exit code for this error class.
    ///
    /// 2 = invalid arguments, 3 = insufficient/degenerate data, 4 = numeric failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalysisError::InvalidLagWindow(_) => 2,
            AnalysisError::EmptyIntersection
            | AnalysisError::UndefinedCorrelation
            | AnalysisError::InsufficientData { .. } => 3,
            AnalysisError::SingularDesign => 4,
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::EmptyIntersection => {
                write!(f, "Series share no overlapping valid year range.")
            }
            AnalysisError::InvalidLagWindow(detail) => {
                write!(f, "Invalid lag window: {detail}")
            }
            AnalysisError::UndefinedCorrelation => {
                write!(f, "Correlation undefined: series has zero variance.")
            }
            AnalysisError::InsufficientData { needed, got } => {
                write!(f, "Insufficient data: need at least {needed} aligned points, got {got}.")
            }
            AnalysisError::SingularDesign => {
                write!(f, "Singular design matrix: lagged predictor is constant.")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Application-level error carrying a process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_errors_map_to_exit_codes() {
        assert_eq!(AnalysisError::InvalidLagWindow("x".into()).exit_code(), 2);
        assert_eq!(AnalysisError::EmptyIntersection.exit_code(), 3);
        assert_eq!(AnalysisError::InsufficientData { needed: 2, got: 1 }.exit_code(), 3);
        assert_eq!(AnalysisError::UndefinedCorrelation.exit_code(), 3);
        assert_eq!(AnalysisError::SingularDesign.exit_code(), 4);
    }

    #[test]
    fn app_error_preserves_core_exit_code() {
        let app: AppError = AnalysisError::SingularDesign.into();
        assert_eq!(app.exit_code(), 4);
        assert!(app.to_string().contains("Singular design"));
    }
}
