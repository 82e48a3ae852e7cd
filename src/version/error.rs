use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid version '{input}': missing {component} component")]
    MissingComponent {
        input: String,
        component: &'static str,
    },

    #[error("Invalid version '{input}': '{value}' is not a number")]
    InvalidNumber { input: String, value: String },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No matching or compatible version found for: {0}")]
    NotFound(String),

    #[error("No releases match the requested major version {0}")]
    NoReleasesForMajor(u64),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: status {0}")]
    Server(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl RegistryError {
    /// Whether the failure is transient and the request may be retried
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RegistryError::Network(_) | RegistryError::RateLimited { .. } | RegistryError::Server(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RegistryError::RateLimited { retry_after_secs: Some(1) }, true)]
    #[case(RegistryError::Server(503), true)]
    #[case(RegistryError::NotFound("x".to_string()), false)]
    #[case(RegistryError::InvalidResponse("bad".to_string()), false)]
    fn is_retryable_returns_expected(#[case] error: RegistryError, #[case] expected: bool) {
        assert_eq!(error.is_retryable(), expected);
    }

    #[test]
    fn parse_error_message_names_input() {
        let error = ParseError::InvalidNumber {
            input: "9.x.1".to_string(),
            value: "x".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid version '9.x.1': 'x' is not a number"
        );
    }
}
