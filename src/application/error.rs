use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError};

/// Failures surfaced by the `quaderno` front end. The rendering pipeline
/// itself never fails; these cover configuration, I/O and output encoding.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to encode output: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infra_errors_are_transparent() {
        let error = AppError::from(InfraError::telemetry("subscriber already set"));
        assert_eq!(
            error.to_string(),
            "telemetry initialization failed: subscriber already set"
        );
    }

    #[test]
    fn configuration_errors_name_the_key() {
        let error = AppError::from(LoadError::invalid("logging.level", "unknown level `loud`"));
        assert!(error.to_string().contains("logging.level"));
    }
}
