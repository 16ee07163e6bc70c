use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("profile error: {0}")]
    Profile(String),

    #[error("assistant error: {0}")]
    Assistant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("server.port = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: server.port = 0 is out of range"
        );
    }

    #[test]
    fn folio_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: FolioError = config_err.into();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn folio_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn folio_error_other_variants() {
        let err = FolioError::Profile("name is empty".into());
        assert_eq!(err.to_string(), "profile error: name is empty");

        let err = FolioError::Assistant("GEMINI_API_KEY not set".into());
        assert_eq!(err.to_string(), "assistant error: GEMINI_API_KEY not set");
    }
}
