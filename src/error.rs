use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream rejected the bearer token")]
    UpstreamUnauthorized,

    #[error("Upstream model is loading")]
    UpstreamUnavailable,

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Unexpected upstream payload: {0}")]
    Decode(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Maps a non-success upstream status onto the matching variant.
    pub fn from_upstream_status(status: u16) -> Self {
        match status {
            401 => Self::UpstreamUnauthorized,
            503 => Self::UpstreamUnavailable,
            status => Self::UpstreamStatus { status },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upstream_status_mapping() {
        assert!(matches!(
            Error::from_upstream_status(401),
            Error::UpstreamUnauthorized
        ));
        assert!(matches!(
            Error::from_upstream_status(503),
            Error::UpstreamUnavailable
        ));
        assert!(matches!(
            Error::from_upstream_status(429),
            Error::UpstreamStatus { status: 429 }
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("HUGGING_FACE_TOKEN is not set").to_string(),
            "Configuration error: HUGGING_FACE_TOKEN is not set"
        );
        assert_eq!(
            Error::from_upstream_status(500).to_string(),
            "Upstream returned status 500"
        );
    }
}
