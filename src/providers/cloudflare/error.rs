use crate::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudflareProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Response missing result payload")]
    InvalidResponse,
}

pub fn map_error(e: CloudflareProviderError) -> Error {
    match e {
        CloudflareProviderError::Auth(msg) => Error::Credential(msg),
        other => Error::Provider(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_credential() {
        let err = map_error(CloudflareProviderError::Auth("bad key".to_string()));
        assert!(matches!(err, Error::Credential(_)));
    }

    #[test]
    fn api_errors_map_to_provider() {
        let err = map_error(CloudflareProviderError::Api {
            code: 81057,
            message: "Record already exists.".to_string(),
        });
        assert!(matches!(err, Error::Provider(_)));
        let err = map_error(CloudflareProviderError::RateLimited);
        assert!(matches!(err, Error::Provider(_)));
    }
}
