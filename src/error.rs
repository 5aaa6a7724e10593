use thiserror::Error;

/// Errors that can occur in the nostr-relay-info crate
#[derive(Error, Debug)]
pub enum Error {
    /// Hex string decoding error
    #[error("Hex Decode Error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Invalid public key
    #[error("Invalid Public Key")]
    InvalidPublicKey,

    /// Invalid URL
    #[error("Invalid URL: \"{0}\"")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid URL Scheme
    #[error("Invalid URL Scheme: \"{0}\"")]
    InvalidUrlScheme(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// No tokio runtime to run a fetch on
    #[error("No tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// Serialization error
    #[error("JSON (de)serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport error not originating from reqwest
    #[error("Transport error: {0}")]
    Transport(String),
}

/// The ways a relay information fetch can fail.
///
/// Every variant is terminal for a single fetch; no partial document is ever
/// returned alongside one of these.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response: DNS, connection, TLS, timeout,
    /// an unusable URL, or a failure reading the body
    #[error("Network error fetching relay information from {url}: {source}")]
    Network {
        /// The resolved URL that was requested
        url: String,

        /// The underlying cause
        #[source]
        source: Error,
    },

    /// The relay answered with a non-success HTTP status
    #[error("Relay information request to {url} failed with HTTP status {status}")]
    HttpStatus {
        /// The resolved URL that was requested
        url: String,

        /// The status the server answered with
        status: http::StatusCode,

        /// The raw response body, for diagnostics
        body: String,
    },

    /// The relay answered successfully but the body is not a relay information document
    #[error("Malformed relay information document from {url}")]
    Malformed {
        /// The resolved URL that was requested
        url: String,

        /// The raw response body, for diagnostics
        body: String,
    },
}

impl FetchError {
    /// The resolved URL the failed request was sent to
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. } => url,
            FetchError::HttpStatus { url, .. } => url,
            FetchError::Malformed { url, .. } => url,
        }
    }

    /// The raw response body, if a response was received at all
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::Network { .. } => None,
            FetchError::HttpStatus { body, .. } => Some(body),
            FetchError::Malformed { body, .. } => Some(body),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fetch_error_accessors() {
        let e = FetchError::HttpStatus {
            url: "https://relay.example.com".to_owned(),
            status: http::StatusCode::NOT_FOUND,
            body: "not here".to_owned(),
        };
        assert_eq!(e.url(), "https://relay.example.com");
        assert_eq!(e.body(), Some("not here"));

        let e = FetchError::Network {
            url: "https://relay.example.com".to_owned(),
            source: Error::Transport("connection refused".to_owned()),
        };
        assert_eq!(e.body(), None);
        assert!(format!("{}", e).contains("connection refused"));
    }

    #[test]
    fn test_malformed_display_hides_body() {
        let e = FetchError::Malformed {
            url: "https://relay.example.com".to_owned(),
            body: "<html>oops</html>".to_owned(),
        };
        let s = format!("{}", e);
        assert!(!s.contains("oops"));
    }
}
