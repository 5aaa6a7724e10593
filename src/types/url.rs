use crate::Error;
use derive_more::{AsMut, AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// A string that is supposed to be a URL, as a relay declared it, but which has
/// not been checked
#[derive(
    AsMut,
    AsRef,
    Clone,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
)]
pub struct UncheckedUrl(pub String);

impl UncheckedUrl {
    /// Create from a &str
    // note - this from_str cannot error, so we don't impl std::str::FromStr which by
    //        all rights should be called from_str_infallible
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> UncheckedUrl {
        UncheckedUrl(s.to_owned())
    }

    /// As &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that this is a usable http or https URL
    pub fn to_http_url(&self) -> Result<Url, Error> {
        Url::new_validated(&self.0)
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> UncheckedUrl {
        UncheckedUrl("https://example.com/payments".to_string())
    }
}

/// An http or https URL that has been checked to parse and to have a host
#[derive(AsRef, Clone, Debug, Deref, Display, Eq, Hash, Into, PartialEq, PartialOrd, Ord, Serialize)]
pub struct Url(String);

impl Url {
    /// Create a new Url from a string, if it is a valid http(s) URL
    pub fn new_validated(s: &str) -> Result<Url, Error> {
        let url = url::Url::parse(s.trim())?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(Error::InvalidUrlScheme(url.scheme().to_owned()));
        }

        if url.host_str().map(|h| h.is_empty()).unwrap_or(true) {
            return Err(Error::InvalidUrl(url::ParseError::EmptyHost));
        }

        Ok(Url(url.as_str().to_owned()))
    }

    /// As &str
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
