use crate::{Error, FetchError, RelayInformation};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{event, span, Instrument, Level};

mod transport;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// The media type relays serve their information document as
pub const NOSTR_JSON_MEDIA_TYPE: &str = "application/nostr+json";

/// Turn a relay address into the URL its information document is served from
///
/// `wss://` becomes `https://` and `ws://` becomes `http://`. Any other scheme is
/// kept as it is, and an address without a scheme gets `https://`. The result is
/// not checked; a URL that cannot be requested fails when it is fetched.
pub fn resolve(address: &str) -> String {
    let address = address.trim();
    match address.find("://") {
        Some(pos) => {
            let (scheme, rest) = address.split_at(pos);
            if scheme.eq_ignore_ascii_case("wss") {
                format!("https{rest}")
            } else if scheme.eq_ignore_ascii_case("ws") {
                format!("http{rest}")
            } else {
                address.to_owned()
            }
        }
        None => format!("https://{address}"),
    }
}

/// Settings for the HTTP client used to fetch relay information
#[derive(Clone, Debug)]
pub struct FetchConfig {
    /// How long to wait for a connection to be established
    pub connect_timeout: Duration,

    /// How long the whole request, including reading the body, may take
    pub timeout: Duration,

    /// How many redirects to follow. Zero means none.
    pub max_redirects: usize,

    /// User-Agent header to send, if any
    pub user_agent: Option<String>,

    /// Log connection reads and writes at TRACE level
    pub connection_verbose: bool,
}

impl Default for FetchConfig {
    fn default() -> FetchConfig {
        FetchConfig {
            connect_timeout: Duration::from_secs(60),
            timeout: Duration::from_secs(60),
            max_redirects: 0,
            user_agent: None,
            connection_verbose: false,
        }
    }
}

impl FetchConfig {
    /// Set both the connect timeout and the overall timeout
    pub fn with_timeout(mut self, timeout: Duration) -> FetchConfig {
        self.connect_timeout = timeout;
        self.timeout = timeout;
        self
    }

    /// Follow up to `max` redirects
    pub fn with_max_redirects(mut self, max: usize) -> FetchConfig {
        self.max_redirects = max;
        self
    }

    /// Send this User-Agent
    pub fn with_user_agent(mut self, agent: &str) -> FetchConfig {
        self.user_agent = Some(agent.to_owned());
        self
    }
}

/// Fetches relay information documents
///
/// Every call makes one fresh request; nothing is cached or retried. Calls do not
/// share any mutable state, so one fetcher can serve many concurrent fetches.
#[derive(Debug)]
pub struct RelayInfoFetcher<T: HttpTransport = ReqwestTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> Clone for RelayInfoFetcher<T> {
    fn clone(&self) -> Self {
        RelayInfoFetcher {
            transport: self.transport.clone(),
        }
    }
}

impl RelayInfoFetcher<ReqwestTransport> {
    /// A fetcher using reqwest with the default [`FetchConfig`]
    pub fn new() -> Result<RelayInfoFetcher<ReqwestTransport>, Error> {
        Self::with_config(&FetchConfig::default())
    }

    /// A fetcher using reqwest configured by `config`
    pub fn with_config(config: &FetchConfig) -> Result<RelayInfoFetcher<ReqwestTransport>, Error> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: HttpTransport + 'static> RelayInfoFetcher<T> {
    /// A fetcher using the given transport
    pub fn with_transport(transport: T) -> RelayInfoFetcher<T> {
        RelayInfoFetcher {
            transport: Arc::new(transport),
        }
    }

    /// Fetch and parse the information document of the relay at `address`
    pub async fn fetch(&self, address: &str) -> Result<RelayInformation, FetchError> {
        let url = resolve(address);
        let span = span!(Level::DEBUG, "relay information fetch", url = url.as_str());
        self.fetch_url(url).instrument(span).await
    }

    /// Fetch in a spawned task and hand the outcome to `on_complete`
    ///
    /// `on_complete` runs exactly once, on a runtime worker, with either the document
    /// or the error. Dropping the returned handle does not cancel the fetch, so a
    /// caller that has lost interest must ignore the late result itself.
    ///
    /// The task is spawned on the current tokio runtime. Outside of one nothing is
    /// spawned: `on_complete` is called right away with a `Network` error whose
    /// source is [`Error::NoRuntime`], and `None` is returned.
    pub fn fetch_with<F>(&self, address: &str, on_complete: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Result<RelayInformation, FetchError>) + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                event!(Level::WARN, "cannot fetch relay information: {e}");
                on_complete(Err(FetchError::Network {
                    url: resolve(address),
                    source: e.into(),
                }));
                return None;
            }
        };

        let fetcher = self.clone();
        let address = address.to_owned();
        Some(runtime.spawn(async move {
            let result = fetcher.fetch(&address).await;
            on_complete(result);
        }))
    }

    async fn fetch_url(&self, url: String) -> Result<RelayInformation, FetchError> {
        event!(Level::DEBUG, "requesting relay information");
        match self.transport.get(&url, NOSTR_JSON_MEDIA_TYPE).await {
            Ok(response) => classify(url, response),
            Err(e) => {
                event!(Level::WARN, "relay information request failed: {e}");
                Err(FetchError::Network { url, source: e })
            }
        }
    }
}

/// Fetch the information document of the relay at `address` with the default [`FetchConfig`]
pub async fn fetch_relay_information(address: &str) -> Result<RelayInformation, FetchError> {
    match RelayInfoFetcher::new() {
        Ok(fetcher) => fetcher.fetch(address).await,
        Err(e) => Err(FetchError::Network {
            url: resolve(address),
            source: e,
        }),
    }
}

// Sort a complete response into a document or one of the response-level errors.
// The body is only parsed when the status is a success.
fn classify(url: String, response: HttpResponse) -> Result<RelayInformation, FetchError> {
    let HttpResponse { status, body } = response;

    if !status.is_success() {
        event!(Level::WARN, "relay answered HTTP {status}");
        event!(Level::DEBUG, "response body: {body}");
        return Err(FetchError::HttpStatus { url, status, body });
    }

    match RelayInformation::from_json(&body) {
        Ok(rid) => {
            event!(Level::DEBUG, "relay information received");
            Ok(rid)
        }
        Err(e) => {
            event!(Level::WARN, "relay information is not parseable: {e}");
            event!(Level::DEBUG, "response body: {body}");
            Err(FetchError::Malformed { url, body })
        }
    }
}
