use super::FetchConfig;
use crate::Error;
use async_trait::async_trait;
use http::header::ACCEPT;
use http::StatusCode;
use reqwest::redirect::Policy;
use std::fmt;

/// What came back from a single GET: the status and the whole body as text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status
    pub status: StatusCode,

    /// The response body
    pub body: String,
}

/// Something that can perform one HTTP GET
///
/// Any failure to get a complete response (the request could not be sent, no
/// response arrived, or the body could not be read) is an `Err`. A response with a
/// failing status is still an `Ok`.
#[async_trait]
pub trait HttpTransport: fmt::Debug + Send + Sync {
    /// GET `url`, asking for the `accept` media type
    async fn get(&self, url: &str, accept: &str) -> Result<HttpResponse, Error>;
}

/// An [`HttpTransport`] on top of a `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the underlying client from `config`
    pub fn new(config: &FetchConfig) -> Result<ReqwestTransport, Error> {
        let policy = match config.max_redirects {
            0 => Policy::none(),
            n => Policy::limited(n),
        };
        let mut builder = reqwest::Client::builder()
            .redirect(policy)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .connection_verbose(config.connection_verbose);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, accept: &str) -> Result<HttpResponse, Error> {
        let response = self.client.get(url).header(ACCEPT, accept).send().await?;
        let status = response.status();

        // text() takes the response by value, so it is released here whether or
        // not the body reads cleanly
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
