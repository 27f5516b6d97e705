use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::error::PagelexError;
use crate::pipeline::Config;

/// The raw markup of a fetched page.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// The url the body was finally served from.
    pub url: Url,
    /// The response body.
    pub markup: String,
}

/// The configured user agent, the default one if it isn't a valid header
/// value.
fn user_agent(config: &Config) -> HeaderValue {
    HeaderValue::from_str(config.browser_user_agent()).unwrap_or_else(|err| {
        warn!(
            "invalid user agent {:?}, using {:?}: {}",
            config.browser_user_agent(),
            Config::DEFAULT_USER_AGENT,
            err
        );
        HeaderValue::from_static(Config::DEFAULT_USER_AGENT)
    })
}

/// Fetches a single page, once.
#[derive(Debug, Clone)]
pub struct Acquirer {
    client: Client,
    http_success_only: bool,
}

impl Acquirer {
    /// Create a new `Acquirer` with the request settings of the `config`.
    pub fn new(config: &Config) -> Result<Self, PagelexError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(USER_AGENT, user_agent(config));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            http_success_only: config.http_success_only(),
        })
    }

    /// Send a single GET request to `url` and return the body as markup.
    ///
    /// The url is not validated here, a malformed url is rejected by the
    /// client and reported as [`PagelexError::HttpRequestFailure`]. There are
    /// no retries.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument, PagelexError> {
        debug!("requesting {}", url);
        let resp = self.client.get(url).send().await?;

        info!("{} responded with {}", resp.url(), resp.status());
        if self.http_success_only && !resp.status().is_success() {
            return Err(PagelexError::NoHttpSuccess {
                status: resp.status(),
            });
        }

        let url = resp.url().to_owned();
        let markup = resp.text().await?;

        Ok(RawDocument { url, markup })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_user_agent() {
        let config = Config::builder().browser_user_agent("pagelex-test/1.0").build();
        assert_eq!(user_agent(&config), "pagelex-test/1.0");
    }

    #[test]
    fn invalid_user_agent_falls_back() {
        let config = Config::builder().browser_user_agent("bad\nagent").build();
        assert_eq!(user_agent(&config), Config::DEFAULT_USER_AGENT);
        assert!(Acquirer::new(&config).is_ok());
    }
}
