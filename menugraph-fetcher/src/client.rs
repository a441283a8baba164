use crate::error::{FetchError, Result};
use crate::page::PageEnvelope;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Anything that can hand out pages of menus by 1-based page number.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<PageEnvelope>> + Send;
}

pub struct MenuClient {
    client: Client,
    base_url: Url,
}

impl MenuClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, 10)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!("menugraph/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with its `page` query parameter set to `page`, keeping every
    /// other parameter in place.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "page")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &kept {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("page", &page.to_string());
        }
        url
    }
}

impl PageSource for MenuClient {
    async fn fetch_page(&self, page: u32) -> Result<PageEnvelope> {
        let url = self.page_url(page);
        debug!("Fetching page {} from {}", page, url);

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http { page, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Page {} returned {}", page, status);
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Http { page, source })?;

        let envelope: PageEnvelope =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { page, source })?;

        debug!(
            "Page {} decoded: {} menus in {:?}",
            page,
            envelope.menus.len(),
            start.elapsed()
        );
        Ok(envelope)
    }
}
