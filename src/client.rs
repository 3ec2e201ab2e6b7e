use crate::config::AdminConfig;
use crate::errors::ConfigError;
use reqwest::{header::CONTENT_TYPE, Client, Method, Response, Url};
use serde::Serialize;
use tracing::debug;

/// Thin wrapper over the activities REST collection.
///
/// Every call is a single attempt and hands the raw [`Response`] back so the
/// caller decides how to read the status and body. Only failures to complete
/// the request at all surface as `Err`.
#[derive(Debug, Clone)]
pub struct ActivityClient {
    http: Client,
    base: Url,
}

impl ActivityClient {
    pub fn new(config: &AdminConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(&config.api_url).map_err(|err| ConfigError::InvalidApiUrl {
            url: config.api_url.clone(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: config.api_url.clone(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/{id}`, with `id` encoded as a single path segment.
    pub fn item_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    pub async fn list(&self) -> Result<Response, reqwest::Error> {
        self.send(Method::GET, self.base.clone(), None::<&()>).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<Response, reqwest::Error> {
        self.send(Method::POST, self.base.clone(), Some(body)).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Response, reqwest::Error> {
        self.send(Method::PUT, self.item_url(id), Some(body)).await
    }

    pub async fn delete(&self, id: &str) -> Result<Response, reqwest::Error> {
        self.send(Method::DELETE, self.item_url(id), None::<&()>).await
    }

    pub async fn delete_all(&self) -> Result<Response, reqwest::Error> {
        self.send(Method::DELETE, self.base.clone(), None::<&()>).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, reqwest::Error> {
        debug!(%method, %url, "activities request");
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await
    }
}
