use std::sync::Arc;
use std::thread;

use async_trait::async_trait;
use tokio::runtime::Handle;

use crate::error::{FetchError, TransportError};
use crate::stats::{UrlStatistic, SIZE_UNKNOWN};
use crate::timer::Timer;

pub struct TransportResponse {
    pub content_length: Option<u64>,
}

/// Seam between the fetch worker and the wire. Implementations must be
/// safe for concurrent use by every worker in a batch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Resolves once response headers are available; the body is not read.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        Ok(TransportResponse {
            content_length: response.content_length(),
        })
    }
}

/// Reports which execution context a fetch ran under. Injectable so tests
/// can pin both fields; the values feed the report and nothing else.
pub trait ContextProbe: Send + Sync {
    fn context_id(&self) -> String;
    fn pool_size(&self) -> usize;
}

pub struct RuntimeProbe;

impl ContextProbe for RuntimeProbe {
    fn context_id(&self) -> String {
        format!("{:?}", thread::current().id())
    }

    fn pool_size(&self) -> usize {
        Handle::try_current()
            .map(|handle| handle.metrics().num_workers())
            .unwrap_or(0)
    }
}

pub struct Fetcher {
    transport: Arc<dyn Transport>,
    probe: Arc<dyn ContextProbe>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, probe: Arc<dyn ContextProbe>) -> Self {
        Self { transport, probe }
    }

    pub fn over_http() -> Self {
        Self::new(Arc::new(HttpTransport::new()), Arc::new(RuntimeProbe))
    }

    /// Performs one GET and produces its statistic. The timer covers only
    /// the transport call, not dispatch overhead or record construction.
    pub async fn fetch_one(&self, index: usize, url: &str) -> Result<UrlStatistic, FetchError> {
        let target = with_http_scheme(url);
        let timer = Timer::new();
        let response = self
            .transport
            .get(&target)
            .await
            .map_err(|source| FetchError {
                index,
                url: url.to_string(),
                source,
            })?;
        let elapsed_ms = timer.elapsed_millis();
        Ok(UrlStatistic {
            index,
            url: url.to_string(),
            elapsed_ms,
            size_bytes: response
                .content_length
                .map(|length| length as i64)
                .unwrap_or(SIZE_UNKNOWN),
            context_id: self.probe.context_id(),
            pool_size: self.probe.pool_size(),
        })
    }
}

/// The worker talks plain http; sources list bare hostnames.
pub fn with_http_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
