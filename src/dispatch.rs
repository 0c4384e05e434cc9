use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::stats::UrlStatistic;

/// Fan-out/fan-in: spawn one worker per url, then gather the handles in
/// input order. Waiting in order does not serialize the work; every fetch
/// is already in flight by the time the first handle is awaited. A failed
/// fetch occupies its own slot and leaves its siblings running.
pub async fn fetch_concurrent(
    fetcher: Arc<Fetcher>,
    urls: &[String],
) -> Vec<Result<UrlStatistic, FetchError>> {
    let mut handles: Vec<JoinHandle<Result<UrlStatistic, FetchError>>> =
        Vec::with_capacity(urls.len());
    for (position, url) in urls.iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let url = url.clone();
        handles.push(tokio::spawn(
            async move { fetcher.fetch_one(position + 1, &url).await },
        ));
    }
    let mut results = Vec::with_capacity(handles.len());
    for (position, handle) in handles.into_iter().enumerate() {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(FetchError {
                index: position + 1,
                url: urls[position].clone(),
                source: join_error.into(),
            }),
        };
        results.push(result);
    }
    results
}

/// One await at a time: fetch i+1 is not issued until fetch i has
/// completed, so total wall clock approximates the sum of latencies.
/// Fail-fast, since nothing else is in flight to wait for.
pub async fn fetch_sequential(
    fetcher: &Fetcher,
    urls: &[String],
) -> Result<Vec<UrlStatistic>, FetchError> {
    let mut records = Vec::with_capacity(urls.len());
    for (position, url) in urls.iter().enumerate() {
        records.push(fetcher.fetch_one(position + 1, url).await?);
    }
    Ok(records)
}
