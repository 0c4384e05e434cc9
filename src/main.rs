mod dispatch;
mod error;
mod fetch;
mod report;
mod sites;
mod stats;
mod timer;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use crate::dispatch::{fetch_concurrent, fetch_sequential};
use crate::fetch::Fetcher;
use crate::stats::UrlStatistic;
use crate::timer::Timer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let sites_file =
        PathBuf::from(env::var("SITES_FILE").unwrap_or_else(|_| "sites.csv".to_string()));
    let urls = sites::load_urls(&sites_file)?;
    info!(count = urls.len(), file = %sites_file.display(), "loaded url list");

    println!("Web Statistics");
    println!("==============");

    let fetcher = Arc::new(Fetcher::over_http());

    report::print_banner("Http-Get with spawned tasks");
    let timer = Timer::new();
    let results = fetch_concurrent(Arc::clone(&fetcher), &urls).await;
    let total = timer.elapsed();
    for result in &results {
        match result {
            Ok(statistic) => report::print_row(statistic),
            Err(error) => report::print_error_row(error),
        }
    }
    let records: Vec<&UrlStatistic> = results
        .iter()
        .filter_map(|result| result.as_ref().ok())
        .collect();
    let summary = stats::summarize(records, total)?;
    report::print_summary(&summary);

    report::print_banner("Http-Get with one await at a time");
    let timer = Timer::new();
    match fetch_sequential(&fetcher, &urls).await {
        Ok(records) => {
            let total = timer.elapsed();
            for statistic in &records {
                report::print_row(statistic);
            }
            let summary = stats::summarize(&records, total)?;
            report::print_summary(&summary);
        }
        Err(error) => {
            // Fail-fast: no report for this variant, the run still ends
            // normally so the concurrent results remain visible.
            warn!(%error, "sequential batch aborted");
        }
    }

    Ok(())
}
