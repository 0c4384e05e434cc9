use crate::error::FetchError;
use crate::stats::{BatchSummary, UrlStatistic, SIZE_UNKNOWN};

pub fn print_banner(title: &str) {
    println!();
    println!("========== {title} ==========");
}

pub fn print_row(statistic: &UrlStatistic) {
    println!(
        "{:>3} {:<20} Size: {:>10} GetTime: {:>5}ms ThreadId: {:<12} Threads: {:>3}",
        statistic.index,
        statistic.url,
        format_size(statistic.size_bytes),
        statistic.elapsed_ms,
        statistic.context_id,
        statistic.pool_size,
    );
}

/// Failed fetches still get a row, so the report always shows one line
/// per input url.
pub fn print_error_row(error: &FetchError) {
    println!("{:>3} {:<20} ERROR: {}", error.index, error.url, error.source);
}

pub fn print_summary(summary: &BatchSummary) {
    println!();
    println!(
        "Total: {}ms, slowest get: {}ms",
        summary.total_wall_ms, summary.max_latency_ms
    );
    println!(
        "{} threads for {} get-tasks",
        summary.distinct_contexts, summary.record_count
    );
}

fn format_size(size_bytes: i64) -> String {
    match size_bytes {
        SIZE_UNKNOWN => "?".to_string(),
        size => size.to_string(),
    }
}
