//! Distinct-play-count distribution over a music stream event log.
//!
//! The pipeline reads a tab-separated event log, keeps the rows from one
//! calendar date, counts distinct songs per client, tallies clients per
//! distinct-song count, and writes the tally out as CSV:
//!
//! Loader → DateFilter → ClientAggregator → DistributionAggregator → Writer
//!
//! Every stage runs to completion and hands a fresh in-memory value to the
//! next; the first error aborts the run.

use std::path::Path;

use log::info;

pub mod error;
pub mod report;
pub mod stats;
pub mod table;

pub use error::{Error, Result};
pub use stats::{Bucket, ClientPlays};
pub use table::Table;

/// Run the whole pipeline: read the event log at `input`, keep plays whose
/// timestamp contains `date`, aggregate, and write the distribution to
/// `output`.
pub fn run(input: &Path, date: &str, output: &Path) -> Result<()> {
    let events = table::load_events(input)?;
    info!("loaded {} events from {}", events.len(), input.display());

    let on_date = stats::filter_date(&events, date)?;
    info!("{} events match date {date}", on_date.len());

    let per_client = stats::distinct_plays_per_client(&on_date)?;
    info!("{} distinct clients", per_client.len());

    let distribution = stats::play_count_distribution(&per_client);
    info!("{} distribution buckets", distribution.len());

    report::write_distribution(output, &distribution)
}
