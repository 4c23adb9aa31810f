//! Date filtering and the two aggregation stages.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::Result;
use crate::table::Table;

/// Distinct songs played by one client within the filtered window.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientPlays {
    pub client_id: String,
    pub distinct_play_count: u64,
}

/// One histogram bucket: how many clients share a distinct play count.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Bucket {
    pub distinct_play_count: u64,
    pub client_count: u64,
}

/// Keep rows whose `PLAY_TS` field contains `date` as a literal substring.
///
/// Substring containment, not date parsing: `10/08/2016` matches a
/// timestamp of `10/08/20167` too. Row order is preserved, and zero matches
/// produce an empty table rather than an error.
pub fn filter_date(events: &Table, date: &str) -> Result<Table> {
    let ts = events.column("PLAY_TS")?;
    let rows = events
        .rows()
        .filter(|r| r.get(ts).unwrap_or("").contains(date))
        .cloned()
        .collect();
    Ok(events.with_rows(rows))
}

/// Count distinct songs per client.
///
/// Repeat plays of one song count once. Output is sorted ascending by
/// client id so identical input always yields identical output.
pub fn distinct_plays_per_client(events: &Table) -> Result<Vec<ClientPlays>> {
    let client = events.column("CLIENT_ID")?;
    let song = events.column("SONG_ID")?;

    let mut songs_by_client: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for row in events.rows() {
        songs_by_client
            .entry(row.get(client).unwrap_or(""))
            .or_default()
            .insert(row.get(song).unwrap_or(""));
    }

    Ok(songs_by_client
        .into_iter()
        .map(|(client_id, songs)| ClientPlays {
            client_id: client_id.to_string(),
            distinct_play_count: songs.len() as u64,
        })
        .collect())
}

/// Tally clients per distinct-play-count value, ascending by count.
pub fn play_count_distribution(counts: &[ClientPlays]) -> Vec<Bucket> {
    let mut buckets: BTreeMap<u64, u64> = BTreeMap::new();
    for c in counts {
        *buckets.entry(c.distinct_play_count).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(distinct_play_count, client_count)| Bucket {
            distinct_play_count,
            client_count,
        })
        .collect()
}
