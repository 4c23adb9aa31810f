//! CSV output for the play count distribution.

use std::{fs::File, io, path::Path};

use csv::WriterBuilder;

use crate::error::Result;
use crate::stats::Bucket;

const HEADER: [&str; 2] = ["DISTINCT_PLAY_COUNT", "CLIENT_COUNT"];

/// Write the distribution as CSV, overwriting `path` if it already exists.
///
/// The header row goes out even when there are no buckets, so an empty
/// distribution still produces a valid header-only file.
pub fn write_distribution(path: impl AsRef<Path>, buckets: &[Bucket]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, buckets)
}

fn write_csv(writer: impl io::Write, buckets: &[Bucket]) -> Result<()> {
    // Serde-driven header emission is skipped for zero records, so the
    // header is written as a literal record instead.
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(HEADER)?;
    for bucket in buckets {
        wtr.serialize(bucket)?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_serialize_with_header() {
        let buckets = vec![
            Bucket {
                distinct_play_count: 1,
                client_count: 1,
            },
            Bucket {
                distinct_play_count: 2,
                client_count: 1,
            },
        ];

        let mut buf = Vec::new();
        write_csv(&mut buf, &buckets).unwrap();
        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n1,1\n2,1\n"
        );
    }

    #[test]
    fn empty_distribution_is_header_only() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n"
        );
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        std::fs::write(&path, "stale contents that are longer than the output").unwrap();

        write_distribution(
            &path,
            &[Bucket {
                distinct_play_count: 3,
                client_count: 7,
            }],
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "DISTINCT_PLAY_COUNT,CLIENT_COUNT\n3,7\n"
        );
    }
}
