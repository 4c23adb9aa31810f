//! In-memory tabular data loaded from delimited text.

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Columns every event log must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["CLIENT_ID", "SONG_ID", "PLAY_TS"];

/// A loaded delimited file: named columns and rows of string fields.
///
/// Column order and row order match the source file, and columns the
/// pipeline never reads are carried along untouched. Stages never mutate a
/// table they were handed; they build a new one.
#[derive(Clone, Debug)]
pub struct Table {
    columns: IndexSet<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Parse tab-separated data with a header row.
    ///
    /// A data row whose field count differs from the header's is an error,
    /// as is a repeated column name or missing header.
    pub fn from_tsv(reader: impl io::Read) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(false)
            .from_reader(reader);

        let header = rdr.headers()?.clone();
        if header.is_empty() {
            return Err(Error::Parse("missing header row".into()));
        }

        let mut columns = IndexSet::new();
        for name in header.iter() {
            if !columns.insert(name.to_string()) {
                return Err(Error::Parse(format!("duplicate column {name:?}")));
            }
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?);
        }

        Ok(Table { columns, rows })
    }

    /// Build a new table with the same columns but a different set of rows.
    pub fn with_rows(&self, rows: Vec<StringRecord>) -> Self {
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Index of a named column, for use with [`StringRecord::get`].
    pub fn column(&self, name: &str) -> Result<usize> {
        self.columns
            .get_index_of(name)
            .ok_or_else(|| Error::Parse(format!("missing column {name:?}")))
    }

    pub fn rows(&self) -> impl Iterator<Item = &StringRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load the play event log, verifying the columns the pipeline reads are
/// present.
pub fn load_events(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let table = Table::from_tsv(file)?;
    for name in REQUIRED_COLUMNS {
        table.column(name)?;
    }
    Ok(table)
}
