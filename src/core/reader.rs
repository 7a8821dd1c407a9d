use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Lazily yields one `RawRecord` per data row of a CSV export.
///
/// Rows shorter than the header simply lack the trailing columns; extra
/// cells are ignored. When a header name repeats, the rightmost column wins.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    row: StringRecord,
}

impl RecordReader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> RecordReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        Ok(Self {
            reader,
            headers,
            row: StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(self
                .headers
                .iter()
                .zip(self.row.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect())),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
