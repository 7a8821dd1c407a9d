use crate::domain::model::{NormalizedRecord, OUTPUT_HEADERS};
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the fixed catalog header followed by one row per record.
pub struct CatalogWriter<W: Write> {
    writer: Writer<W>,
    written: usize,
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.has_headers(false).terminator(Terminator::CRLF);
    builder
}

impl CatalogWriter<File> {
    /// Creates or truncates `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let writer = builder().from_path(path)?;
        Self::with_header(writer)
    }
}

impl<W: Write> CatalogWriter<W> {
    pub fn from_writer(wtr: W) -> Result<Self> {
        Self::with_header(builder().from_writer(wtr))
    }

    fn with_header(mut writer: Writer<W>) -> Result<Self> {
        writer.write_record(OUTPUT_HEADERS)?;
        Ok(Self { writer, written: 0 })
    }

    pub fn write(&mut self, record: &NormalizedRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))
    }
}
