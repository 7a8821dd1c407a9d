use crate::core::filter::has_required_fields;
use crate::core::reader::RecordReader;
use crate::core::writer::CatalogWriter;
use crate::core::{ConfigProvider, NormalizedRecord, RowTransformer};
use crate::utils::error::Result;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub records_written: usize,
    pub rows_skipped: usize,
    pub output_path: PathBuf,
}

/// Runs Reader -> Transformer -> Filter -> Writer in a single pass.
pub struct EtlEngine<T: RowTransformer> {
    transformer: T,
}

impl<T: RowTransformer> EtlEngine<T> {
    pub fn new(transformer: T) -> Self {
        Self { transformer }
    }

    pub fn run_with_config<C: ConfigProvider>(&self, config: &C) -> Result<RunSummary> {
        self.run(config.input_path(), config.output_path())
    }

    /// The output file is only created once the whole input has been read.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        tracing::info!("Reading raw records from: {}", input.display());
        let reader = RecordReader::open(input)?;
        let (records, rows_read) = self.extract_and_transform(reader)?;
        let rows_skipped = rows_read - records.len();
        tracing::info!(
            "Transformed {} rows, kept {}, skipped {}",
            rows_read,
            records.len(),
            rows_skipped
        );

        tracing::info!("Writing cleaned records to: {}", output.display());
        let writer = CatalogWriter::create(output)?;
        let records_written = self.load(writer, &records)?;

        Ok(RunSummary {
            rows_read,
            records_written,
            rows_skipped,
            output_path: output.to_path_buf(),
        })
    }

    /// Transforms every row and keeps those passing the filter, in input order.
    pub fn extract_and_transform<R: Read>(
        &self,
        reader: RecordReader<R>,
    ) -> Result<(Vec<NormalizedRecord>, usize)> {
        let mut kept = Vec::new();
        let mut rows_read = 0;

        for (index, raw) in reader.enumerate() {
            let raw = raw?;
            rows_read += 1;

            let record = self.transformer.transform(&raw);
            if has_required_fields(&record) {
                kept.push(record);
            } else {
                tracing::debug!("Skipping row {}: missing product name or page URL", index + 1);
            }
        }

        Ok((kept, rows_read))
    }

    pub fn load<W: Write>(
        &self,
        mut writer: CatalogWriter<W>,
        records: &[NormalizedRecord],
    ) -> Result<usize> {
        for record in records {
            writer.write(record)?;
        }
        let written = writer.written();
        writer.finish()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawRecord;

    struct PassThrough;

    impl RowTransformer for PassThrough {
        fn transform(&self, raw: &RawRecord) -> NormalizedRecord {
            NormalizedRecord {
                product_page_url: raw.get("url").to_string(),
                product_name: raw.get("name").to_string(),
                ..Default::default()
            }
        }
    }

    #[test]
    fn test_filter_drops_incomplete_rows() {
        let data = "url,name\nu1,A\n,B\nu3,\nu4,D\n";
        let engine = EtlEngine::new(PassThrough);
        let reader = RecordReader::from_reader(data.as_bytes()).unwrap();

        let (records, rows_read) = engine.extract_and_transform(reader).unwrap();
        assert_eq!(rows_read, 4);
        let names: Vec<&str> = records.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_load_reports_count() {
        let engine = EtlEngine::new(PassThrough);
        let records = vec![NormalizedRecord::default(); 3];
        let writer = CatalogWriter::from_writer(Vec::new()).unwrap();
        assert_eq!(engine.load(writer, &records).unwrap(), 3);
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let engine = EtlEngine::new(PassThrough);

        let result = engine.run(&dir.path().join("missing.csv"), &output);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
