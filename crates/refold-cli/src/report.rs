use crate::error::Result;
use refold::workflows::design::DesignReport;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    index: usize,
    sequence: &'a str,
    hamming_distance: usize,
    gc_fraction: f64,
}

pub fn write_csv(path: &Path, report: &DesignReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in &report.records {
        writer.serialize(CsvRow {
            index: record.index,
            sequence: record.sequence.as_str(),
            hamming_distance: record.hamming_distance,
            gc_fraction: record.gc_fraction,
        })?;
    }
    writer.flush()?;
    Ok(())
}
