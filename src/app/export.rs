use crate::domain::model::TimeSeriesPoint;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes the chart series as CSV with a header row. Values stay in
/// millions, matching the chart.
pub fn write_series_csv<W: Write>(writer: W, points: &[TimeSeriesPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_series_csv<P: AsRef<Path>>(path: P, points: &[TimeSeriesPoint]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(&path)?;
    write_series_csv(file, points)?;
    tracing::debug!("series written to {}", path.as_ref().display());
    Ok(())
}
