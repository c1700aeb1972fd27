use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::summary::Summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Csv,
    Txt,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }
}

/// Writes the summary to a timestamped file in `dir` and returns its path.
/// Collisions within the same second overwrite silently.
pub fn write_summary(summary: &Summary, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let filename = format!(
        "portfolio_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    );
    let path = dir.join(filename);

    match format {
        ExportFormat::Csv => write_csv(summary, &path)?,
        ExportFormat::Txt => write_txt(summary, &path)?,
    }

    info!("wrote {} rows to {}", summary.rows.len(), path.display());
    Ok(path)
}

fn write_csv(summary: &Summary, path: &Path) -> Result<()> {
    // header and data rows go through the csv writer so odd tickers stay quoted
    let mut body = vec![];
    {
        let mut writer = csv::Writer::from_writer(&mut body);
        for row in &summary.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }

    let mut file = File::create(path)?;
    file.write_all(&body)?;
    writeln!(file)?;
    writeln!(file, "Total,,,{}", summary.total)?;
    Ok(())
}

fn write_txt(summary: &Summary, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Ticker\tQty\tPrice\tValue")?;
    for row in &summary.rows {
        writeln!(
            file,
            "{}\t{}\t{}\t{}",
            row.ticker, row.quantity, row.price, row.value
        )?;
    }
    writeln!(file)?;
    writeln!(file, "Total\t\t\t{}", summary.total)?;
    Ok(())
}
