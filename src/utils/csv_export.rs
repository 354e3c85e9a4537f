use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::core::pipeline::PvEstimate;

fn cell(value: Option<f64>) -> String {
    // Missing values export as empty cells so spreadsheets keep them
    // distinct from zero.
    match value {
        Some(v) => format!("{:.6}", v),
        None => String::new(),
    }
}

/// Writes the monthly comparison and the corrected hourly table as
/// timestamped CSV files under the given directory.
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        std::fs::create_dir_all(output_dir.as_ref())?;
        Ok(Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            timestamp,
        })
    }

    pub fn export(&self, estimate: &PvEstimate) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.export_monthly_comparison(estimate)?;
        self.export_corrected_hourly(estimate)?;
        Ok(())
    }

    fn export_monthly_comparison(
        &self,
        estimate: &PvEstimate,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let path = self
            .output_dir
            .join(format!("monthly_comparison_{}.csv", self.timestamp));
        let mut file = File::create(&path)?;
        writeln!(
            file,
            "month,reference_kwh,model_integral_kwh,mean_temperature_c,correction_factor"
        )?;
        for summary in estimate.monthly_summaries() {
            writeln!(
                file,
                "{},{},{},{},{}",
                summary.month,
                cell(summary.reference_total),
                cell(summary.model_integral),
                cell(summary.mean_temperature),
                cell(summary.correction)
            )?;
        }
        info!(path = %path.display(), "exported monthly comparison");
        Ok(())
    }

    fn export_corrected_hourly(
        &self,
        estimate: &PvEstimate,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let path = self
            .output_dir
            .join(format!("corrected_hourly_{}.csv", self.timestamp));
        let mut file = File::create(&path)?;
        let hour_headers: Vec<String> = (1..=24).map(|h| format!("h{:02}", h)).collect();
        writeln!(file, "month,day,{}", hour_headers.join(","))?;
        for ((month, day), hours) in estimate.corrected_days() {
            let cells: Vec<String> = hours.iter().map(|v| cell(*v)).collect();
            writeln!(file, "{},{},{}", month, day, cells.join(","))?;
        }
        info!(path = %path.display(), "exported corrected hourly table");
        Ok(())
    }
}
