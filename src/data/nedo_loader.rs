use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::SHIFT_JIS;
use tracing::debug;

use crate::config::constants::{HOURS_PER_DAY, KEY_COLUMNS, TOTAL_COLUMNS};
use crate::models::channel::Channel;

/// One NEDO row: element code, date keys and the 24 hourly raw values.
/// The five trailing summary columns (max/min/sum/avg/day of year) are
/// required by the layout check but their values are recomputed downstream
/// rather than trusted.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub element_code: u32,
    pub month: u32,
    pub day: u32,
    pub year: u32,
    pub hours: [Option<f64>; HOURS_PER_DAY],
}

/// Rows split into the two channels the estimator consumes.
#[derive(Debug, Default)]
pub struct NedoData {
    pub solar: Vec<RawRecord>,
    pub temperature: Vec<RawRecord>,
}

#[derive(Debug)]
pub enum NedoLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    /// Row shape or a key column does not match the fixed NEDO layout.
    FormatError { line: usize, detail: String },
}

impl From<std::io::Error> for NedoLoadError {
    fn from(err: std::io::Error) -> Self {
        NedoLoadError::IoError(err)
    }
}

impl From<csv::Error> for NedoLoadError {
    fn from(err: csv::Error) -> Self {
        NedoLoadError::CsvError(err)
    }
}

impl std::fmt::Display for NedoLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NedoLoadError::IoError(e) => write!(f, "IO error: {}", e),
            NedoLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            NedoLoadError::FormatError { line, detail } => {
                write!(f, "Format error at line {}: {}", line, detail)
            }
        }
    }
}

impl std::error::Error for NedoLoadError {}

fn parse_key_column(field: &str, name: &str, line: usize) -> Result<u32, NedoLoadError> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| NedoLoadError::FormatError {
            line,
            detail: format!("non-numeric {} column: {:?}", name, field),
        })
}

/// Parses decoded NEDO CSV text. The single header line has already been
/// produced by the encoder stage; it is skipped here unconditionally.
/// Key columns must parse; a bad hourly cell degrades to a missing value
/// so sensor dropouts never abort the load.
pub fn parse_nedo_csv(text: &str) -> Result<NedoData, NedoLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut data = NedoData::default();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = index + 1;
        if line == 1 {
            continue; // header row
        }
        if record.len() == 1 && record[0].trim().is_empty() {
            continue; // trailing blank line
        }
        if record.len() != TOTAL_COLUMNS {
            return Err(NedoLoadError::FormatError {
                line,
                detail: format!("expected {} columns, found {}", TOTAL_COLUMNS, record.len()),
            });
        }

        let element_code = parse_key_column(&record[0], "element code", line)?;
        let month = parse_key_column(&record[1], "month", line)?;
        let day = parse_key_column(&record[2], "day", line)?;
        let year = parse_key_column(&record[3], "year", line)?;

        let channel = match Channel::from_element_code(element_code) {
            Some(c) => c,
            None => continue, // unused element code
        };

        let mut hours = [None; HOURS_PER_DAY];
        for h in 0..HOURS_PER_DAY {
            // Coerce-with-missing-on-failure: "--", blanks and garbage all
            // become None, never zero.
            hours[h] = record[KEY_COLUMNS + h].trim().parse::<f64>().ok();
        }

        let raw = RawRecord {
            element_code,
            month,
            day,
            year,
            hours,
        };
        match channel {
            Channel::Solar => data.solar.push(raw),
            Channel::Temperature => data.temperature.push(raw),
        }
    }

    debug!(
        solar_rows = data.solar.len(),
        temperature_rows = data.temperature.len(),
        "parsed NEDO records"
    );
    Ok(data)
}

/// Decodes NEDO bytes as Shift-JIS and parses them. The columns this system
/// consumes are ASCII digits, so lossy decoding of any mangled Japanese
/// header text never affects the numbers.
pub fn load_nedo_bytes(bytes: &[u8]) -> Result<NedoData, NedoLoadError> {
    let (text, _, _) = SHIFT_JIS.decode(bytes);
    parse_nedo_csv(&text)
}

pub fn load_nedo_csv<P: AsRef<Path>>(path: P) -> Result<NedoData, NedoLoadError> {
    let bytes = fs::read(path)?;
    load_nedo_bytes(&bytes)
}
