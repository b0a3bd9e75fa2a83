use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use crate::{error::LoadError, numeric::parse_integer};

/// One forecast day. Temperatures are in Fahrenheit, as found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    date: String,
    low: i32,
    high: i32,
}

impl WeatherRecord {
    pub fn new(date: impl Into<String>, low: i32, high: i32) -> Self {
        Self {
            date: date.into(),
            low,
            high,
        }
    }

    /// ISO-8601 date, not validated until it gets formatted.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }
}

/// Records in file order. The order matters: it breaks ties between equal
/// extremes and drives the per-day report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<WeatherRecord>,
}

impl Dataset {
    /// Parse `date,min,max` rows. The first line is always dropped as a
    /// header, whatever it holds, blank lines are skipped and extra columns
    /// are ignored. Input without even a header line is an error.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, LoadError> {
        let mut reader = BufReader::new(reader);
        let mut header = String::new();
        if reader.read_line(&mut header).map_err(LoadError::Read)? == 0 {
            return Err(LoadError::MissingHeader);
        }
        trace!("dropping header {:?}", header.trim_end());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            // Positions count from the line after the header.
            let line = row.position().map_or(0, |pos| pos.line()) + 1;
            if row.is_empty() {
                trace!("skipping empty line {line}");
                continue;
            }

            let date = row.get(0).ok_or(LoadError::MissingColumn {
                line,
                column: "date",
            })?;
            let low = temperature(&row, line, 1, "min")?;
            let high = temperature(&row, line, 2, "max")?;
            records.push(WeatherRecord::new(date, low, high));
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WeatherRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn dates(&self) -> Vec<&str> {
        self.records.iter().map(WeatherRecord::date).collect()
    }

    pub fn lows(&self) -> Vec<i32> {
        self.records.iter().map(WeatherRecord::low).collect()
    }

    pub fn highs(&self) -> Vec<i32> {
        self.records.iter().map(WeatherRecord::high).collect()
    }
}

impl From<Vec<WeatherRecord>> for Dataset {
    fn from(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<WeatherRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = WeatherRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn temperature(
    row: &csv::StringRecord,
    line: u64,
    index: usize,
    column: &'static str,
) -> Result<i32, LoadError> {
    let field = row
        .get(index)
        .ok_or(LoadError::MissingColumn { line, column })?;
    parse_integer(field).map_err(|source| LoadError::Temperature {
        line,
        column,
        source,
    })
}

/// Load a forecast file. The file is closed before this returns, whatever
/// the outcome.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = Dataset::from_reader(file)?;
    debug!("loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}
