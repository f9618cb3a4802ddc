use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use crate::models::{LaunchRecord, Outcome};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Column positions resolved from the header row.
struct ColumnIndex {
    site: usize,
    payload: usize,
    class: usize,
    booster: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            site: find(LAUNCH_SITE_COLUMN)?,
            payload: find(PAYLOAD_MASS_COLUMN)?,
            class: find(CLASS_COLUMN)?,
            booster: find(BOOSTER_CATEGORY_COLUMN)?,
        })
    }
}

/// Load launch records from a CSV file.
///
/// Columns are matched by header name; extra columns such as the flight
/// number or the full booster version are ignored.
pub fn load_launch_records(path: &Path) -> DatasetResult<Vec<LaunchRecord>> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_launch_records(file)?;
    log::info!(
        "Loaded {} launch records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse launch records from any CSV source.
pub fn parse_launch_records<R: Read>(source: R) -> DatasetResult<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers().map_err(DatasetError::csv)?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(DatasetError::csv)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_row(&row, &columns, line)?);
    }

    Ok(records)
}

fn cell(row: &csv::StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnIndex,
    line: u64,
) -> DatasetResult<LaunchRecord> {
    let payload_raw = cell(row, columns.payload);
    let payload_mass_kg = payload_raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DatasetError::InvalidPayload {
            line,
            value: payload_raw.to_string(),
        })?;

    let class_raw = cell(row, columns.class);
    let outcome = parse_class(class_raw).ok_or_else(|| DatasetError::InvalidClass {
        line,
        value: class_raw.to_string(),
    })?;

    Ok(LaunchRecord {
        launch_site: cell(row, columns.site).to_string(),
        payload_mass_kg,
        outcome,
        booster_version_category: cell(row, columns.booster).to_string(),
    })
}

// Accepts "1" as well as "1.0", which spreadsheet exports tend to produce.
fn parse_class(raw: &str) -> Option<Outcome> {
    if let Ok(class) = raw.parse::<i64>() {
        return Outcome::from_class(class);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.fract() != 0.0 {
        return None;
    }
    Outcome::from_class(value as i64)
}
