use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::catalog::store::FoodCatalog;
use crate::error::Result;
use crate::models::{FoodRecord, RawFoodRecord};

/// Load a catalog file, choosing the format by extension.
///
/// `.json` files hold an array of objects; anything else is read as CSV with
/// a header row. Every row is validated; the first bad value aborts the load.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        let content = fs::read_to_string(path)?;
        FoodCatalog::from_json_str(&content)?
    } else {
        FoodCatalog::from_csv_reader(fs::File::open(path)?)?
    };

    info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

impl FoodCatalog {
    /// Parse CSV with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in rdr.deserialize::<RawFoodRecord>() {
            records.push(row?.into_record()?);
        }

        Ok(Self::from_records(records))
    }

    /// Parse a JSON array of row objects.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let rows: Vec<RawFoodRecord> = serde_json::from_str(content)?;
        let records = rows
            .into_iter()
            .map(RawFoodRecord::into_record)
            .collect::<Result<Vec<FoodRecord>>>()?;

        Ok(Self::from_records(records))
    }
}
