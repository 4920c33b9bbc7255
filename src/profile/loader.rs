//! Load batches of profiles from CSV

use super::DelayCostInput;
use anyhow::{bail, Context, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the batch input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: i32,
    #[serde(rename = "Income")]
    income: f64,
    #[serde(rename = "Premium")]
    premium: f64,
    #[serde(rename = "DelayYears")]
    delay_years: f64,
    #[serde(rename = "IsFamily")]
    is_family: String,
    #[serde(rename = "NumChildren", default)]
    num_children: Option<u32>,
    #[serde(rename = "IsImmigrant")]
    is_immigrant: String,
    #[serde(rename = "MedicareAge", default)]
    medicare_age: Option<i32>,
}

impl CsvRow {
    fn to_input(self) -> Result<DelayCostInput> {
        let is_family = parse_flag("IsFamily", &self.is_family)?;
        let is_immigrant = parse_flag("IsImmigrant", &self.is_immigrant)?;

        Ok(DelayCostInput {
            age: self.age,
            income: self.income,
            premium: self.premium,
            delay_years: self.delay_years,
            is_family,
            is_immigrant,
            medicare_age: self.medicare_age,
            num_children: self.num_children.unwrap_or(0),
        })
    }
}

/// Boolean column: true/false, Y/N or Yes/No, any case
fn parse_flag(column: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "y" | "yes" => Ok(true),
        "false" | "n" | "no" => Ok(false),
        _ => bail!("Unknown {} flag: {}", column, raw.trim()),
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<DelayCostInput>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("opening profile file {}", path.display()))?;
    collect_rows(reader)
}

/// Load profiles from any reader (e.g., string buffer, stdin)
pub fn load_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<DelayCostInput>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<DelayCostInput>> {
    let mut inputs = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result.with_context(|| format!("parsing profile row {}", i + 1))?;
        let input = row
            .to_input()
            .with_context(|| format!("profile row {}", i + 1))?;
        inputs.push(input);
    }

    Ok(inputs)
}
