//! Batch evaluation rows and CSV output
//!
//! A profile that cannot be evaluated becomes a row carrying the error, so a
//! bad record never aborts the rest of the batch.

use crate::advice::Recommendation;
use crate::profile::DelayCostInput;
use crate::projection::DelayCostResult;
use crate::scenario::ScenarioRunner;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One output line per input profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchRow {
    /// 1-based position in the input file
    pub row: usize,
    pub net_cost: Option<f64>,
    pub loading_cost: Option<f64>,
    pub mls_cost: Option<f64>,
    pub saved_premium: Option<f64>,
    pub current_loading: Option<f64>,
    pub mls_rate: Option<f64>,
    pub recommendation: Option<&'static str>,
    pub error: Option<String>,
}

impl BatchRow {
    pub fn evaluated(row: usize, result: &DelayCostResult, consider_ceiling: f64) -> Self {
        Self {
            row,
            net_cost: Some(result.net_cost),
            loading_cost: Some(result.loading_cost),
            mls_cost: Some(result.mls_cost),
            saved_premium: Some(result.saved_premium),
            current_loading: Some(result.current_loading),
            mls_rate: Some(result.mls_rate),
            recommendation: Some(
                Recommendation::classify(result.net_cost, consider_ceiling).as_str(),
            ),
            error: None,
        }
    }

    pub fn failed(row: usize, error: String) -> Self {
        Self {
            row,
            net_cost: None,
            loading_cost: None,
            mls_cost: None,
            saved_premium: None,
            current_loading: None,
            mls_rate: None,
            recommendation: None,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Evaluate every profile in parallel, keeping input order
pub fn evaluate_rows(runner: &ScenarioRunner, inputs: &[DelayCostInput]) -> Vec<BatchRow> {
    let consider_ceiling = runner.config().consider_ceiling;

    runner
        .run_batch(inputs)
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| match outcome {
            Ok(result) => BatchRow::evaluated(i + 1, &result, consider_ceiling),
            Err(err) => BatchRow::failed(i + 1, err.to_string()),
        })
        .collect()
}

/// Write rows as CSV with a header line
pub fn write_rows<W: Write>(rows: &[BatchRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing result row {}", row.row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file
pub fn write_rows_to_path<P: AsRef<Path>>(rows: &[BatchRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    write_rows(rows, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::load_profiles_from_reader;

    const MIXED: &str = "\
Age,Income,Premium,DelayYears,IsFamily,NumChildren,IsImmigrant,MedicareAge
45,180000,2000,5,false,0,false,
45,90000,2000,2,false,0,true,
28,120000,2000,2,false,0,false,
";

    #[test]
    fn test_failed_row_does_not_abort_batch() {
        let inputs = load_profiles_from_reader(MIXED.as_bytes()).expect("Failed to load profiles");
        let rows = evaluate_rows(&ScenarioRunner::new(), &inputs);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].net_cost, Some(2500.0));
        assert_eq!(rows[0].recommendation, Some("consider"));

        assert!(rows[1].is_failed());
        assert_eq!(rows[1].net_cost, None);
        assert_eq!(rows[1].recommendation, None);

        assert_eq!(rows[2].net_cost, Some(-200.0));
        assert_eq!(rows[2].recommendation, Some("can-wait"));
    }

    #[test]
    fn test_write_rows_columns() {
        let inputs = load_profiles_from_reader(MIXED.as_bytes()).expect("Failed to load profiles");
        let rows = evaluate_rows(&ScenarioRunner::new(), &inputs);

        let mut buf = Vec::new();
        write_rows(&rows, &mut buf).expect("Failed to write rows");

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                "Row",
                "NetCost",
                "LoadingCost",
                "MlsCost",
                "SavedPremium",
                "CurrentLoading",
                "MlsRate",
                "Recommendation",
                "Error"
            ]
        );
        let rec_col = headers.iter().position(|h| h == "Recommendation").unwrap();
        let err_col = headers.iter().position(|h| h == "Error").unwrap();

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);

        assert_eq!(&records[0][rec_col], "consider");
        assert_eq!(&records[0][err_col], "");

        assert_eq!(&records[1][0], "2");
        assert_eq!(&records[1][rec_col], "");
        assert_eq!(
            &records[1][err_col],
            "invalid input: medicare_age is required for immigrants"
        );

        assert_eq!(&records[2][rec_col], "can-wait");
        assert_eq!(&records[2][err_col], "");
    }
}
