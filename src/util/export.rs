//! CSV export of the current scenario.
//!
//! Exports land in the user's Downloads folder, named with a UTC
//! timestamp so repeated exports never clobber each other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{CalculatorInputs, MarginSummary};
use crate::util::format::round2;

/// Written in place of a required MSRP when the target margin is
/// unreachable. The file must never contain NaN or infinities.
const NOT_APPLICABLE: &str = "N/A";

/// One exported scenario: the raw inputs followed by the derived results.
/// Fields are pre-formatted strings so numbers serialize in the same
/// shortest decimal form the page shows (6, not 6.0).
#[derive(Debug, Serialize)]
pub struct ExportRow {
    #[serde(rename = "COGS_per_unit")]
    cogs_per_unit: String,
    #[serde(rename = "Packaging_per_unit")]
    packaging_per_unit: String,
    #[serde(rename = "Ship_Fulfill_per_unit")]
    ship_fulfill_per_unit: String,
    #[serde(rename = "Overhead_per_unit")]
    overhead_per_unit: String,
    #[serde(rename = "Units_per_case")]
    units_per_case: String,
    #[serde(rename = "Retail_fee_pct")]
    retail_fee_pct: String,
    #[serde(rename = "Wholesale_fee_pct")]
    wholesale_fee_pct: String,
    #[serde(rename = "MSRP")]
    msrp: String,
    #[serde(rename = "Wholesale_price")]
    wholesale_price: String,
    #[serde(rename = "Unit_cost_before_fees")]
    unit_cost_before_fees: String,
    #[serde(rename = "Retail_margin_pct")]
    retail_margin_pct: String,
    #[serde(rename = "Wholesale_margin_pct")]
    wholesale_margin_pct: String,
    #[serde(rename = "Retail_unit_profit")]
    retail_unit_profit: String,
    #[serde(rename = "Wholesale_unit_profit")]
    wholesale_unit_profit: String,
    #[serde(rename = "Case_profit_retail")]
    case_profit_retail: String,
    #[serde(rename = "Case_profit_wholesale")]
    case_profit_wholesale: String,
    #[serde(rename = "MSRP_needed_for_target_margin_pct")]
    msrp_needed_for_target_margin_pct: String,
    #[serde(rename = "Target_margin_pct")]
    target_margin_pct: String,
}

impl ExportRow {
    /// Inputs serialize as typed, derived values rounded to two places.
    pub fn new(inputs: &CalculatorInputs, summary: &MarginSummary) -> Self {
        Self {
            cogs_per_unit: inputs.costs.cogs.to_string(),
            packaging_per_unit: inputs.costs.packaging.to_string(),
            ship_fulfill_per_unit: inputs.costs.ship_fulfill.to_string(),
            overhead_per_unit: inputs.costs.overhead.to_string(),
            units_per_case: inputs.costs.units_per_case.to_string(),
            retail_fee_pct: inputs.retail.fee_pct.to_string(),
            wholesale_fee_pct: inputs.wholesale.fee_pct.to_string(),
            msrp: inputs.retail.price.to_string(),
            wholesale_price: inputs.wholesale.price.to_string(),
            unit_cost_before_fees: fixed2(summary.unit_cost),
            retail_margin_pct: fixed2(summary.retail.margin_pct),
            wholesale_margin_pct: fixed2(summary.wholesale.margin_pct),
            retail_unit_profit: fixed2(summary.retail.unit_profit),
            wholesale_unit_profit: fixed2(summary.wholesale.unit_profit),
            case_profit_retail: fixed2(summary.retail.case_profit),
            case_profit_wholesale: fixed2(summary.wholesale.case_profit),
            msrp_needed_for_target_margin_pct: summary
                .required_msrp
                .map(fixed2)
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            target_margin_pct: inputs.target_margin_pct.to_string(),
        }
    }
}

fn fixed2(value: f64) -> String {
    round2(value).to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no writable export directory")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Writes the scenario to a timestamped CSV in the export directory and
/// returns the path of the written file.
pub fn write_export(
    inputs: &CalculatorInputs,
    summary: &MarginSummary,
) -> Result<PathBuf, ExportError> {
    let dir = export_dir().ok_or(ExportError::StorageUnavailable)?;
    write_export_in(&dir, inputs, summary)
}

/// Writes the timestamped CSV into `dir`, creating it if missing, and
/// returns the path of the written file.
fn write_export_in(
    dir: &Path,
    inputs: &CalculatorInputs,
    summary: &MarginSummary,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(OffsetDateTime::now_utc()));
    write_export_to(&path, inputs, summary)?;
    Ok(path)
}

/// Writes the two-line CSV (header plus one value row) to `path`.
pub fn write_export_to(
    path: &Path,
    inputs: &CalculatorInputs,
    summary: &MarginSummary,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.serialize(ExportRow::new(inputs, summary))?;
    writer.flush()?;
    println!("[export] wrote scenario to {}", path.display());
    Ok(())
}

fn export_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}

fn export_filename(now: OffsetDateTime) -> String {
    format!(
        "marginmint_export_{:04}{:02}{:02}-{:02}{:02}{:02}.csv",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluate_pricing;
    use time::{Date, Month};

    const EXPECTED_HEADER: &str = "COGS_per_unit,Packaging_per_unit,Ship_Fulfill_per_unit,\
Overhead_per_unit,Units_per_case,Retail_fee_pct,Wholesale_fee_pct,MSRP,Wholesale_price,\
Unit_cost_before_fees,Retail_margin_pct,Wholesale_margin_pct,Retail_unit_profit,\
Wholesale_unit_profit,Case_profit_retail,Case_profit_wholesale,\
MSRP_needed_for_target_margin_pct,Target_margin_pct";

    fn temp_csv(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("marginmint_test_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_export_writes_header_and_default_row() {
        let inputs = CalculatorInputs::default();
        let summary = evaluate_pricing(&inputs);
        let path = temp_csv("default.csv");

        write_export_to(&path, &inputs, &summary).expect("write");
        let contents = fs::read_to_string(&path).expect("read back");
        fs::remove_file(&path).ok();

        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(EXPECTED_HEADER));
        assert_eq!(
            lines.next(),
            Some("2.2,0.35,0.6,0.25,6,7,3,11.99,6,3.4,64.64,40.33,7.75,2.42,46.5,14.52,10.3,60")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_infeasible_target_writes_sentinel() {
        let mut inputs = CalculatorInputs::default();
        inputs.target_margin_pct = 80.0;
        inputs.retail.fee_pct = 25.0;
        let summary = evaluate_pricing(&inputs);
        let path = temp_csv("infeasible.csv");

        write_export_to(&path, &inputs, &summary).expect("write");
        let contents = fs::read_to_string(&path).expect("read back");
        fs::remove_file(&path).ok();

        let row = contents.lines().nth(1).expect("value row");
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 18);
        assert_eq!(fields[16], NOT_APPLICABLE);
        assert_eq!(fields[17], "80");
    }

    #[test]
    fn test_export_overflowed_required_msrp_writes_sentinel() {
        // A cost big enough to overflow the required-MSRP division must
        // fall back to the sentinel, never serialize an infinity.
        let mut inputs = CalculatorInputs::default();
        inputs.costs.cogs = 1e300;
        inputs.target_margin_pct = 30.0;
        inputs.retail.fee_pct = 70.0;
        let summary = evaluate_pricing(&inputs);

        let row = ExportRow::new(&inputs, &summary);
        assert_eq!(row.msrp_needed_for_target_margin_pct, NOT_APPLICABLE);
    }

    #[test]
    fn test_export_row_keeps_negative_profits() {
        // A loss-making wholesale price must export as a negative number.
        let mut inputs = CalculatorInputs::default();
        inputs.wholesale.price = 2.0;
        let summary = evaluate_pricing(&inputs);

        let row = ExportRow::new(&inputs, &summary);
        assert_eq!(row.wholesale_margin_pct, "0");
        assert_eq!(row.wholesale_unit_profit, "-1.46");
        assert_eq!(row.case_profit_wholesale, "-8.76");
    }

    #[test]
    fn test_export_creates_missing_directory_and_returns_path() {
        let inputs = CalculatorInputs::default();
        let summary = evaluate_pricing(&inputs);
        let root =
            std::env::temp_dir().join(format!("marginmint_test_{}_dirs", std::process::id()));
        let dir = root.join("exports");
        fs::remove_dir_all(&root).ok();
        assert!(!dir.exists());

        let path = write_export_in(&dir, &inputs, &summary).expect("write");
        assert!(path.starts_with(&dir));
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("file name");
        assert!(name.starts_with("marginmint_export_") && name.ends_with(".csv"));
        assert!(path.is_file());

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_export_filename_is_timestamped() {
        let date = Date::from_calendar_date(2026, Month::August, 23).expect("date");
        let now = date.with_hms(14, 5, 9).expect("time").assume_utc();
        assert_eq!(
            export_filename(now),
            "marginmint_export_20260823-140509.csv"
        );
    }
}
