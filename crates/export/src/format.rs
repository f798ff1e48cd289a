use core::str::FromStr;

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use phonehub_recommend::ScoredItem;

use crate::record::ExportRecord;

const FILE_STEM: &str = "phone_recommendations";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoded document is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unknown export format '{0}' (expected csv or json)")]
    UnknownFormat(String),
}

/// Document format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// A rendered export, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime: &'static str,
    pub body: String,
}

/// Download name for an export made at `at`, e.g. `phone_recommendations_20240101_093000.csv`.
pub fn file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "{FILE_STEM}_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Render the ranked list in `format`.
pub fn export(
    ranked: &[ScoredItem],
    format: ExportFormat,
    at: DateTime<Utc>,
) -> Result<ExportedFile, ExportError> {
    let records: Vec<ExportRecord> = ranked.iter().map(ExportRecord::from).collect();

    let body = match format {
        ExportFormat::Csv => to_csv(&records)?,
        ExportFormat::Json => serde_json::to_string_pretty(&records)?,
    };

    tracing::debug!(format = format.extension(), rows = records.len(), "export rendered");

    Ok(ExportedFile {
        file_name: file_name(format, at),
        mime: format.mime(),
        body,
    })
}

fn to_csv(records: &[ExportRecord]) -> Result<String, ExportError> {
    // Header written by hand so an empty export still carries the columns.
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(ExportRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use phonehub_catalog::Catalog;
    use phonehub_recommend::{recommend, PrimaryUse, Query};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn ranked() -> Vec<ScoredItem> {
        let catalog = Catalog::builtin().unwrap();
        recommend(&catalog, &Query::new(600, PrimaryUse::BatteryLife))
    }

    #[test]
    fn file_names_carry_timestamp_and_extension() {
        assert_eq!(
            file_name(ExportFormat::Csv, at()),
            "phone_recommendations_20240309_140507.csv"
        );
        assert_eq!(
            file_name(ExportFormat::Json, at()),
            "phone_recommendations_20240309_140507.json"
        );
    }

    #[test]
    fn csv_has_fixed_columns_in_rank_order() {
        let ranked = ranked();
        let file = export(&ranked, ExportFormat::Csv, at()).unwrap();
        assert_eq!(file.mime, "text/csv");

        let lines: Vec<&str> = file.body.lines().collect();
        assert_eq!(lines[0], "name,price,camera,battery,performance,display,brand,storage,ram");
        assert_eq!(lines.len(), ranked.len() + 1);
        // Battery life: Motorola 85.1, Nothing 84.9, A54 82.1.
        assert_eq!(lines[1], "Motorola Edge 50 Pro,549,83,89,80,87,Motorola,256GB,12GB");
        assert_eq!(lines[2], "Nothing Phone 2,599,82,86,85,88,Nothing,256GB,8GB");
        assert_eq!(lines[3], "Samsung Galaxy A54,449,78,88,75,85,Samsung,128GB,8GB");
    }

    #[test]
    fn csv_quotes_names_with_commas_and_quotes() {
        let mut scored = ranked();
        scored.truncate(1);
        scored[0].item.name = "Phone, \"Max\"".to_string();
        let file = export(&scored, ExportFormat::Csv, at()).unwrap();
        assert!(file.body.lines().nth(1).unwrap().starts_with("\"Phone, \"\"Max\"\"\",549,"));
    }

    #[test]
    fn empty_csv_still_has_header() {
        let file = export(&[], ExportFormat::Csv, at()).unwrap();
        assert_eq!(file.body.trim_end(), ExportRecord::COLUMNS.join(","));
    }

    #[test]
    fn json_is_an_array_of_records() {
        let ranked = ranked();
        let file = export(&ranked, ExportFormat::Json, at()).unwrap();
        assert_eq!(file.mime, "application/json");

        let value: serde_json::Value = serde_json::from_str(&file.body).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), ranked.len());
        assert_eq!(rows[0]["name"], "Motorola Edge 50 Pro");
        assert_eq!(rows[0]["price"], 549);
        assert!(rows[0].get("score").is_none());
        assert!(rows[0].get("features").is_none());
        assert!(file.body.contains("\n  {"));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!("xml".parse::<ExportFormat>(), Err(ExportError::UnknownFormat(_))));
    }
}
