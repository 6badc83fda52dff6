use anyhow::Result;
use fmp_api::{Outcome, Payload, Record};
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// Prints a single endpoint result. A failed call becomes the command's error;
/// the library has already logged it.
pub fn print_outcome(outcome: Outcome, format: &OutputFormat) -> Result<()> {
    match outcome {
        // Not rows, so there is nothing to tabulate.
        Outcome::Data(Payload::Other(value)) => {
            print_json(&value);
            Ok(())
        }
        Outcome::Data(payload) => print_records(payload.records(), format),
        Outcome::Empty => {
            eprintln!("No data returned.");
            Ok(())
        }
        Outcome::Failed(e) => Err(e.into()),
    }
}

/// Reports the result of a CSV download.
pub fn print_download(outcome: Outcome<u64>, dest: &std::path::Path) -> Result<()> {
    match outcome {
        Outcome::Data(bytes) => {
            println!("Saved {} bytes to {}", bytes, dest.display());
            Ok(())
        }
        Outcome::Empty => {
            eprintln!("No data returned.");
            Ok(())
        }
        Outcome::Failed(e) => Err(e.into()),
    }
}

pub fn print_records(records: &[Record], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(records, false)),
        OutputFormat::Markdown => println!("{}", render_table(records, true)),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => print!("{}", render_csv(records)?),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Column names in order of first appearance across all records.
pub fn columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Renders one cell: strings unquoted, null and missing as blank, nested
/// values as compact JSON.
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn rows(records: &[Record], columns: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| columns.iter().map(|c| cell(record.get(c))).collect())
        .collect()
}

pub fn render_table(records: &[Record], markdown: bool) -> String {
    let columns = columns(records);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in rows(records, &columns) {
        builder.push_record(row);
    }
    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn render_csv(records: &[Record]) -> Result<String> {
    let columns = columns(records);
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&columns)?;
    for row in rows(records, &columns) {
        wtr.write_record(&row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}
