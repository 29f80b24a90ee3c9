use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::answers::{AnswerRecord, AnswerValue};

const MULTI_SELECT_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("answers are not a JSON object of question ids to values: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse answer CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read one answer record from a JSON object.
pub fn read_json_record<R: Read>(reader: R) -> Result<AnswerRecord, AnswerImportError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read one answer record per CSV row; headers are question ids.
///
/// Blank cells are skipped and `;` separates multi-select items.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let record: AnswerRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(question, cell)| (question.to_string(), cell_value(cell)))
            .collect();
        records.push(record);
    }

    Ok(records)
}

pub fn load_json_path(path: impl AsRef<Path>) -> Result<AnswerRecord, AnswerImportError> {
    let file = File::open(path)?;
    read_json_record(BufReader::new(file))
}

pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Vec<AnswerRecord>, AnswerImportError> {
    let file = File::open(path)?;
    read_csv_records(BufReader::new(file))
}

fn cell_value(cell: &str) -> AnswerValue {
    if cell.contains(MULTI_SELECT_SEPARATOR) {
        AnswerValue::Selections(
            cell.split(MULTI_SELECT_SEPARATOR)
                .map(|item| item.trim().to_string())
                .collect(),
        )
    } else {
        AnswerValue::Choice(cell.to_string())
    }
}
