//! CSV row ingestion for both input shapes.
//!
//! Mode `pv` rows carry `Policy,Outcome,Prob,PV_TNB`; mode `stream` rows
//! carry `Policy,Outcome,Prob,B0..B{n-1}` with the period count fixed per
//! run. Rows group by policy in first-appearance order.

use crate::Result;
use crate::dataset::{BenefitStream, Dataset, Outcome, OutcomeValue};
use crate::misc::{EngineError, InputMode};
use std::io::Read;

const LOG_TARGET: &str = "greenlight::dataset";

const POLICY_COLUMN: &str = "Policy";
const OUTCOME_COLUMN: &str = "Outcome";
const PROB_COLUMN: &str = "Prob";
const PV_COLUMN: &str = "PV_TNB";

/// Read a working dataset from CSV.
///
/// Fails on the first malformed row, naming policy/outcome/field. In stream
/// mode a blank or absent period cell reads as 0, but a row with no period
/// values at all is an error.
pub fn read_dataset<R: Read>(reader: R, mode: InputMode, periods: usize) -> Result<Dataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers().map_err(|e| EngineError::Malformed(e.to_string()))?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let policy_idx = column(POLICY_COLUMN).ok_or_else(|| missing("header row", POLICY_COLUMN))?;
    let outcome_idx = column(OUTCOME_COLUMN).ok_or_else(|| missing("header row", OUTCOME_COLUMN))?;
    let prob_idx = column(PROB_COLUMN).ok_or_else(|| missing("header row", PROB_COLUMN))?;

    let pv_idx = match mode {
        InputMode::Pv => Some(column(PV_COLUMN).ok_or_else(|| missing("header row", PV_COLUMN))?),
        InputMode::Stream => None,
    };

    // Individual period columns may be absent (those periods read as 0),
    // but stream mode with no period columns at all can't mean anything.
    let period_idxs: Vec<Option<usize>> = (0..periods).map(|t| column(&format!("B{t}"))).collect();
    if mode == InputMode::Stream && period_idxs.iter().all(Option::is_none) {
        return Err(missing("header row", &stream_field_name(periods)));
    }

    let mut dataset = Dataset::default();
    let mut row_count = 0_usize;
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| EngineError::Malformed(e.to_string()))?;
        row_count += 1;

        let row_location = format!("row {}", row + 1);
        let policy_id = non_blank(record.get(policy_idx))
            .ok_or_else(|| missing(&row_location, POLICY_COLUMN))?
            .to_owned();
        let label = non_blank(record.get(outcome_idx))
            .ok_or_else(|| missing(&row_location, OUTCOME_COLUMN))?
            .to_owned();

        let location = format!("policy '{policy_id}', outcome '{label}'");
        let probability = parse_number(record.get(prob_idx)).ok_or_else(|| missing(&location, PROB_COLUMN))?;

        let value = match pv_idx {
            Some(idx) => {
                OutcomeValue::PresentValue(parse_number(record.get(idx)).ok_or_else(|| missing(&location, PV_COLUMN))?)
            }
            None => OutcomeValue::Stream(read_stream(&record, &period_idxs, &location)?),
        };

        dataset.push_outcome(&policy_id, Outcome { label, probability, value });
    }

    log::debug!(target: LOG_TARGET, "Read {} policies from {row_count} input rows", dataset.policies.len());
    Ok(dataset)
}

fn read_stream(record: &csv::StringRecord, period_idxs: &[Option<usize>], location: &str) -> Result<BenefitStream> {
    let mut benefits = Vec::with_capacity(period_idxs.len());
    let mut supplied = false;

    for (t, idx) in period_idxs.iter().enumerate() {
        let cell = idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or_default();
        if cell.is_empty() {
            // Missing period reads as 0.
            benefits.push(0.0);
        } else if let Some(value) = parse_number(Some(cell)) {
            benefits.push(value);
            supplied = true;
        } else {
            return Err(missing(location, &format!("B{t}")));
        }
    }

    if !supplied {
        return Err(missing(location, &stream_field_name(period_idxs.len())));
    }

    Ok(BenefitStream::new(benefits))
}

fn missing(location: &str, field: &str) -> EngineError {
    EngineError::MissingField {
        location: location.to_owned(),
        field: field.to_owned(),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    non_blank(raw)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn stream_field_name(periods: usize) -> String {
    format!("B0..B{}", periods.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pv_mode_reads_rows_and_groups_policies() {
        let text = "Policy,Outcome,Prob,PV_TNB\nA,E,0.5,100\nB,E,1.0,-50\nA,F,0.5,200\n";
        let dataset = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap();

        assert_eq!(dataset.policies.len(), 2);
        assert_eq!(dataset.policies[0].id, "A");
        assert_eq!(dataset.policies[0].outcomes.len(), 2);
        assert_eq!(dataset.policies[0].outcomes[1].label, "F");
        assert_eq!(dataset.policies[1].outcomes[0].value, OutcomeValue::PresentValue(-50.0));
    }

    #[test]
    fn test_pv_mode_rejects_non_numeric_value() {
        let text = "Policy,Outcome,Prob,PV_TNB\nA,E,0.5,abc\n";
        let err = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap_err();
        assert_eq!(err.to_string(), "policy 'A', outcome 'E': missing or non-numeric field 'PV_TNB'");
    }

    #[test]
    fn test_blank_probability_rejected() {
        let text = "Policy,Outcome,Prob,PV_TNB\nA,E,,100\n";
        let err = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap_err();
        assert_eq!(err.to_string(), "policy 'A', outcome 'E': missing or non-numeric field 'Prob'");
    }

    #[test]
    fn test_blank_policy_names_the_row() {
        let text = "Policy,Outcome,Prob,PV_TNB\nA,E,1.0,100\n,E,1.0,100\n";
        let err = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap_err();
        assert_eq!(err.to_string(), "row 2: missing or non-numeric field 'Policy'");
    }

    #[test]
    fn test_missing_required_header_rejected() {
        let text = "Policy,Outcome,Prob\nA,E,1.0\n";
        let err = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap_err();
        assert_eq!(err.to_string(), "header row: missing or non-numeric field 'PV_TNB'");
    }

    #[test]
    fn test_stream_mode_reads_periods() {
        let text = "Policy,Outcome,Prob,B0,B1,B2,B3\nA,E,1.0,100,100,100,100\n";
        let dataset = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap();
        let expected = OutcomeValue::Stream(BenefitStream::new(vec![100.0, 100.0, 100.0, 100.0]));
        assert_eq!(dataset.policies[0].outcomes[0].value, expected);
    }

    #[test]
    fn test_stream_mode_blank_period_reads_as_zero() {
        let text = "Policy,Outcome,Prob,B0,B1,B2,B3\nA,E,1.0,100,,100,\n";
        let dataset = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap();
        let expected = OutcomeValue::Stream(BenefitStream::new(vec![100.0, 0.0, 100.0, 0.0]));
        assert_eq!(dataset.policies[0].outcomes[0].value, expected);
    }

    #[test]
    fn test_stream_mode_absent_column_reads_as_zero() {
        let text = "Policy,Outcome,Prob,B0,B1\nA,E,1.0,100,50\n";
        let dataset = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap();
        let expected = OutcomeValue::Stream(BenefitStream::new(vec![100.0, 50.0, 0.0, 0.0]));
        assert_eq!(dataset.policies[0].outcomes[0].value, expected);
    }

    #[test]
    fn test_stream_mode_all_periods_blank_rejected() {
        let text = "Policy,Outcome,Prob,B0,B1,B2,B3\nA,E,1.0,,,,\n";
        let err = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap_err();
        assert_eq!(err.to_string(), "policy 'A', outcome 'E': missing or non-numeric field 'B0..B3'");
    }

    #[test]
    fn test_stream_mode_non_numeric_period_names_the_cell() {
        let text = "Policy,Outcome,Prob,B0,B1,B2,B3\nA,E,1.0,100,oops,100,100\n";
        let err = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap_err();
        assert_eq!(err.to_string(), "policy 'A', outcome 'E': missing or non-numeric field 'B1'");
    }

    #[test]
    fn test_stream_mode_without_any_period_columns_rejected() {
        let text = "Policy,Outcome,Prob\nA,E,1.0\n";
        let err = read_dataset(text.as_bytes(), InputMode::Stream, 4).unwrap_err();
        assert_eq!(err.to_string(), "header row: missing or non-numeric field 'B0..B3'");
    }

    #[test]
    fn test_empty_file_yields_empty_dataset() {
        let text = "Policy,Outcome,Prob,PV_TNB\n";
        let dataset = read_dataset(text.as_bytes(), InputMode::Pv, 4).unwrap();
        assert!(dataset.is_empty());
    }
}
