//! CSV reader for effort records
//!
//! Expects a header row of `subsystem,module,task,effort,description`.
//! Effort is parsed here rather than left to serde so a malformed number
//! reports the offending row instead of a generic CSV error.

use std::path::Path;

use serde::Deserialize;

use crate::ingest::{EffortRecord, IngestError};

#[derive(Debug, Deserialize)]
struct RawRecord {
    subsystem: String,
    module: String,
    task: String,
    effort: String,
    #[serde(default)]
    description: String,
}

/// Read effort records from a CSV file
pub fn read_records(path: &Path) -> Result<Vec<EffortRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 2;
        let raw = result?;

        let effort = raw.effort.parse::<f64>().map_err(|_| IngestError::InvalidRecord {
            row,
            message: format!("effort '{}' is not a number", raw.effort),
        })?;
        if !effort.is_finite() || effort < 0.0 {
            return Err(IngestError::InvalidRecord {
                row,
                message: format!("effort must be a non-negative number, got {effort}"),
            });
        }

        records.push(EffortRecord {
            subsystem: raw.subsystem,
            module: raw.module,
            task: raw.task,
            effort,
            description: raw.description,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_well_formed_csv() {
        let file = write_csv(
            "subsystem,module,task,effort,description\n\
             Flight,Nav,Kalman,10.5,Sensor fusion\n\
             Flight,Telemetry,Downlink,3,\"Framing, CRC\"\n",
        );

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].effort, 10.5);
        assert_eq!(records[1].description, "Framing, CRC");
    }

    #[test]
    fn test_malformed_effort_reports_row() {
        let file = write_csv(
            "subsystem,module,task,effort,description\n\
             Flight,Nav,Kalman,10.5,ok\n\
             Flight,Nav,Star tracker,lots,oops\n",
        );

        let err = read_records(file.path()).unwrap_err();
        match err {
            IngestError::InvalidRecord { row, message } => {
                assert_eq!(row, 3);
                assert!(message.contains("lots"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_effort_rejected() {
        let file = write_csv(
            "subsystem,module,task,effort,description\n\
             Flight,Nav,Kalman,-2,\n",
        );

        let err = read_records(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn test_missing_effort_column_is_a_csv_error() {
        let file = write_csv("subsystem,module,task\nFlight,Nav,Kalman\n");

        let err = read_records(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }
}
