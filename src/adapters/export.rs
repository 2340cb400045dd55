use crate::domain::model::ReadingHistory;
use crate::utils::error::{ReadingError, Result};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ReadingError::InvalidConfigValueError {
                field: "export.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, json".to_string(),
            }),
        }
    }
}

/// CSV 一列；兩種紀錄共用欄位
#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    kind: &'a str,
    id: String,
    created_at: String,
    subject: String,
    score: Option<i32>,
    content: &'a str,
}

fn rows(history: &ReadingHistory) -> Vec<HistoryRow<'_>> {
    let horoscopes = history.horoscopes.iter().map(|r| HistoryRow {
        kind: "horoscope",
        id: r.id.to_string(),
        created_at: r.created_at.to_rfc3339(),
        subject: r.reading_type.clone(),
        score: None,
        content: &r.content,
    });
    let compatibilities = history.compatibilities.iter().map(|r| HistoryRow {
        kind: "compatibility",
        id: r.id.to_string(),
        created_at: r.created_at.to_rfc3339(),
        subject: format!(
            "{} ({}) & {} ({})",
            r.person1_name, r.person1_birthdate, r.person2_name, r.person2_birthdate
        ),
        score: r.compatibility_score,
        content: &r.reading_content,
    });
    horoscopes.chain(compatibilities).collect()
}

pub fn export_history<W: Write>(history: &ReadingHistory, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, history)?;
        }
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows(history) {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
    }
    tracing::debug!(
        "Exported {} horoscope and {} compatibility readings as {:?}",
        history.horoscopes.len(),
        history.compatibilities.len(),
        format
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CompatibilityRecord, HoroscopeRecord};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_history() -> ReadingHistory {
        ReadingHistory {
            horoscopes: vec![HoroscopeRecord {
                id: Uuid::new_v4(),
                user_id: "u1".into(),
                reading_type: "horoscope".into(),
                content: "{\"zodiacSign\":\"Leo\"}".into(),
                created_at: Utc::now(),
            }],
            compatibilities: vec![CompatibilityRecord {
                id: Uuid::new_v4(),
                user_id: "u1".into(),
                person1_name: "Ann".into(),
                person1_birthdate: "1990-03-21".into(),
                person2_name: "Bob".into(),
                person2_birthdate: "1991-10-01".into(),
                compatibility_score: Some(91),
                reading_content: "text, with comma".into(),
                created_at: Utc::now(),
            }],
        }
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let mut buffer = Vec::new();
        export_history(&sample_history(), ExportFormat::Csv, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "kind,id,created_at,subject,score,content");
        assert!(text.contains("Ann (1990-03-21) & Bob (1991-10-01)"));
        assert!(text.contains(",91,"));
        assert!(text.contains("\"text, with comma\""));
    }

    #[test]
    fn test_json_export_round_trips() {
        let history = sample_history();
        let mut buffer = Vec::new();
        export_history(&history, ExportFormat::Json, &mut buffer).unwrap();
        let parsed: ReadingHistory = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
