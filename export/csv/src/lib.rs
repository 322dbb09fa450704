use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::NaiveDate;
use mc_sync::{row::RegistrationRow, SnapshotHandle};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const CSV_HEADER: &str =
    "ID,Timestamp,Student Name,Qualification,Year of Passing,Working Status,Course,Mobile,Email";

pub fn to_csv(rows: &[RegistrationRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for row in rows {
        lines.push(
            [
                row.id(),
                row.timestamp(),
                row.student_name(),
                row.qualification(),
                row.year_of_passing(),
                row.working(),
                row.course(),
                row.mobile(),
                row.email(),
            ]
            .map(quote)
            .join(","),
        );
    }
    lines.join("\n")
}

pub fn file_name(date: &NaiveDate) -> String {
    format!("registrations_export_{}.csv", date.format("%Y-%m-%d"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub struct CsvExporter {
    snapshot: SnapshotHandle,
    directory: PathBuf,
    every: Duration,
}

impl CsvExporter {
    pub fn new(snapshot: SnapshotHandle, directory: &str, every: &Duration) -> Self {
        mc_log::info(Some("⚡"), "[CsvExporter] Initializing component");

        Self {
            snapshot,
            directory: Path::new(directory).to_path_buf(),
            every: *every,
        }
    }

    pub fn run_none() -> JoinHandle<()> {
        mc_log::info(Some("⏩"), "[CsvExporter] Skipping component");

        tokio::spawn((|| async {})())
    }

    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        mc_log::info(Some("💫"), "[CsvExporter] Running component");

        tokio::spawn((|| async move {
            let mut interval = tokio::time::interval(self.every);
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        break;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        break;
                    }
                    _ = interval.tick() => {
                        self.write_snapshot().await;
                    }
                }
            }

            mc_log::info(None, "[CsvExporter] Shutting down component");
        })())
    }

    async fn write_snapshot(&self) {
        let rows = self.snapshot.rows();
        let path = self
            .directory
            .join(file_name(&chrono::Utc::now().date_naive()));
        match tokio::fs::write(&path, to_csv(&rows)).await {
            Ok(_) => mc_log::debug(
                None,
                format!(
                    "[CsvExporter] Wrote {} registrations to {}",
                    rows.len(),
                    path.display()
                ),
            ),
            Err(err) => mc_log::error(
                None,
                format!(
                    "[CsvExporter] Failed to write export to {}: {err}",
                    path.display()
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use mc_backend_docstore::model::RegistrationResJson;
    use mc_sync::row::RegistrationRow;

    use super::*;

    fn row(id: &str, student_name: &str, qualification: &str) -> RegistrationRow {
        RegistrationRow::from_document(&RegistrationResJson::new(
            &Some(id.to_owned()),
            student_name,
            qualification,
            "2024",
            "yes",
            "AI User Training",
            "9876543210",
            "student@example.com",
            &Some("2025-03-01T08:30:00Z".to_owned()),
        ))
    }

    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut records = Vec::new();
        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();
        while let Some(char) = chars.next() {
            match char {
                '"' if in_quotes => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '"' => in_quotes = true,
                ',' if !in_quotes => {
                    record.push(std::mem::take(&mut field));
                }
                '\n' if !in_quotes => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(char),
            }
        }
        if !field.is_empty() || !record.is_empty() {
            record.push(field);
            records.push(record);
        }
        records
    }

    #[test]
    fn export_starts_with_the_expected_header() {
        let text = to_csv(&[]);
        assert_eq!(text, CSV_HEADER);
    }

    #[test]
    fn export_round_trips_under_rfc4180_parsing() {
        let rows = vec![
            row("a", "Asha \"Ace\" Rao", "B.Tech, CSE"),
            row("b", "Binod", "Diploma"),
        ];
        let parsed = parse_csv(&to_csv(&rows));

        assert_eq!(parsed.len(), rows.len() + 1);
        assert_eq!(parsed[1][2], "Asha \"Ace\" Rao");
        assert_eq!(parsed[1][3], "B.Tech, CSE");
        assert_eq!(parsed[2][2], "Binod");
        for record in &parsed[1..] {
            assert_eq!(record.len(), 9);
        }
    }

    #[test]
    fn export_file_name_carries_the_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(file_name(&date), "registrations_export_2025-03-01.csv");
    }
}
