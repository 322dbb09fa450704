use std::sync::{Arc, RwLock};

use mc_backend_docstore::model::RegistrationResJson;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::row::RegistrationRow;

pub mod row;

pub const TIMESTAMP_SENTINEL: &str = "1970-01-01T00:00:00Z";

#[derive(Clone)]
pub struct SnapshotHandle {
    rows: Arc<RwLock<Vec<RegistrationRow>>>,
}

impl SnapshotHandle {
    pub fn rows(&self) -> Vec<RegistrationRow> {
        self.rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

pub struct RegistrySync {
    rows: Arc<RwLock<Vec<RegistrationRow>>>,
    snapshot_rx: watch::Receiver<Vec<RegistrationResJson>>,
}

impl RegistrySync {
    pub fn new(snapshot_rx: watch::Receiver<Vec<RegistrationResJson>>) -> (Self, SnapshotHandle) {
        mc_log::info(Some("⚡"), "[RegistrySync] Initializing component");

        let rows = Arc::new(RwLock::new(Vec::new()));

        (
            Self {
                rows: rows.clone(),
                snapshot_rx,
            },
            SnapshotHandle { rows },
        )
    }

    pub fn run(mut self, cancel_token: CancellationToken) -> JoinHandle<()> {
        mc_log::info(Some("💫"), "[RegistrySync] Running component");

        tokio::spawn((|| async move {
            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        break;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        break;
                    }
                    changed = self.snapshot_rx.changed() => {
                        if changed.is_ok() {
                            let documents = self.snapshot_rx.borrow_and_update().clone();
                            let rows = Self::rebuild(&documents);
                            mc_log::debug(
                                None,
                                format!("[RegistrySync] Rebuilt snapshot with {} registrations", rows.len()),
                            );
                            *self
                                .rows
                                .write()
                                .unwrap_or_else(|poisoned| poisoned.into_inner()) = rows;
                        } else {
                            break;
                        }
                    }
                }
            }

            mc_log::info(None, "[RegistrySync] Shutting down component");
        })())
    }

    fn rebuild(documents: &[RegistrationResJson]) -> Vec<RegistrationRow> {
        let mut rows = documents
            .iter()
            .map(RegistrationRow::from_document)
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.timestamp().cmp(a.timestamp()));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(
        id: &str,
        student_name: &str,
        timestamp: Option<&str>,
    ) -> RegistrationResJson {
        RegistrationResJson::new(
            &Some(id.to_owned()),
            student_name,
            "B.Tech",
            "2024",
            "no",
            "Java Full Stack Development",
            "9876543210",
            "student@example.com",
            &timestamp.map(str::to_owned),
        )
    }

    #[test]
    fn rebuild_orders_newest_first_by_timestamp_string() {
        let rows = RegistrySync::rebuild(&[
            document("a", "Asha", Some("2025-01-02T10:00:00Z")),
            document("b", "Binod", Some("2025-03-01T08:30:00Z")),
            document("c", "Chitra", Some("2024-12-31T23:59:59Z")),
        ]);
        assert_eq!(
            rows.iter().map(|row| row.id()).collect::<Vec<_>>(),
            ["b", "a", "c"]
        );
    }

    #[test]
    fn missing_timestamp_defaults_to_sentinel_and_sorts_last() {
        let rows = RegistrySync::rebuild(&[
            document("a", "Asha", None),
            document("b", "Binod", Some("2025-03-01T08:30:00Z")),
            document("c", "Chitra", Some("")),
        ]);
        assert_eq!(rows[0].id(), "b");
        assert_eq!(rows[1].timestamp(), TIMESTAMP_SENTINEL);
        assert_eq!(rows[2].timestamp(), TIMESTAMP_SENTINEL);
    }

    #[test]
    fn rebuild_replaces_the_snapshot_wholesale() {
        let first = RegistrySync::rebuild(&[document("a", "Asha", Some("2025-01-01T00:00:00Z"))]);
        let second = RegistrySync::rebuild(&[
            document("b", "Binod", Some("2025-01-02T00:00:00Z")),
            document("c", "Chitra", Some("2025-01-03T00:00:00Z")),
        ]);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert!(!second.iter().any(|row| row.id() == "a"));
    }

    #[tokio::test]
    async fn run_applies_each_notification_to_the_shared_snapshot() {
        let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());
        let (sync, handle) = RegistrySync::new(snapshot_rx);
        let cancel_token = CancellationToken::new();
        let worker = sync.run(cancel_token.clone());

        snapshot_tx
            .send(vec![
                document("a", "Asha", Some("2025-01-01T00:00:00Z")),
                document("b", "Binod", Some("2025-02-01T00:00:00Z")),
            ])
            .unwrap();

        let mut rows = handle.rows();
        for _ in 0..50 {
            if !rows.is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            rows = handle.rows();
        }
        assert_eq!(
            rows.iter().map(|row| row.id()).collect::<Vec<_>>(),
            ["b", "a"]
        );

        cancel_token.cancel();
        worker.await.unwrap();
    }
}
