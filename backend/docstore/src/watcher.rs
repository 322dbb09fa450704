use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{client::DocStoreClient, model::RegistrationResJson};

pub struct DocStoreWatcher {
    client: DocStoreClient,
    poll_interval: Duration,
    snapshot_tx: watch::Sender<Vec<RegistrationResJson>>,
}

impl DocStoreWatcher {
    pub fn new(
        client: DocStoreClient,
        poll_interval: &Duration,
    ) -> (Self, watch::Receiver<Vec<RegistrationResJson>>) {
        mc_log::info(Some("⚡"), "[DocStoreWatcher] Initializing component");

        let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());

        (
            Self {
                client,
                poll_interval: *poll_interval,
                snapshot_tx,
            },
            snapshot_rx,
        )
    }

    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        mc_log::info(Some("💫"), "[DocStoreWatcher] Running component");

        tokio::spawn((|| async move {
            let mut interval = tokio::time::interval(self.poll_interval);
            let mut last_documents = None;
            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        break;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        break;
                    }
                    _ = interval.tick() => {
                        match self.client.find_many().await {
                            Ok(documents) => {
                                if last_documents.as_ref() != Some(&documents) {
                                    // Subscribers always receive the full current
                                    // document set, never a diff.
                                    let _ = self.snapshot_tx.send(documents.clone());
                                    last_documents = Some(documents);
                                }
                            }
                            Err(err) => mc_log::error(
                                None,
                                format!("[DocStoreWatcher] Failed to fetch registration documents: {err}"),
                            ),
                        }
                    }
                }
            }

            mc_log::info(None, "[DocStoreWatcher] Shutting down component");
        })())
    }
}
