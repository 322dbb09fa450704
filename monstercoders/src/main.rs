use mc_backend_docstore::{client::DocStoreClient, watcher::DocStoreWatcher};
use mc_export_csv::CsvExporter;
use mc_sync::RegistrySync;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = mc_config::from_path(&config_path);

    mc_log::init(config.log().display_level(), config.log().level_filter());

    mc_log::info(Some("🚀"), "[MonsterCoders] Starting");

    let Some(docstore) = config.backend().docstore() else {
        mc_log::error(
            None,
            "[MonsterCoders] No document store configuration is specified, registration sync is disabled",
        );
        return;
    };

    let client = DocStoreClient::new(
        docstore.base_url(),
        docstore.app_id(),
        docstore.auth_token(),
    );

    let (watcher, snapshot_rx) = DocStoreWatcher::new(client, docstore.poll_interval());
    let (registry_sync, snapshot) = RegistrySync::new(snapshot_rx);

    let exporter = config
        .export()
        .as_ref()
        .map(|export| CsvExporter::new(snapshot.clone(), export.path(), export.every()));

    let cancel_token = CancellationToken::new();

    match tokio::try_join!(
        watcher.run(cancel_token.clone()),
        registry_sync.run(cancel_token.clone()),
        match exporter {
            Some(exporter) => exporter.run(cancel_token.clone()),
            None => CsvExporter::run_none(),
        }
    ) {
        Ok(_) => mc_log::info(Some("👋"), "[MonsterCoders] Turned off"),
        Err(err) => {
            mc_log::warn(None, "[MonsterCoders] Shutting down all running components");
            cancel_token.cancel();
            mc_log::warn(
                Some("👋"),
                format!("[MonsterCoders] Turned off with error: {err}"),
            );
        }
    }
}
