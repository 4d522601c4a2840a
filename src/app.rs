//! The one-pass pipeline: fetch, compare, persist, notify.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::domain::{report, Snapshot};
use crate::error::Result;
use crate::gma::TallyClient;
use crate::store::SnapshotStore;
use crate::telegram::{Notify, TelegramNotifier};

/// What a run did, for logging and tests.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Processed fraction unchanged since the last run; nothing sent.
    Unchanged,
    /// A change was detected and a notification was delivered.
    Notified,
}

pub struct App;

impl App {
    /// Run the full pipeline against the live feed and Telegram.
    pub async fn run(config: Config, snapshot_path: &Path) -> Result<Outcome> {
        let client = TallyClient::new(config.source_url.clone(), config.referer.clone())?;
        let notifier = TelegramNotifier::new(
            config.telegram_api.clone(),
            config.bot_id.clone(),
            config.recipient.clone(),
        );

        let new = client.fetch_snapshot(&config.target).await?;
        let store = SnapshotStore::new(snapshot_path);

        run_pipeline(new, &store, &notifier).await
    }
}

/// Compare the fresh snapshot against the stored one, persist the fresh one,
/// and notify on change.
///
/// The store is written before the comparison, matching the original tool:
/// even an unchanged run refreshes the file (the lead may have moved while
/// the processed fraction did not).
pub async fn run_pipeline(
    new: Snapshot,
    store: &SnapshotStore,
    notifier: &dyn Notify,
) -> Result<Outcome> {
    let old = store.load()?;
    store.save(&new)?;

    info!(
        old_processed = old.processed,
        new_processed = new.processed,
        lead = new.lead,
        "comparing snapshots"
    );

    if !new.has_changed_from(&old) {
        info!("processed fraction unchanged, not notifying");
        return Ok(Outcome::Unchanged);
    }

    let message = report::format_message(&old, &new);
    notifier.notify(&message).await?;

    Ok(Outcome::Notified)
}
