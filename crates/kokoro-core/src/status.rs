use crate::journal::SharedJournalStore;
use kokoro_model::status::ComponentStatus;
use std::error::Error;
use tracing::instrument;

#[instrument(skip_all)]
pub fn get_journal_store_status(store: &SharedJournalStore) -> ComponentStatus {
    store
        .read()
        .map(|store| store.len())
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "journal store unavailable during health check"))
        .into()
}
