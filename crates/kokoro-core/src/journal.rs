pub mod error;

use crate::journal::error::JournalError;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::{JournalEntryUpdate, NewJournalEntry, Patch};
use std::fmt::Debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory journal. Entries live as long as the store does.
///
/// Insertion order is kept so that entries sharing a timestamp still list newest first.
#[derive(Debug)]
pub struct JournalStore {
    entries: IndexMap<Uuid, JournalEntry>,
    clock: Box<dyn Clock>,
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            entries: IndexMap::new(),
            clock: Box::new(clock),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<JournalEntry, JournalError> {
        let new_entry = NewJournalEntry {
            title: title.into(),
            content: content.into(),
        };
        new_entry.validate()?;

        let id = self.fresh_id();
        let entry = JournalEntry {
            id,
            title: new_entry.title,
            content: new_entry.content,
            created_at: self.clock.now(),
        };
        self.entries.insert(id, entry.clone());
        tracing::debug!(%id, "created journal entry");
        Ok(entry)
    }

    /// Snapshot of all entries, most recent `created_at` first.
    #[must_use]
    pub fn list(&self) -> Vec<JournalEntry> {
        let mut entries: Vec<_> = self.entries.values().rev().cloned().collect();
        // Stable sort keeps newest insertion first on equal timestamps
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&JournalEntry> {
        self.entries.get(id)
    }

    /// Applies the present fields of `update`. `created_at` is never touched.
    pub fn update(&mut self, id: &Uuid, update: JournalEntryUpdate) -> Result<JournalEntry, JournalError> {
        update.validate()?;
        let entry = self.entries.get_mut(id).ok_or(JournalError::NotFound(*id))?;
        if update.is_empty() {
            return Ok(entry.clone());
        }
        if let Patch::Present(title) = update.title {
            entry.title = title;
        }
        if let Patch::Present(content) = update.content {
            entry.content = content;
        }
        tracing::debug!(%id, "updated journal entry");
        Ok(entry.clone())
    }

    /// Returns whether an entry was removed. Deleting twice is a no-op.
    pub fn delete(&mut self, id: &Uuid) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            tracing::debug!(%id, "deleted journal entry");
        }
        removed
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.entries.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Process-wide handle on one [`JournalStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedJournalStore(Arc<RwLock<JournalStore>>);

impl SharedJournalStore {
    #[must_use]
    pub fn new(store: JournalStore) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, JournalStore>, JournalError> {
        self.0.read().map_err(|_| JournalError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, JournalStore>, JournalError> {
        self.0.write().map_err(|_| JournalError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokoro_model::journal::error::ValidationError;
    use std::sync::atomic::{AtomicI64, Ordering};
    use test_log::test;

    const EPOCH: i64 = 1_700_000_000;

    /// Advances by one second on every read.
    #[derive(Debug, Default)]
    struct StepClock(AtomicI64);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let offset = self.0.fetch_add(1, Ordering::SeqCst);
            DateTime::from_timestamp(EPOCH + offset, 0).unwrap()
        }
    }

    #[derive(Debug)]
    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(EPOCH, 0).unwrap()
        }
    }

    fn update(title: Option<&str>, content: Option<&str>) -> JournalEntryUpdate {
        JournalEntryUpdate {
            title: title.map_or(Patch::Absent, |t| Patch::Present(t.to_owned())),
            content: content.map_or(Patch::Absent, |c| Patch::Present(c.to_owned())),
        }
    }

    #[test]
    fn test_create_then_get() {
        let mut store = JournalStore::new();
        let created = store.create("Evening", "Walked by the river").unwrap();

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, &created);
        assert_eq!(fetched.title, "Evening");
        assert_eq!(fetched.content, "Walked by the river");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let mut store = JournalStore::new();
        let error = store.create("   ", "content").unwrap_err();
        assert!(matches!(error, JournalError::Validation(ValidationError::EmptyField("title"))));
        let error = store.create("title", "").unwrap_err();
        assert!(matches!(error, JournalError::Validation(ValidationError::EmptyField("content"))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = JournalStore::new();
        let a = store.create("a", "a").unwrap();
        let b = store.create("a", "a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_most_recent_first() {
        let mut store = JournalStore::with_clock(StepClock::default());
        let c = store.create("C", "c").unwrap();
        let d = store.create("D", "d").unwrap();
        let e = store.create("E", "e").unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![e.id, d.id, c.id]);
    }

    #[test]
    fn test_list_ties_newest_insertion_first() {
        let mut store = JournalStore::with_clock(FixedClock);
        let first = store.create("1", "1").unwrap();
        let second = store.create("2", "2").unwrap();
        let third = store.create("3", "3").unwrap();
        assert!(store.delete(&second.id));
        let fourth = store.create("4", "4").unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![fourth.id, third.id, first.id]);
    }

    #[test]
    fn test_update_keeps_created_at() {
        let mut store = JournalStore::with_clock(StepClock::default());
        let created = store.create("A", "B").unwrap();
        store.create("other", "entry").unwrap();

        let updated = store.update(&created.id, update(None, Some("C"))).unwrap();
        assert_eq!(updated.title, "A");
        assert_eq!(updated.content, "C");
        assert_eq!(updated.created_at, created.created_at);

        let updated = store.update(&created.id, update(Some("Z"), None)).unwrap();
        assert_eq!(updated.title, "Z");
        assert_eq!(updated.content, "C");
        assert_eq!(store.get(&created.id).unwrap().created_at, created.created_at);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = JournalStore::new();
        store.create("A", "B").unwrap();
        let missing = Uuid::new_v4();

        let error = store.update(&missing, update(Some("x"), None)).unwrap_err();
        assert!(matches!(error, JournalError::NotFound(id) if id == missing));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_invalid_leaves_entry_untouched() {
        let mut store = JournalStore::new();
        let created = store.create("A", "B").unwrap();
        let error = store.update(&created.id, update(Some("new"), Some(" "))).unwrap_err();
        assert!(matches!(error, JournalError::Validation(_)));
        assert_eq!(store.get(&created.id).unwrap(), &created);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut store = JournalStore::new();
        let created = store.create("A", "B").unwrap();
        let updated = store.update(&created.id, JournalEntryUpdate::default()).unwrap();
        assert_eq!(updated, created);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = JournalStore::new();
        let created = store.create("A", "B").unwrap();
        assert!(store.delete(&created.id));
        assert!(!store.delete(&created.id));
        assert!(store.get(&created.id).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_shared_store_mutations_visible() {
        let shared = SharedJournalStore::default();
        let created = shared.write().unwrap().create("A", "B").unwrap();
        assert_eq!(shared.clone().read().unwrap().list(), vec![created]);
    }
}
