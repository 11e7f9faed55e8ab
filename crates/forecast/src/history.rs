//! Forecast history hand-off.
//!
//! Stored results are opaque blobs: written once, never edited. Real storage
//! lives in the host application behind [`HistorySink`].

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use salarymass_core::{Entity, ForecastId, UserId};

use crate::request::ForecastRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: ForecastId,
    pub user_id: UserId,
    pub request: ForecastRequest,
    /// Serialized report, exactly as returned to the user.
    pub result_json: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(user_id: UserId, request: ForecastRequest, result_json: String) -> Self {
        Self {
            id: ForecastId::new(),
            user_id,
            request,
            result_json,
            created_at: Utc::now(),
        }
    }
}

impl Entity for HistoryEntry {
    type Id = ForecastId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Receiver of completed forecasts.
pub trait HistorySink: Send + Sync + 'static {
    fn record(&self, entry: HistoryEntry);
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryHistorySink {
    inner: Mutex<Vec<HistoryEntry>>,
}

impl InMemoryHistorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<HistoryEntry> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn for_user(&self, user_id: UserId) -> Vec<HistoryEntry> {
        self.all()
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect()
    }
}

impl HistorySink for InMemoryHistorySink {
    fn record(&self, entry: HistoryEntry) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_entries_per_user() {
        let sink = InMemoryHistorySink::new();
        let alice = UserId::new();
        let bob = UserId::new();
        let req = ForecastRequest::new(2025, 2026, 1, 1, 1).unwrap();

        sink.record(HistoryEntry::new(alice, req, "{}".to_string()));
        sink.record(HistoryEntry::new(bob, req, "{}".to_string()));
        sink.record(HistoryEntry::new(alice, req, "{}".to_string()));

        assert_eq!(sink.all().len(), 3);
        let mine = sink.for_user(alice);
        assert_eq!(mine.len(), 2);
        assert_ne!(mine[0].id(), mine[1].id());
    }
}
