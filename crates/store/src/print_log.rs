//! The bounded print audit log.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// The log keeps only this many of the most recent entries.
pub const PRINT_LOG_CAP: usize = 200;

static ENTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One audit record, appended every time a live print is dispatched.
/// Preview renders never produce one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrintLogEntry {
    pub id: String,
    /// Document type of the template that was printed.
    pub doc_type: String,
    pub order_id: Option<String>,
    pub template_id: String,
    pub channel: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub user_id: String,
    /// Epoch milliseconds at dispatch time.
    pub timestamp: i64,
}

impl PrintLogEntry {
    /// Builds an entry stamped with the current time.
    ///
    /// `channel` defaults to `"manual"` and `user_id` to `"system"`; both
    /// can be overridden by the caller that knows better.
    pub fn new(
        doc_type: &str,
        order_id: Option<&str>,
        template_id: &str,
        user_id: Option<&str>,
        metadata: Map<String, Value>,
    ) -> Self {
        let timestamp = Utc::now().timestamp_millis();
        let sequence = ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("pl-{timestamp}-{sequence}"),
            doc_type: doc_type.to_string(),
            order_id: order_id.map(str::to_string),
            template_id: template_id.to_string(),
            channel: "manual".to_string(),
            metadata,
            user_id: user_id.unwrap_or("system").to_string(),
            timestamp,
        }
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = channel.to_string();
        self
    }
}

/// An in-memory, most-recent-first print log, capped at
/// [`PRINT_LOG_CAP`] entries.
#[derive(Debug, Default)]
pub struct InMemoryPrintLog {
    entries: RwLock<VecDeque<PrintLogEntry>>,
}

impl InMemoryPrintLog {
    pub fn new() -> Self {
        Self { entries: RwLock::new(VecDeque::new()) }
    }

    /// Prepends an entry, discarding the oldest once the cap is reached.
    pub fn append(&self, entry: PrintLogEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push_front(entry);
            entries.truncate(PRINT_LOG_CAP);
        } else {
            log::warn!("print log lock poisoned; dropping entry");
        }
    }

    /// A most-recent-first snapshot of the log.
    pub fn entries(&self) -> Vec<PrintLogEntry> {
        self.entries
            .read()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }
}
