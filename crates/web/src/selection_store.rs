//! Pending day selections, one per student.
//!
//! A student has a single selection at a time, tied to the mentor whose
//! calendar it was made on. Entries expire after `ttl` without activity and
//! the store never holds more than `capacity` students; when full, the least
//! recently touched entry makes room.

use std::{collections::HashMap, time::Duration};

use mentorbook_core::calendar::Selection;
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;

/// Default idle lifetime of a selection
pub const DEFAULT_SELECTION_TTL: Duration = Duration::from_secs(30 * 60);

/// Default upper bound on stored selections
pub const DEFAULT_SELECTION_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
struct PendingSelection {
    mentor_id: String,
    selection: Selection,
    touched: Instant,
}

#[derive(Debug)]
pub struct SelectionStore {
    entries: RwLock<HashMap<String, PendingSelection>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_TTL, DEFAULT_SELECTION_CAPACITY)
    }
}

impl SelectionStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// The student's selection on `mentor_id`'s calendar, or an empty one.
    ///
    /// A selection made on another mentor, or one that has expired, reads as empty.
    pub async fn get(&self, student_id: &str, mentor_id: &str) -> Selection {
        let entries = self.entries.read().await;
        entries
            .get(student_id)
            .filter(|pending| pending.mentor_id == mentor_id && !self.is_expired(pending))
            .map(|pending| pending.selection.clone())
            .unwrap_or_default()
    }

    /// Stores `selection` as the student's only selection. An empty one removes the entry.
    pub async fn put(&self, student_id: &str, mentor_id: &str, selection: Selection) {
        let mut entries = self.entries.write().await;
        self.sweep(&mut entries);

        if selection.is_empty() {
            entries.remove(student_id);
            return;
        }

        if !entries.contains_key(student_id) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, pending)| pending.touched)
                .map(|(student, _)| student.clone());
            if let Some(oldest) = oldest {
                debug!("Selection store full, dropping selection of {}", oldest);
                entries.remove(&oldest);
            }
        }

        entries.insert(
            student_id.to_string(),
            PendingSelection {
                mentor_id: mentor_id.to_string(),
                selection,
                touched: Instant::now(),
            },
        );
    }

    /// Drops the student's selection if it belongs to `mentor_id`.
    pub async fn clear(&self, student_id: &str, mentor_id: &str) {
        let mut entries = self.entries.write().await;
        if entries
            .get(student_id)
            .is_some_and(|pending| pending.mentor_id == mentor_id)
        {
            entries.remove(student_id);
        }
    }

    /// Number of live entries, after dropping expired ones.
    pub async fn len(&self) -> usize {
        let mut entries = self.entries.write().await;
        self.sweep(&mut entries);
        entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_expired(&self, pending: &PendingSelection) -> bool {
        pending.touched.elapsed() >= self.ttl
    }

    fn sweep(&self, entries: &mut HashMap<String, PendingSelection>) {
        let before = entries.len();
        entries.retain(|_, pending| !self.is_expired(pending));
        if entries.len() < before {
            debug!("Expired {} stale selections", before - entries.len());
        }
    }
}
