use std::collections::HashMap;

use tracing::debug;

use crate::models::{composite_key, StatusEntry};

/// Fallback returned for any composite key not present in the table.
///
/// A lookup miss is a normal outcome, not an error.
pub const INVALID_LOOKUP_MESSAGE: &str = "Invalid Task ID or Student ID";

/// Service answering exact-match status queries against a fixed in-memory
/// table
///
/// The table is built once from seed entries and never mutated afterwards,
/// so the service can be shared across any number of concurrent requests
/// without locking.
#[derive(Debug, Clone)]
pub struct TaskStatusService {
    statuses: HashMap<String, String>,
}

impl TaskStatusService {
    /// Create a service seeded with the reference dataset
    pub fn new() -> Self {
        Self::with_entries(crate::models::seed_entries())
    }

    /// Create a service from an explicit entry set
    ///
    /// Later entries win on duplicate keys; the seed dataset has none.
    pub fn with_entries(entries: Vec<StatusEntry>) -> Self {
        let statuses = entries
            .into_iter()
            .map(|entry| (entry.composite_key, entry.status))
            .collect();
        Self { statuses }
    }

    /// Look up the status for a student/task pair
    ///
    /// Returns the exact status string for the composite key when present,
    /// otherwise the literal fallback string. Empty inputs are accepted and
    /// simply form a key unlikely to match. Pure read, no side effects.
    pub fn lookup(&self, student_id: &str, task_id: &str) -> &str {
        let key = composite_key(student_id, task_id);
        match self.statuses.get(&key) {
            Some(status) => status,
            None => {
                debug!(
                    student_id = %student_id,
                    task_id = %task_id,
                    "No status entry for composite key"
                );
                INVALID_LOOKUP_MESSAGE
            }
        }
    }

    /// Number of entries in the table
    pub fn entry_count(&self) -> usize {
        self.statuses.len()
    }
}

impl Default for TaskStatusService {
    fn default() -> Self {
        Self::new()
    }
}
