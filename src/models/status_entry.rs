use serde::{Deserialize, Serialize};

/// StatusEntry represents one association between a composite student/task
/// key and a human-readable status string.
///
/// The full set of entries is built once at process start and never mutated
/// afterwards; there is no persistence across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub composite_key: String,
    pub status: String,
}

impl StatusEntry {
    /// Create an entry from its raw parts, forming the composite key
    pub fn new(student_id: &str, task_id: &str, status: &str) -> Self {
        Self {
            composite_key: composite_key(student_id, task_id),
            status: status.to_string(),
        }
    }
}

/// Form the composite key for a student/task pair: `studentId + "-" + taskId`.
///
/// The delimiter is not escaped, so an identifier containing a literal hyphen
/// can collide with another pair's key.
pub fn composite_key(student_id: &str, task_id: &str) -> String {
    format!("{}-{}", student_id, task_id)
}

/// The reference dataset: four fixed entries seeded at startup
pub fn seed_entries() -> Vec<StatusEntry> {
    vec![
        StatusEntry::new("student123", "task001", "Submitted"),
        StatusEntry::new("student456", "task002", "Under Review"),
        StatusEntry::new("student123", "task003", "Completed - Feedback Available"),
        StatusEntry::new("student789", "task004", "Submitted"),
    ]
}
