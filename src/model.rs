//! Task record types shared between the gateway and the controller.

use serde::{Deserialize, Serialize};

/// A task as confirmed by the remote store.
///
/// The store addresses tasks by a `_id` field; the rename keeps the wire
/// shape intact while the rest of the crate uses `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier, immutable once assigned.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Free text, may be absent on the wire.
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

/// A task before creation: everything but the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

/// Human-readable label for a completion flag.
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "done"
    } else {
        "to do"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_uses_wire_id_field() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"7","title":"Water plants","completed":false}"#)
                .unwrap();
        assert_eq!(task.id, "7");
        assert_eq!(task.description, "");

        let wire = serde_json::to_value(&task).unwrap();
        assert_eq!(wire["_id"], "7");
        assert!(wire.get("id").is_none());
    }

    #[test]
    fn test_new_task_has_no_id_field() {
        let wire = serde_json::to_value(NewTask {
            title: "Buy milk".to_string(),
            description: String::new(),
            completed: false,
        })
        .unwrap();
        assert!(wire.get("_id").is_none());
        assert_eq!(wire["title"], "Buy milk");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "done");
        assert_eq!(status_label(false), "to do");
    }
}
