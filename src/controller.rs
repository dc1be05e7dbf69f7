//! Local task list state and its synchronization with the remote store.
//!
//! The controller owns the authoritative local view of the list. Every
//! mutation is confirm-then-apply: the local list changes only after the
//! corresponding remote call has resolved successfully. Gateway failures
//! are absorbed here; none propagate to the caller.

use std::sync::Arc;

use crate::gateway::TaskGateway;
use crate::model::{status_label, NewTask, Task};
use crate::notify::{NoticeKind, Notifier};

/// Pending input fields for the next create request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Owns the local task list and keeps it in sync with confirmed server
/// responses.
pub struct TaskListController {
    gateway: Arc<dyn TaskGateway>,
    notifier: Arc<dyn Notifier>,
    tasks: Vec<Task>,
    draft: Draft,
}

impl TaskListController {
    /// Create a controller with an empty list and a blank draft.
    pub fn new(gateway: Arc<dyn TaskGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            tasks: Vec::new(),
            draft: Draft::default(),
        }
    }

    /// The current local list, in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The pending input fields for the next create request.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the pending input fields.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Replace the local list with the store's current contents.
    ///
    /// Failures are logged only; the list is left as it was and the user
    /// sees no dialog for this path.
    pub async fn load(&mut self) {
        match self.gateway.list().await {
            Ok(tasks) => {
                tracing::debug!("Loaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(e) => {
                tracing::error!("Failed to load tasks: {}", e);
            }
        }
    }

    /// Create a task from the draft and append the confirmed record.
    ///
    /// A draft whose trimmed title is empty is rejected silently and no
    /// request is issued. On success the draft's text fields are cleared;
    /// on failure both the list and the draft are left untouched.
    pub async fn add(&mut self) {
        let title = self.draft.title.trim();
        if title.is_empty() {
            return;
        }

        let new_task = NewTask {
            title: title.to_string(),
            description: self.draft.description.trim().to_string(),
            completed: self.draft.completed,
        };

        match self.gateway.create(&new_task).await {
            Ok(task) => {
                self.tasks.push(task);
                self.draft.title.clear();
                self.draft.description.clear();
                self.notifier
                    .notify(
                        NoticeKind::Success,
                        "Task created",
                        "The task has been added.",
                    )
                    .await;
            }
            Err(e) => {
                tracing::error!("Failed to create task: {}", e);
                self.notifier
                    .notify(NoticeKind::Error, "Error", "Could not add the task.")
                    .await;
            }
        }
    }

    /// Flip the completion flag of the task addressed by `id`.
    ///
    /// The inverted flag is sent to the store; the local record is only
    /// updated from the server-confirmed response.
    pub async fn toggle(&mut self, id: &str) {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::warn!("Toggle requested for unknown task {}", id);
            return;
        };

        let mut updated = self.tasks[index].clone();
        updated.completed = !updated.completed;

        match self.gateway.update(id, &updated).await {
            Ok(confirmed) => {
                let message = format!(
                    "\"{}\" has been marked as {}.",
                    confirmed.title,
                    status_label(confirmed.completed)
                );
                self.tasks[index] = confirmed;
                self.notifier
                    .notify(NoticeKind::Success, "Status updated", &message)
                    .await;
            }
            Err(e) => {
                tracing::error!("Failed to update task {}: {}", id, e);
                self.notifier
                    .notify(NoticeKind::Error, "Error", "Could not update the task.")
                    .await;
            }
        }
    }

    /// Delete the task addressed by `id`, after an explicit confirmation.
    ///
    /// A declined confirmation issues no request and produces no notice.
    pub async fn delete(&mut self, id: &str) {
        let confirmed = self
            .notifier
            .confirm("Are you sure? You won't be able to revert this!")
            .await;
        if !confirmed {
            return;
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                self.notifier
                    .notify(NoticeKind::Success, "Deleted", "Your task has been deleted.")
                    .await;
            }
            Err(e) => {
                tracing::error!("Failed to delete task {}: {}", id, e);
                self.notifier
                    .notify(NoticeKind::Error, "Error", "Could not delete the task.")
                    .await;
            }
        }
    }
}
