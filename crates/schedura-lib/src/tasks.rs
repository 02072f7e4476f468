// ============================
// schedura-lib/src/tasks.rs
// ============================
//! Home screen task list.
//!
//! Plain in-memory state: tasks live as long as the list does.
use metrics::counter;
use tracing::debug;

use schedura_common::{Task, TaskId, TaskSummary};

use crate::error::AppError;
use crate::metrics::TASKS_CHANGED;

/// Ordered task list plus the id of the expanded row, if any
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    expanded: Option<TaskId>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The starter tasks a fresh install shows
    pub fn with_starter_tasks() -> Self {
        let starter = [
            (
                "1",
                "Finish React Native project",
                false,
                "Complete the React Native project by the end of the week.",
            ),
            (
                "2",
                "Prepare meeting notes",
                true,
                "Summarize key points for Monday's meeting.",
            ),
            ("3", "Buy groceries", false, "Milk, Bread, Eggs, and Vegetables."),
            (
                "4",
                "Call client",
                true,
                "Discuss project requirements and timeline.",
            ),
        ];

        Self {
            tasks: starter
                .into_iter()
                .map(|(id, title, completed, description)| Task {
                    id: id.to_string(),
                    title: title.to_string(),
                    completed,
                    description: Some(description.to_string()),
                })
                .collect(),
            expanded: None,
        }
    }

    /// Append a task; the title must contain something besides whitespace
    pub fn add(
        &mut self,
        title: &str,
        description: Option<String>,
    ) -> Result<&Task, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput(
                "Task title must not be empty".to_string(),
            ));
        }

        let description = description.filter(|d| !d.trim().is_empty());
        self.tasks.push(Task::new(title, description));
        counter!(TASKS_CHANGED, "op" => "add").increment(1);

        let task = &self.tasks[self.tasks.len() - 1];
        debug!(id = %task.id, "task added");
        Ok(task)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Flip the completed flag; returns the new value
    pub fn toggle(&mut self, id: &str) -> Result<bool, AppError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;

        task.completed = !task.completed;
        counter!(TASKS_CHANGED, "op" => "toggle").increment(1);
        Ok(task.completed)
    }

    /// Remove a task; collapses it first if it was expanded
    pub fn delete(&mut self, id: &str) -> Result<Task, AppError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;

        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        }

        counter!(TASKS_CHANGED, "op" => "delete").increment(1);
        Ok(self.tasks.remove(index))
    }

    /// Expand a task, or collapse it when it is already expanded.
    ///
    /// At most one task is expanded at a time.
    pub fn expand(&mut self, id: &str) -> Result<Option<&str>, AppError> {
        if self.get(id).is_none() {
            return Err(AppError::TaskNotFound(id.to_string()));
        }

        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
        Ok(self.expanded.as_deref())
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn summary(&self) -> TaskSummary {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskSummary {
            total,
            completed,
            pending: total - completed,
        }
    }
}
