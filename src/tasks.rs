//! Task manager widget
//!
//! An ordered task list with priorities, completion toggling, and an
//! all/active/completed filter, persisted as one JSON slot. Mutations go
//! through [`TaskBook`]; every CLI operation writes the full collection
//! back through the store.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::next_record_id;
use crate::store::{JsonStore, TASKS_SLOT};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Next priority in the low -> medium -> high -> low cycle
    pub fn cycled(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

/// List filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// Counts derived from the full collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// In-memory record store for tasks. Insertion order is newest first;
/// operations on a missing id are idempotent no-ops.
#[derive(Debug, Default)]
pub struct TaskBook {
    tasks: Vec<Task>,
}

impl TaskBook {
    pub fn from_records(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn records(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new task to the front. Whitespace-only text is rejected.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task {
            id: next_record_id(self.tasks.iter().map(|t| t.id.as_str())),
            text: text.to_string(),
            completed: false,
            priority: Priority::default(),
            created_at: Utc::now(),
        };
        self.tasks.insert(0, task);
        Some(&self.tasks[0])
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Replace a task's text. Empty replacement text is a no-op, matching
    /// the edit form's behavior.
    pub fn edit_text(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_priority(&mut self, id: &str, priority: Priority) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Advance a task's priority one step around the cycle
    pub fn cycle_priority(&mut self, id: &str) -> Option<Priority> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.priority = task.priority.cycled();
        Some(task.priority)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drop every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            completed,
            remaining: self.tasks.len() - completed,
        }
    }
}

fn load_book(store: &JsonStore) -> TaskBook {
    TaskBook::from_records(store.load(TASKS_SLOT))
}

fn save_book(store: &JsonStore, book: &TaskBook) -> Result<()> {
    store.save(TASKS_SLOT, book.records())
}

/// Add a task and print the result
pub fn add_task(text: &str) -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    match book.add(text) {
        Some(task) => {
            let line = format!("Added task {} [{}]: {}", task.id, task.priority, task.text);
            save_book(&store, &book)?;
            println!("{}", line);
        }
        None => println!("Task text must not be empty."),
    }
    Ok(())
}

/// List tasks under the given filter with the stats header
pub fn list_tasks(filter: TaskFilter) -> Result<()> {
    let store = JsonStore::open()?;
    let book = load_book(&store);
    let stats = book.stats();

    println!(
        "Tasks: {} total, {} completed, {} remaining",
        stats.total, stats.completed, stats.remaining
    );

    let visible = book.filtered(filter);
    if visible.is_empty() {
        println!("No tasks found. Add a task to get started!");
        return Ok(());
    }

    for task in visible {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {}  ({})  {}", mark, task.id, task.priority, task.text);
    }
    Ok(())
}

/// Toggle a task's completed flag
pub fn toggle_task(id: &str) -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    if book.toggle(id) {
        save_book(&store, &book)?;
        println!("Toggled task {}", id);
    } else {
        println!("No task with id {}", id);
    }
    Ok(())
}

/// Replace a task's text
pub fn edit_task(id: &str, text: &str) -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    if book.edit_text(id, text) {
        save_book(&store, &book)?;
        println!("Updated task {}", id);
    } else {
        println!("Nothing to update for id {}", id);
    }
    Ok(())
}

/// Set or cycle a task's priority
pub fn set_task_priority(id: &str, priority: Option<Priority>) -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    let outcome = match priority {
        Some(priority) => book.set_priority(id, priority).then_some(priority),
        None => book.cycle_priority(id),
    };
    match outcome {
        Some(priority) => {
            save_book(&store, &book)?;
            println!("Task {} priority set to {}", id, priority);
        }
        None => println!("No task with id {}", id),
    }
    Ok(())
}

/// Delete a task
pub fn delete_task(id: &str) -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    if book.remove(id) {
        save_book(&store, &book)?;
        println!("Deleted task {}", id);
    } else {
        println!("No task with id {}", id);
    }
    Ok(())
}

/// Remove every completed task
pub fn clear_completed_tasks() -> Result<()> {
    let store = JsonStore::open()?;
    let mut book = load_book(&store);
    let removed = book.clear_completed();
    if removed > 0 {
        save_book(&store, &book)?;
    }
    println!("Cleared {} completed task(s)", removed);
    Ok(())
}
