use crate::config::{loggable, TodoConfig};
use tracing::{debug, error, trace};

/// Identifies a [`Task`] within its [`TodoState`]. Never reused.
pub type TaskId = u64;

/// One entry on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
	pub id: TaskId,
	pub text: String,
	pub completed: bool,
}
impl Task {
	#[must_use]
	pub fn new(id: TaskId, text: impl Into<String>) -> Self {
		Self {
			id,
			text: text.into(),
			completed: false,
		}
	}
}

/// The source of truth a [`TodoList`](`super::TodoList`) renders from.
///
/// Task ids are unique within [`TodoState::tasks`] and `last_id` is at least as large as any id ever handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
	input_text: String,
	tasks: Vec<Task>,
	last_id: TaskId,
}
impl TodoState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A state containing `config.initial_tasks` with ids counting up from 1.
	#[must_use]
	pub fn from_config(config: &TodoConfig) -> Self {
		let mut state = Self::new();
		for text in &config.initial_tasks {
			state.push_task(text.clone());
		}
		state
	}

	/// Restores a state from existing tasks.
	///
	/// `last_id` is raised to the largest task id if necessary. Tasks with an already used id are dropped.
	#[must_use]
	pub fn from_parts(tasks: impl IntoIterator<Item = Task>, last_id: TaskId) -> Self {
		let mut state = Self {
			input_text: String::new(),
			tasks: Vec::new(),
			last_id,
		};
		for task in tasks {
			if state.task(task.id).is_some() {
				error!("Dropping task with duplicate id {}.", task.id);
				continue;
			}
			state.last_id = state.last_id.max(task.id);
			state.tasks.push(task);
		}
		state
	}

	#[must_use]
	pub fn input_text(&self) -> &str {
		&self.input_text
	}

	pub fn set_input_text(&mut self, text: impl Into<String>) {
		self.input_text = text.into();
		trace!("Input text is now {:?}.", loggable(&self.input_text));
	}

	#[must_use]
	pub fn tasks(&self) -> &[Task] {
		&self.tasks
	}

	#[must_use]
	pub fn last_id(&self) -> TaskId {
		self.last_id
	}

	#[must_use]
	pub fn task(&self, id: TaskId) -> Option<&Task> {
		self.tasks.iter().find(|task| task.id == id)
	}

	/// Appends a task with the next id and clears the input text.
	///
	/// Returns the new id, or [`None`] without changing anything if `text` is blank.
	pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
		if text.trim().is_empty() {
			trace!("Ignoring blank task text.");
			return None;
		}

		let id = self.push_task(text.to_owned())?;
		self.input_text.clear();
		Some(id)
	}

	fn push_task(&mut self, text: String) -> Option<TaskId> {
		let id = match self.last_id.checked_add(1) {
			Some(id) => id,
			None => {
				error!("Task ids are exhausted. Not adding task.");
				return None;
			}
		};
		debug!("Adding task {} ({:?}).", id, loggable(&text));
		self.tasks.push(Task::new(id, text));
		self.last_id = id;
		Some(id)
	}

	/// Flips the completion flag of task `id`.
	///
	/// Returns whether such a task existed.
	pub fn toggle_complete(&mut self, id: TaskId) -> bool {
		match self.tasks.iter_mut().find(|task| task.id == id) {
			Some(task) => {
				task.completed = !task.completed;
				debug!("Task {} is now {}.", id, if task.completed { "completed" } else { "incomplete" });
				true
			}
			None => {
				debug!("No task {} to toggle.", id);
				false
			}
		}
	}

	/// Removes task `id`.
	///
	/// Returns whether such a task existed.
	pub fn delete_task(&mut self, id: TaskId) -> bool {
		let len = self.tasks.len();
		self.tasks.retain(|task| task.id != id);
		let removed = self.tasks.len() != len;
		if removed {
			debug!("Deleted task {}.", id);
		} else {
			debug!("No task {} to delete.", id);
		}
		removed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seeded_ids_count_up_from_one() {
		let state = TodoState::from_config(&TodoConfig::default());
		let ids: Vec<_> = state.tasks().iter().map(|task| task.id).collect();
		assert_eq!(ids, [1, 2, 3]);
		assert_eq!(state.last_id(), 3);
	}

	#[test]
	fn from_parts_keeps_ids_unique() {
		let state = TodoState::from_parts(vec![Task::new(5, "A"), Task::new(5, "B"), Task::new(2, "C")], 1);
		assert_eq!(state.tasks(), &[Task::new(5, "A"), Task::new(2, "C")]);
		assert_eq!(state.last_id(), 5);
	}

	#[test]
	fn exhausted_ids_refuse_new_tasks() {
		let mut state = TodoState::from_parts(Vec::new(), TaskId::MAX);
		assert_eq!(state.add_task("overflow"), None);
		assert!(state.tasks().is_empty());
		assert_eq!(state.last_id(), TaskId::MAX);
	}

	#[test]
	fn blank_text_keeps_input() {
		let mut state = TodoState::new();
		state.set_input_text("   ");
		assert_eq!(state.add_task("   "), None);
		assert_eq!(state.input_text(), "   ");
	}
}
