/// Settings for a [`TodoList`](`crate::todo::TodoList`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
	/// Heading text.
	pub title: String,
	/// Placeholder of the new task input.
	pub placeholder: String,
	/// Texts of the tasks the list starts out with, in display order.
	pub initial_tasks: Vec<String>,
}
impl Default for TodoConfig {
	fn default() -> Self {
		Self {
			title: "TODO List".to_owned(),
			placeholder: "Задание".to_owned(),
			initial_tasks: vec!["Сделать домашку".to_owned(), "Сделать практику".to_owned(), "Пойти домой".to_owned()],
		}
	}
}
impl TodoConfig {
	/// A configuration without initial tasks.
	#[must_use]
	pub fn empty() -> Self {
		Self {
			initial_tasks: Vec::new(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_tasks<S: Into<String>>(mut self, tasks: impl IntoIterator<Item = S>) -> Self {
		self.initial_tasks = tasks.into_iter().map(Into::into).collect();
		self
	}
}

/// Replaces user content in log messages unless the `dangerous-logging` feature is enabled.
pub(crate) fn loggable(text: &str) -> &str {
	if cfg!(feature = "dangerous-logging") {
		text
	} else {
		"<redacted>"
	}
}
