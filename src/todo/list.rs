use super::{AddTask, Callback, TaskId, TaskRow, TodoState};
use crate::{
	component::{Component, Rendered},
	config::TodoConfig,
	element::{el, Child, NO_ATTRIBUTES},
	host::Host,
};
use core::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};
use tracing::{info, instrument, trace};

/// The root view. Owns the [`TodoState`] and re-renders completely after each change.
pub struct TodoList<H: Host> {
	this: Weak<Self>,
	config: TodoConfig,
	state: RefCell<TodoState>,
	add_row: RefCell<Option<AddTask<H>>>,
	rows: RefCell<Vec<Rc<TaskRow<H>>>>,
	rendered: Rendered<H>,
}
impl<H: Host> TodoList<H> {
	/// A list seeded with `config.initial_tasks`.
	#[must_use]
	pub fn new(host: H, config: TodoConfig) -> Rc<Self> {
		let state = TodoState::from_config(&config);
		Self::with_state(Rendered::new(host), config, state)
	}

	/// Like [`TodoList::new`], but refreshes append to `root` while the list isn't attached anywhere.
	#[must_use]
	pub fn with_root(host: H, root: H::Node, config: TodoConfig) -> Rc<Self> {
		let state = TodoState::from_config(&config);
		Self::with_state(Rendered::with_root(host, root), config, state)
	}

	/// A list rendering an existing `state`. `config.initial_tasks` is ignored.
	#[must_use]
	pub fn with_state(rendered: Rendered<H>, config: TodoConfig, state: TodoState) -> Rc<Self> {
		info!("Creating list with {} task(s).", state.tasks().len());
		Rc::new_cyclic(|this| Self {
			this: this.clone(),
			config,
			state: RefCell::new(state),
			add_row: RefCell::new(None),
			rows: RefCell::new(Vec::new()),
			rendered,
		})
	}

	/// Read access to the current state.
	///
	/// The returned guard must be dropped before calling any of the mutating methods.
	#[must_use]
	pub fn state(&self) -> Ref<'_, TodoState> {
		self.state.borrow()
	}

	/// The row currently rendered for task `id`, if any.
	#[must_use]
	pub fn row(&self, id: TaskId) -> Option<Rc<TaskRow<H>>> {
		self.rows.borrow().iter().find(|row| row.task().id == id).cloned()
	}

	/// Records the pending input text without re-rendering.
	pub fn set_input_text(&self, text: impl Into<String>) {
		self.state.borrow_mut().set_input_text(text)
	}

	/// Adds a task with `text` unless it is blank, then re-renders.
	#[instrument(skip(self, text))]
	pub fn add_task(&self, text: &str) -> Option<TaskId> {
		let id = self.state.borrow_mut().add_task(text)?;
		self.refresh();
		Some(id)
	}

	/// Adds the pending input text as a task.
	pub fn add_pending_task(&self) -> Option<TaskId> {
		let text = self.state.borrow().input_text().to_owned();
		self.add_task(&text)
	}

	#[instrument(skip(self))]
	pub fn toggle_complete(&self, id: TaskId) -> bool {
		let toggled = self.state.borrow_mut().toggle_complete(id);
		if toggled {
			self.refresh();
		}
		toggled
	}

	#[instrument(skip(self))]
	pub fn delete_task(&self, id: TaskId) -> bool {
		let deleted = self.state.borrow_mut().delete_task(id);
		if deleted {
			self.refresh();
		}
		deleted
	}

	fn callback<T: 'static>(&self, f: fn(&Self, T)) -> Callback<T> {
		let this = self.this.clone();
		Rc::new(move |value| match this.upgrade() {
			Some(list) => f(&list, value),
			None => trace!("List is gone. Ignoring callback."),
		})
	}
}
impl<H: Host> Component<H> for TodoList<H> {
	fn render(&self) -> H::Node {
		let host = self.rendered.host();
		let state = self.state.borrow().clone();

		let add_row = AddTask::new(
			host.clone(),
			self.config.placeholder.as_str(),
			state.input_text(),
			self.callback(|list, text: String| list.set_input_text(text)),
			self.callback(|list, ()| {
				list.add_pending_task();
			}),
		);

		let on_toggle = self.callback(|list, id: TaskId| {
			list.toggle_complete(id);
		});
		let on_delete = self.callback(|list, id: TaskId| {
			list.delete_task(id);
		});
		let rows: Vec<_> = state
			.tasks()
			.iter()
			.map(|task| TaskRow::new(host.clone(), task.clone(), Rc::clone(&on_toggle), Rc::clone(&on_delete)))
			.collect();

		let node = el(
			host,
			"div",
			[("class", "todo-list")],
			vec![
				Child::Node(el(host, "h1", NO_ATTRIBUTES, self.config.title.as_str())),
				Child::Node(add_row.rendered_node()),
				Child::Node(el(host, "ul", [("id", "todos")], rows.iter().map(|row| Child::Node(row.rendered_node())).collect::<Vec<_>>())),
			],
		);

		// Dropping the previous children releases their handlers' targets.
		*self.add_row.borrow_mut() = Some(add_row);
		*self.rows.borrow_mut() = rows;
		node
	}

	fn rendered(&self) -> &Rendered<H> {
		&self.rendered
	}
}
