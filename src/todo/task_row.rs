use super::{Callback, Task, TaskId};
use crate::{
	component::{Component, Rendered},
	element::{create_element, el, Child},
	host::{Event, Handler, Host},
};
use core::cell::Cell;
use std::rc::{Rc, Weak};
use tracing::{debug, instrument};

/// Where a [`TaskRow`] is in its two-click deletion.
///
/// There is no way back from [`RowState::ConfirmingDelete`] other than discarding the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
	Normal,
	ConfirmingDelete,
}
impl Default for RowState {
	fn default() -> Self {
		Self::Normal
	}
}

/// A single task: completion checkbox, label and delete button.
pub struct TaskRow<H: Host> {
	this: Weak<Self>,
	task: Task,
	state: Cell<RowState>,
	on_toggle: Callback<TaskId>,
	on_delete: Callback<TaskId>,
	rendered: Rendered<H>,
}
impl<H: Host> TaskRow<H> {
	#[must_use]
	pub fn new(host: H, task: Task, on_toggle: Callback<TaskId>, on_delete: Callback<TaskId>) -> Rc<Self> {
		Rc::new_cyclic(|this| Self {
			this: this.clone(),
			task,
			state: Cell::new(RowState::Normal),
			on_toggle,
			on_delete,
			rendered: Rendered::new(host),
		})
	}

	#[must_use]
	pub fn task(&self) -> &Task {
		&self.task
	}

	#[must_use]
	pub fn state(&self) -> RowState {
		self.state.get()
	}

	/// The first click asks for confirmation, the second one requests deletion from the owner.
	#[instrument(skip(self), fields(id = self.task.id))]
	pub fn click_delete(&self) {
		match self.state.get() {
			RowState::Normal => {
				debug!("Awaiting confirmation.");
				self.state.set(RowState::ConfirmingDelete);
				self.refresh();
			}
			RowState::ConfirmingDelete => {
				debug!("Deletion confirmed.");
				(self.on_delete)(self.task.id)
			}
		}
	}

	pub fn click_toggle(&self) {
		(self.on_toggle)(self.task.id)
	}

	fn label_style(&self) -> &'static str {
		if self.task.completed {
			"color: gray; text-decoration: line-through;"
		} else {
			"color: black; text-decoration: none;"
		}
	}
}
impl<H: Host> Component<H> for TaskRow<H> {
	fn render(&self) -> H::Node {
		let host = self.rendered.host();
		let id = self.task.id.to_string();
		let confirming = self.state.get() == RowState::ConfirmingDelete;

		let mut checkbox_attributes = vec![("type", "checkbox")];
		if self.task.completed {
			checkbox_attributes.push(("checked", "checked"));
		}
		let this = self.this.clone();
		let toggle_handler: Handler = Rc::new(move |_: &Event| {
			if let Some(row) = this.upgrade() {
				row.click_toggle()
			}
		});
		let checkbox = create_element(host, "input", checkbox_attributes, Child::Empty, vec![("change", toggle_handler)]);

		let label = el(host, "label", [("style", self.label_style())], self.task.text.as_str());

		let this = self.this.clone();
		let delete_handler: Handler = Rc::new(move |_: &Event| {
			if let Some(row) = this.upgrade() {
				row.click_delete()
			}
		});
		let delete_button = create_element(
			host,
			"button",
			[("class", "delete-btn")],
			if confirming { "Delete?" } else { "🗑️" },
			vec![("click", delete_handler)],
		);

		let mut row_attributes = vec![("data-id", id.as_str())];
		if confirming {
			row_attributes.push(("class", "confirming-delete"));
		}
		el(host, "li", row_attributes, vec![Child::Node(checkbox), Child::Node(label), Child::Node(delete_button)])
	}

	fn rendered(&self) -> &Rendered<H> {
		&self.rendered
	}
}
