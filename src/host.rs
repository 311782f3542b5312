//! The document object model boundary.
//!
//! Everything this crate renders goes through a [`Host`]: [`DomHost`](`crate::web::DomHost`)
//! writes to a live [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document),
//! while [`MemoryHost`](`crate::memory::MemoryHost`) keeps an in-memory tree that can be inspected and driven directly.

use core::fmt::Debug;
use std::rc::Rc;

/// A shared event handler, as registered through [`Host::add_event_listener`].
pub type Handler = Rc<dyn Fn(&Event)>;

/// Host-independent view of a dispatched event.
///
/// Only what the views need is carried over: the event name and the state of an input-like target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
	pub name: String,
	/// The target's current `value`, if it has one.
	pub value: Option<String>,
	/// The target's current `checked` state, if it has one.
	pub checked: Option<bool>,
}
impl Event {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: None,
			checked: None,
		}
	}

	#[must_use]
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_checked(mut self, checked: bool) -> Self {
		self.checked = Some(checked);
		self
	}
}

/// Node construction and tree manipulation, as provided by a display environment.
///
/// Implementations are cheap handles and are cloned freely into components.
/// Failing operations are logged by the implementation rather than reported.
pub trait Host: Clone + 'static {
	/// Opaque handle to a node in this host's tree.
	type Node: Clone + Debug + 'static;

	fn create_element(&self, tag: &str) -> Self::Node;
	fn create_text_node(&self, text: &str) -> Self::Node;
	fn set_attribute(&self, element: &Self::Node, name: &str, value: &str);

	/// Registers `handler` for events named `event` on `target`.
	///
	/// There is no counterpart for removal. Listeners live as long as their node.
	fn add_event_listener(&self, target: &Self::Node, event: &str, handler: Handler);

	fn append_child(&self, parent: &Self::Node, child: &Self::Node);

	/// Replaces `old_child` with `new_child` within `parent`.
	fn replace_child(&self, parent: &Self::Node, new_child: &Self::Node, old_child: &Self::Node);

	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;
}
