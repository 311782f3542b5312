//! An in-memory document.
//!
//! [`MemoryHost`] implements [`Host`] on top of a node arena and can dispatch [`Event`]s to the registered handlers,
//! which makes the views usable outside of a browser.
//! Nodes are never freed. Discarded subtrees simply become unreachable from the body.

use crate::host::{Event, Handler, Host};
use core::fmt::{self, Debug, Formatter, Write as _};
use hashbrown::HashMap;
use std::{cell::RefCell, rc::Rc};
use tracing::{error, trace, warn};

/// Handle to a node owned by a [`MemoryHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

enum NodeData {
	Element {
		tag: String,
		attributes: Vec<(String, String)>,
		children: Vec<NodeId>,
		listeners: HashMap<String, Vec<Handler>>,
	},
	Text(String),
}

struct Slot {
	parent: Option<NodeId>,
	data: NodeData,
}

#[derive(Default)]
struct Arena {
	slots: Vec<Slot>,
}
impl Arena {
	fn push(&mut self, data: NodeData) -> NodeId {
		self.slots.push(Slot { parent: None, data });
		NodeId(self.slots.len() - 1)
	}

	fn detach(&mut self, child: NodeId) {
		if let Some(parent) = self.slots[child.0].parent.take() {
			if let NodeData::Element { children, .. } = &mut self.slots[parent.0].data {
				children.retain(|c| *c != child);
			}
		}
	}
}

/// A shared in-memory document with a `<body>` element.
#[derive(Clone)]
pub struct MemoryHost {
	arena: Rc<RefCell<Arena>>,
	body: NodeId,
}
impl Debug for MemoryHost {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHost")
			.field("nodes", &self.arena.borrow().slots.len())
			.field("body", &self.body)
			.finish()
	}
}
impl Default for MemoryHost {
	fn default() -> Self {
		Self::new()
	}
}
impl MemoryHost {
	#[must_use]
	pub fn new() -> Self {
		let mut arena = Arena::default();
		let body = arena.push(NodeData::Element {
			tag: "body".to_owned(),
			attributes: Vec::new(),
			children: Vec::new(),
			listeners: HashMap::new(),
		});
		Self {
			arena: Rc::new(RefCell::new(arena)),
			body,
		}
	}

	#[must_use]
	pub fn body(&self) -> NodeId {
		self.body
	}

	/// Calls each handler registered on `target` for `event.name`, in registration order.
	///
	/// Returns the number of handlers called. Handlers may freely modify the document.
	pub fn dispatch(&self, target: NodeId, event: &Event) -> usize {
		let handlers: Vec<Handler> = match &self.arena.borrow().slots[target.0].data {
			NodeData::Element { listeners, .. } => listeners.get(&event.name).cloned().unwrap_or_default(),
			NodeData::Text(_) => Vec::new(),
		};
		trace!("Dispatching {:?} to {} handler(s).", event.name, handlers.len());
		for handler in &handlers {
			handler(event);
		}
		handlers.len()
	}

	#[must_use]
	pub fn tag_name(&self, node: NodeId) -> Option<String> {
		match &self.arena.borrow().slots[node.0].data {
			NodeData::Element { tag, .. } => Some(tag.clone()),
			NodeData::Text(_) => None,
		}
	}

	#[must_use]
	pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
		match &self.arena.borrow().slots[node.0].data {
			NodeData::Element { attributes, .. } => attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone()),
			NodeData::Text(_) => None,
		}
	}

	#[must_use]
	pub fn children(&self, node: NodeId) -> Vec<NodeId> {
		match &self.arena.borrow().slots[node.0].data {
			NodeData::Element { children, .. } => children.clone(),
			NodeData::Text(_) => Vec::new(),
		}
	}

	/// Concatenated text of `node` and its descendants.
	#[must_use]
	pub fn text_content(&self, node: NodeId) -> String {
		let arena = self.arena.borrow();
		let mut text = String::new();
		collect_text(&arena, node, &mut text);
		text
	}

	/// Number of listeners for `event` on `node`.
	#[must_use]
	pub fn listener_count(&self, node: NodeId, event: &str) -> usize {
		match &self.arena.borrow().slots[node.0].data {
			NodeData::Element { listeners, .. } => listeners.get(event).map_or(0, Vec::len),
			NodeData::Text(_) => 0,
		}
	}

	/// Depth-first, document-order search below (and including) `root`.
	#[must_use]
	pub fn find_all(&self, root: NodeId, predicate: impl Fn(&Self, NodeId) -> bool) -> Vec<NodeId> {
		let mut found = Vec::new();
		let mut stack = vec![root];
		while let Some(node) = stack.pop() {
			if predicate(self, node) {
				found.push(node);
			}
			stack.extend(self.children(node).into_iter().rev());
		}
		found
	}

	/// First element below (and including) `root` whose `name` attribute equals `value`.
	#[must_use]
	pub fn find_by_attribute(&self, root: NodeId, name: &str, value: &str) -> Option<NodeId> {
		self.find_all(root, |host, node| host.attribute(node, name).as_deref() == Some(value)).into_iter().next()
	}

	/// All elements below (and including) `root` with the given tag.
	#[must_use]
	pub fn find_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
		self.find_all(root, |host, node| host.tag_name(node).as_deref() == Some(tag))
	}

	/// Serialises the subtree at `node` as markup, without escaping.
	#[must_use]
	pub fn to_html(&self, node: NodeId) -> String {
		let arena = self.arena.borrow();
		let mut html = String::new();
		write_html(&arena, node, &mut html);
		html
	}
}

fn collect_text(arena: &Arena, node: NodeId, text: &mut String) {
	match &arena.slots[node.0].data {
		NodeData::Element { children, .. } => {
			for child in children {
				collect_text(arena, *child, text)
			}
		}
		NodeData::Text(data) => text.push_str(data),
	}
}

fn write_html(arena: &Arena, node: NodeId, html: &mut String) {
	match &arena.slots[node.0].data {
		NodeData::Element { tag, attributes, children, .. } => {
			html.push('<');
			html.push_str(tag);
			for (name, value) in attributes {
				// Writing to a `String` can't fail.
				let _ = write!(html, " {}=\"{}\"", name, value);
			}
			html.push('>');
			for child in children {
				write_html(arena, *child, html)
			}
			let _ = write!(html, "</{}>", tag);
		}
		NodeData::Text(data) => html.push_str(data),
	}
}

impl Host for MemoryHost {
	type Node = NodeId;

	fn create_element(&self, tag: &str) -> NodeId {
		self.arena.borrow_mut().push(NodeData::Element {
			tag: tag.to_owned(),
			attributes: Vec::new(),
			children: Vec::new(),
			listeners: HashMap::new(),
		})
	}

	fn create_text_node(&self, text: &str) -> NodeId {
		self.arena.borrow_mut().push(NodeData::Text(text.to_owned()))
	}

	fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
		match &mut self.arena.borrow_mut().slots[element.0].data {
			NodeData::Element { attributes, .. } => match attributes.iter_mut().find(|(n, _)| n == name) {
				Some((_, existing)) => *existing = value.to_owned(),
				None => attributes.push((name.to_owned(), value.to_owned())),
			},
			NodeData::Text(_) => error!("Can't set attribute {:?} on a text node.", name),
		}
	}

	fn add_event_listener(&self, target: &NodeId, event: &str, handler: Handler) {
		match &mut self.arena.borrow_mut().slots[target.0].data {
			NodeData::Element { listeners, .. } => listeners.entry(event.to_owned()).or_default().push(handler),
			NodeData::Text(_) => error!("Can't add {:?} listener to a text node.", event),
		}
	}

	fn append_child(&self, parent: &NodeId, child: &NodeId) {
		let mut arena = self.arena.borrow_mut();
		if !matches!(arena.slots[parent.0].data, NodeData::Element { .. }) {
			return error!("Can't append to a text node.");
		}
		arena.detach(*child);
		arena.slots[child.0].parent = Some(*parent);
		if let NodeData::Element { children, .. } = &mut arena.slots[parent.0].data {
			children.push(*child);
		}
	}

	fn replace_child(&self, parent: &NodeId, new_child: &NodeId, old_child: &NodeId) {
		let mut arena = self.arena.borrow_mut();
		if arena.slots[old_child.0].parent != Some(*parent) {
			return warn!("Node to replace is not a child of the given parent. Ignoring.");
		}
		arena.detach(*new_child);
		let index = match &arena.slots[parent.0].data {
			NodeData::Element { children, .. } => children.iter().position(|c| c == old_child),
			NodeData::Text(_) => None,
		};
		if let (Some(index), NodeData::Element { children, .. }) = (index, &mut arena.slots[parent.0].data) {
			children[index] = *new_child;
		}
		arena.slots[old_child.0].parent = None;
		arena.slots[new_child.0].parent = Some(*parent);
	}

	fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
		self.arena.borrow().slots[node.0].parent
	}
}
