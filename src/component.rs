//! Full-rerender components.
//!
//! A [`Component`] renders its whole subtree from its current state.
//! There is no reconciliation: [`Component::refresh`] throws the previous subtree away and splices a fresh one into its place.

use crate::host::Host;
use core::cell::RefCell;
use tracing::{debug, instrument, trace};

/// The rendered-node slot every [`Component`] carries.
///
/// Holds the last rendered node (if any) and, optionally, a root that fresh nodes are appended to
/// when the previous node isn't attached anywhere.
#[derive(Debug)]
pub struct Rendered<H: Host> {
	host: H,
	root: Option<H::Node>,
	node: RefCell<Option<H::Node>>,
}
impl<H: Host> Rendered<H> {
	#[must_use]
	pub fn new(host: H) -> Self {
		Self {
			host,
			root: None,
			node: RefCell::new(None),
		}
	}

	/// Like [`Rendered::new`], but [`Component::refresh`] appends to `root` while the node has no parent.
	#[must_use]
	pub fn with_root(host: H, root: H::Node) -> Self {
		Self {
			host,
			root: Some(root),
			node: RefCell::new(None),
		}
	}

	#[must_use]
	pub fn host(&self) -> &H {
		&self.host
	}

	#[must_use]
	pub fn root(&self) -> Option<&H::Node> {
		self.root.as_ref()
	}

	/// The cached node, without rendering.
	#[must_use]
	pub fn current(&self) -> Option<H::Node> {
		self.node.borrow().clone()
	}

	fn get_or_init(&self, render: impl FnOnce() -> H::Node) -> H::Node {
		if let Some(node) = self.current() {
			return node;
		}

		// `render` may access other components' slots, so no borrow is held across it.
		let node = render();
		trace!("Cached freshly rendered node.");
		*self.node.borrow_mut() = Some(node.clone());
		node
	}

	fn swap(&self, new_node: H::Node) {
		let old_node = self.node.borrow_mut().replace(new_node.clone());
		match old_node.as_ref().and_then(|old_node| self.host.parent_node(old_node).map(|parent| (parent, old_node))) {
			Some((parent, old_node)) => {
				trace!("Replacing node in place.");
				self.host.replace_child(&parent, &new_node, old_node)
			}
			None => match &self.root {
				Some(root) => {
					debug!("Previous node is detached. Appending to root instead.");
					self.host.append_child(root, &new_node)
				}
				None => debug!("Previous node is detached and there is no root. Only caching."),
			},
		}
	}
}

/// A view that renders its state to a node subtree.
pub trait Component<H: Host> {
	/// Builds a complete new subtree from the current state.
	///
	/// Must not be called while holding a borrow of this component's state that refresh handlers could need.
	fn render(&self) -> H::Node;

	fn rendered(&self) -> &Rendered<H>;

	/// Returns the rendered node, rendering it first if nothing is cached yet.
	fn rendered_node(&self) -> H::Node {
		self.rendered().get_or_init(|| self.render())
	}

	/// Rebuilds the subtree and replaces the previously rendered node with it.
	#[instrument(skip(self))]
	fn refresh(&self) {
		let node = self.render();
		self.rendered().swap(node);
	}
}
