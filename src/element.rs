//! Declarative element construction.

use crate::host::{Handler, Host};
use tracing::{instrument, trace};

/// An empty attribute list.
pub const NO_ATTRIBUTES: [(&str, &str); 0] = [];

/// Child content of an element under construction.
#[derive(Debug, Clone)]
pub enum Child<N> {
	/// Becomes a text node.
	Text(String),
	/// Attached as-is.
	Node(N),
	/// Resolved in order, recursively.
	Sequence(Vec<Child<N>>),
	/// Ignored.
	Empty,
}
impl<N> Default for Child<N> {
	fn default() -> Self {
		Self::Empty
	}
}
impl<N> From<&str> for Child<N> {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}
impl<N> From<String> for Child<N> {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}
impl<N, T: Into<Child<N>>> From<Option<T>> for Child<N> {
	fn from(child: Option<T>) -> Self {
		child.map_or(Self::Empty, Into::into)
	}
}
impl<N, T: Into<Child<N>>> From<Vec<T>> for Child<N> {
	fn from(children: Vec<T>) -> Self {
		Self::Sequence(children.into_iter().map(Into::into).collect())
	}
}

/// Creates a `tag` element on `host` with `attributes`, `children` and event `listeners` attached.
///
/// Attributes are set verbatim and in order. Each listener is registered once and never removed here:
/// A caller that rebuilds the element discards the old listeners along with the old node.
#[instrument(skip(host, attributes, children, listeners))]
pub fn create_element<'a, H: Host>(
	host: &H,
	tag: &str,
	attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
	children: impl Into<Child<H::Node>>,
	listeners: impl IntoIterator<Item = (&'a str, Handler)>,
) -> H::Node {
	let element = host.create_element(tag);

	for (name, value) in attributes {
		host.set_attribute(&element, name, value);
	}

	append_children(host, &element, children.into());

	for (event, handler) in listeners {
		trace!("Adding {:?} listener.", event);
		host.add_event_listener(&element, event, handler);
	}

	element
}

/// Shorthand for [`create_element`] without event listeners.
pub fn el<'a, H: Host>(host: &H, tag: &str, attributes: impl IntoIterator<Item = (&'a str, &'a str)>, children: impl Into<Child<H::Node>>) -> H::Node {
	create_element(host, tag, attributes, children, None::<(&str, Handler)>)
}

fn append_children<H: Host>(host: &H, parent: &H::Node, child: Child<H::Node>) {
	match child {
		Child::Text(text) => host.append_child(parent, &host.create_text_node(&text)),
		Child::Node(node) => host.append_child(parent, &node),
		Child::Sequence(children) => {
			for child in children {
				append_children(host, parent, child)
			}
		}
		Child::Empty => trace!("Skipping empty child."),
	}
}
