use core::cell::Cell;
use todo_dom::{
	element::{el, NO_ATTRIBUTES},
	memory::{MemoryHost, NodeId},
	Component, Host, Rendered,
};

struct Counter {
	renders: Cell<u32>,
	rendered: Rendered<MemoryHost>,
}
impl Counter {
	fn new(rendered: Rendered<MemoryHost>) -> Self {
		Self { renders: Cell::new(0), rendered }
	}
}
impl Component<MemoryHost> for Counter {
	fn render(&self) -> NodeId {
		self.renders.set(self.renders.get() + 1);
		el(self.rendered.host(), "span", NO_ATTRIBUTES, self.renders.get().to_string())
	}

	fn rendered(&self) -> &Rendered<MemoryHost> {
		&self.rendered
	}
}

#[test]
fn rendered_node_is_cached() {
	let host = MemoryHost::new();
	let counter = Counter::new(Rendered::new(host));

	let first = counter.rendered_node();
	let second = counter.rendered_node();
	assert_eq!(first, second);
	assert_eq!(counter.renders.get(), 1);
}

#[test]
fn refresh_replaces_in_place() {
	let host = MemoryHost::new();
	let counter = Counter::new(Rendered::new(host.clone()));

	let container = el(&host, "div", NO_ATTRIBUTES, "before");
	let old = counter.rendered_node();
	host.append_child(&container, &old);
	host.append_child(&container, &host.create_text_node("after"));

	counter.refresh();
	let new = counter.rendered_node();

	assert_ne!(old, new);
	assert_eq!(counter.renders.get(), 2);
	assert_eq!(host.to_html(container), "<div>before<span>2</span>after</div>");
	assert_eq!(host.parent_node(&old), None);
	assert_eq!(host.parent_node(&new), Some(container));
}

#[test]
fn detached_refresh_appends_to_root() {
	let host = MemoryHost::new();
	let counter = Counter::new(Rendered::with_root(host.clone(), host.body()));

	counter.refresh();
	counter.refresh();

	// The first refresh had nothing to replace, the second one replaced the first.
	assert_eq!(host.to_html(host.body()), "<body><span>2</span></body>");
}

#[test]
fn detached_refresh_without_root_only_caches() {
	let host = MemoryHost::new();
	let counter = Counter::new(Rendered::new(host.clone()));

	counter.refresh();
	let node = counter.rendered_node();

	assert_eq!(counter.renders.get(), 1);
	assert_eq!(host.parent_node(&node), None);
	assert_eq!(host.to_html(node), "<span>1</span>");
}
