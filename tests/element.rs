use std::{cell::RefCell, rc::Rc};
use todo_dom::{
	create_element,
	element::{el, NO_ATTRIBUTES},
	memory::MemoryHost,
	Child, Event, Handler, Host,
};

#[test]
fn attributes_and_text() {
	let host = MemoryHost::new();
	let node = el(&host, "p", [("id", "greeting"), ("class", "a b")], "Hello!");

	assert_eq!(host.to_html(node), r#"<p id="greeting" class="a b">Hello!</p>"#);
	assert_eq!(host.parent_node(&node), None);
}

#[test]
fn nested_children_in_order() {
	let host = MemoryHost::new();
	let inner = el(&host, "b", NO_ATTRIBUTES, "bold");
	let node = el(
		&host,
		"div",
		NO_ATTRIBUTES,
		vec![
			Child::from("a"),
			Child::Node(inner),
			Child::Sequence(vec![Child::from("b"), Child::Empty, Child::from(Some("c"))]),
			Child::from(None::<&str>),
		],
	);

	assert_eq!(host.to_html(node), "<div>a<b>bold</b>bc</div>");
	assert_eq!(host.children(node).len(), 4);
	assert_eq!(host.parent_node(&inner), Some(node));
}

#[test]
fn empty_child_is_ignored() {
	let host = MemoryHost::new();
	let node = el(&host, "span", NO_ATTRIBUTES, Child::Empty);
	assert!(host.children(node).is_empty());
}

#[test]
fn listeners_are_registered_once_each() {
	let host = MemoryHost::new();
	let log = Rc::new(RefCell::new(Vec::new()));

	let click_log = Rc::clone(&log);
	let on_click: Handler = Rc::new(move |event: &Event| click_log.borrow_mut().push(event.name.clone()));
	let input_log = Rc::clone(&log);
	let on_input: Handler = Rc::new(move |event: &Event| input_log.borrow_mut().push(event.value.clone().unwrap_or_default()));

	let node = create_element(&host, "input", [("type", "text")], Child::Empty, vec![("click", on_click), ("input", on_input)]);
	assert_eq!(host.listener_count(node, "click"), 1);
	assert_eq!(host.listener_count(node, "input"), 1);
	assert_eq!(host.listener_count(node, "change"), 0);

	assert_eq!(host.dispatch(node, &Event::new("click")), 1);
	assert_eq!(host.dispatch(node, &Event::new("input").with_value("typed")), 1);
	assert_eq!(host.dispatch(node, &Event::new("change")), 0);

	assert_eq!(*log.borrow(), ["click", "typed"]);
}
