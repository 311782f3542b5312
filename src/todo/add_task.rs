use super::Callback;
use crate::{
	component::{Component, Rendered},
	element::{create_element, el, Child},
	host::{Event, Handler, Host},
};
use std::rc::Rc;

/// The input row: a text field for the next task and a button that adds it.
pub struct AddTask<H: Host> {
	placeholder: String,
	input_text: String,
	on_input: Callback<String>,
	on_add: Callback<()>,
	rendered: Rendered<H>,
}
impl<H: Host> AddTask<H> {
	/// `on_input` receives the field's value on each `input` event, `on_add` fires on button clicks.
	#[must_use]
	pub fn new(host: H, placeholder: impl Into<String>, input_text: impl Into<String>, on_input: Callback<String>, on_add: Callback<()>) -> Self {
		Self {
			placeholder: placeholder.into(),
			input_text: input_text.into(),
			on_input,
			on_add,
			rendered: Rendered::new(host),
		}
	}
}
impl<H: Host> Component<H> for AddTask<H> {
	fn render(&self) -> H::Node {
		let host = self.rendered.host();

		let on_input = Rc::clone(&self.on_input);
		let input_handler: Handler = Rc::new(move |event: &Event| on_input(event.value.clone().unwrap_or_default()));
		let input = create_element(
			host,
			"input",
			[("id", "new-todo"), ("type", "text"), ("placeholder", self.placeholder.as_str()), ("value", self.input_text.as_str())],
			Child::Empty,
			vec![("input", input_handler)],
		);

		let on_add = Rc::clone(&self.on_add);
		let click_handler: Handler = Rc::new(move |_: &Event| on_add(()));
		let button = create_element(host, "button", [("id", "add-btn")], "+", vec![("click", click_handler)]);

		el(host, "div", [("class", "add-todo")], vec![Child::Node(input), Child::Node(button)])
	}

	fn rendered(&self) -> &Rendered<H> {
		&self.rendered
	}
}
