//! The browser [`Host`], on top of [`web_sys`].

use crate::{
	app::mount,
	config::TodoConfig,
	host::{Event, Handler, Host},
	todo::TodoList,
};
use std::rc::Rc;
use tracing::{error, instrument, trace_span};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue, UnwrapThrowExt};

/// Renders into a live [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document).
///
/// Event handlers are wrapped in [`Closure`]s that are handed over to ***JavaScript***,
/// so that they are released together with the element they are attached to.
#[derive(Debug, Clone)]
pub struct DomHost {
	document: web_sys::Document,
}
impl DomHost {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Uses the current window's document.
	///
	/// # Panics
	///
	/// Throws into ***JavaScript*** if there is no window or document.
	#[must_use]
	pub fn from_window() -> Self {
		let document = web_sys::window()
			.expect_throw("todo-dom: No `window` found.")
			.document()
			.expect_throw("todo-dom: No `document` found on `window`.");
		Self::new(document)
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}

	/// The document's `<body>` as [`web_sys::Node`], if any.
	#[must_use]
	pub fn body(&self) -> Option<web_sys::Node> {
		self.document.body().map(Into::into)
	}
}

/// Reads the target state the views care about from a DOM event.
fn convert_event(event: &web_sys::Event) -> Event {
	let mut converted = Event::new(event.type_());
	if let Some(input) = event.target().and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok()) {
		converted.value = Some(input.value());
		converted.checked = Some(input.checked());
	}
	converted
}

impl Host for DomHost {
	type Node = web_sys::Node;

	#[instrument(skip(self))]
	fn create_element(&self, tag: &str) -> web_sys::Node {
		match self.document.create_element(tag) {
			Ok(element) => element.into(),
			Err(error) => {
				error!("Failed to create element <{}>: {:?}", tag, error);
				// An unnamed placeholder keeps the surrounding tree intact.
				self.document.create_text_node("").into()
			}
		}
	}

	fn create_text_node(&self, text: &str) -> web_sys::Node {
		self.document.create_text_node(text).into()
	}

	fn set_attribute(&self, element: &web_sys::Node, name: &str, value: &str) {
		match element.dyn_ref::<web_sys::Element>() {
			Some(element) => {
				if let Err(error) = element.set_attribute(name, value) {
					error!("Could not set attribute {:?}={:?}: {:?}", name, value, error)
				}
			}
			None => error!("Expected `web_sys::Element` to set attribute {:?} on but found {:?}.", name, element),
		}
	}

	fn add_event_listener(&self, target: &web_sys::Node, event: &str, handler: Handler) {
		let name = event.to_owned();
		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let span = trace_span!("event_handler", event = name.as_str());
			let _enter = span.enter();
			handler(&convert_event(&event));
		}) as Box<dyn Fn(web_sys::Event)>);

		let target: &web_sys::EventTarget = target.as_ref();
		if let Err(error) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>()) {
			error!("Failed to add event listener {:?}: {:?}", event, error)
		}

		// ***JavaScript*** now owns the closure.
		drop(closure.into_js_value());
	}

	fn append_child(&self, parent: &web_sys::Node, child: &web_sys::Node) {
		if let Err(error) = parent.append_child(child) {
			error!("Failed to append node: {:?}", error)
		}
	}

	fn replace_child(&self, parent: &web_sys::Node, new_child: &web_sys::Node, old_child: &web_sys::Node) {
		if let Err(error) = parent.replace_child(new_child, old_child) {
			error!("Failed to replace node: {:?}", error)
		}
	}

	fn parent_node(&self, node: &web_sys::Node) -> Option<web_sys::Node> {
		node.parent_node()
	}
}

/// A mounted list, handed to ***JavaScript***, which keeps it alive.
#[wasm_bindgen]
pub struct TodoApp {
	list: Rc<TodoList<DomHost>>,
}
#[wasm_bindgen]
impl TodoApp {
	#[wasm_bindgen(js_name = taskCount)]
	pub fn task_count(&self) -> usize {
		self.list.state().tasks().len()
	}

	#[wasm_bindgen(js_name = addTask)]
	pub fn add_task(&self, text: &str) -> bool {
		self.list.add_task(text).is_some()
	}
}
impl TodoApp {
	#[must_use]
	pub fn list(&self) -> &Rc<TodoList<DomHost>> {
		&self.list
	}
}

/// Mounts a default [`TodoList`] into the current document's `<body>`.
///
/// # Errors
///
/// Iff the document has no `<body>`.
#[wasm_bindgen(js_name = mountToBody)]
pub fn mount_to_body() -> Result<TodoApp, JsValue> {
	let host = DomHost::from_window();
	let body = host.body().ok_or_else(|| JsValue::from_str("todo-dom: The document has no body."))?;
	Ok(TodoApp {
		list: mount(host, body, TodoConfig::default()),
	})
}
