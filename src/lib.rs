#![doc(html_root_url = "https://docs.rs/todo-dom/0.1.0")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod app;
pub mod component;
pub mod config;
pub mod element;
pub mod host;
pub mod memory;
pub mod todo;
pub mod web;

pub use app::mount;
pub use component::{Component, Rendered};
pub use config::TodoConfig;
pub use element::{create_element, el, Child};
pub use host::{Event, Handler, Host};
