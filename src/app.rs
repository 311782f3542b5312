//! Mounting.

use crate::{component::Component, config::TodoConfig, host::Host, todo::TodoList};
use std::rc::Rc;
use tracing::{info, instrument};

/// Creates a [`TodoList`] for `config` and appends its rendered node to `mount_point`.
///
/// The list stays alive only as long as the returned handle does.
#[instrument(skip(host, config))]
pub fn mount<H: Host>(host: H, mount_point: H::Node, config: TodoConfig) -> Rc<TodoList<H>> {
	let list = TodoList::with_root(host.clone(), mount_point.clone(), config);
	host.append_child(&mount_point, &list.rendered_node());
	info!("Mounted TODO list.");
	list
}
