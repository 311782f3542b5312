//! The TODO list views and their state.
//!
//! [`TodoList`] owns the [`TodoState`] and every child component. [`AddTask`] and [`TaskRow`] only ever see
//! snapshots of that state and ask for changes through [`Callback`]s.

use std::rc::Rc;

mod add_task;
mod list;
mod state;
mod task_row;

pub use add_task::AddTask;
pub use list::TodoList;
pub use state::{Task, TaskId, TodoState};
pub use task_row::{RowState, TaskRow};

/// A request from a child view to its owner.
pub type Callback<T> = Rc<dyn Fn(T)>;
