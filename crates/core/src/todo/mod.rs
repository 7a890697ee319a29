mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::{CreateTodoItemRequest, CreateTodoListRequest};
pub use types::{TodoList, TodoListItem, TodoListWithItems};
