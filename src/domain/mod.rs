pub mod enums;
pub mod task;

pub use enums::{TaskField, UiMode};
pub use task::Task;
