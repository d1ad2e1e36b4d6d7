use todo_client::accounts::{Profile, Task};

// Program paths
pub const TODO_SO_PATH: &str = "target/deploy/todo.so";

// Task test data
pub const DEFAULT_TASK_CONTENT: &str = "buy milk";
pub const MAX_TASKS_PER_PROFILE: u64 = Profile::MAX_TASKS;
pub const MAX_CONTENT_LEN: usize = Task::MAX_CONTENT_LEN;
