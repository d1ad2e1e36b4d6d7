pub mod add_task;
pub mod initialize_profile;
pub mod mark_task;
pub mod remove_task;

pub use add_task::*;
pub use initialize_profile::*;
pub use mark_task::*;
pub use remove_task::*;
