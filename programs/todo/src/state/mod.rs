pub mod profile;
pub mod task;

pub use profile::*;
pub use task::*;
