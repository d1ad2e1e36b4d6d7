//! Off-chain companion to the `todo` program: address derivation,
//! instruction builders and record decoding.

pub mod accounts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod programs;

pub use errors::{ClientError, TodoError};
pub use programs::TODO_ID;
