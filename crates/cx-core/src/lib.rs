//! The implementation crate for the core of the cx launcher.

mod command;
pub mod error;
pub mod layout;
pub mod log;
pub mod run;
pub mod signal;
mod style;
