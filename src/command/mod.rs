//! Interactive vocabulary commands
//!
//! Each single-letter menu entry maps to one command type. The
//! [`CommandFactory`] owns them and routes user input to the right one.

pub mod add;
pub mod command;
pub mod list;
pub mod quit;
pub mod remove;
pub mod search;

pub use command::{CommandFactory, Flow};
