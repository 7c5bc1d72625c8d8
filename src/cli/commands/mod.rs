//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. `resolve` and `explain` share their input loading
//! through [`sources::ResolutionInputs`].

pub mod completions;
pub mod dispatcher;
pub mod explain;
pub mod resolve;
pub mod schema;
pub mod sources;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
