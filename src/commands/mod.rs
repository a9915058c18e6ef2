//! Command implementations

pub mod resolve;

pub use resolve::{run as resolve_run, Outcome};
