//! cityroute CLI library.
//!
//! Shared pieces of the `cityroute` binary: output rendering and the parsers
//! for list-valued arguments.

pub mod args;
pub mod output;
