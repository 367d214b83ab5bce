//! Terminal falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates as `termtris::{core,input,term,types}` and
//! hosts the binary's startup concerns: environment configuration and log
//! setup.

pub mod config;
pub mod logging;

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;

pub use config::GameConfig;
