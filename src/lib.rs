//! my-cli: a command-line skeleton with a declarative command registry,
//! validated options and uniform exit codes.
//!
//! Layers, innermost first: `domain` (entities, no I/O), `application`
//! (services), `infrastructure` (collaborators and wiring), `cli` (parsing,
//! validation, dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
