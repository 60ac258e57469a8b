//! CLI module graph.

pub mod command;
pub mod console;
pub mod login;
pub mod nearby;
pub mod output;
pub mod paths;
pub mod scan;
