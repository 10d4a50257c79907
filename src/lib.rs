//! Shared logic for the `product` and `printfile` command-line programs.

pub mod cli;
pub mod content;
pub mod error;
pub mod multiply;
