//! CLI subcommands

pub mod tail;
