//! CLI module for comprar - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
