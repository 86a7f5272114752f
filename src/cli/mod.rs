//! CLI module for stylegate - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
