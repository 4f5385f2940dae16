pub mod catalog;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod session;
pub mod strings;
pub mod tui;
