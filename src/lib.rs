//! txpeek - run an ad-hoc SQL query against a transactions database and
//! print the result as a color-coded table.
//!
//! This library exposes the core modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod logging;
pub mod query;
pub mod render;
pub mod safety;
