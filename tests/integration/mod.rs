//! Integration tests for txpeek.

pub mod common;
pub mod query_test;
pub mod session_test;
