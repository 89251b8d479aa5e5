//! Query execution and classification for txpeek.
//!
//! This module isolates SQL execution and classification from the session
//! pipeline.

pub mod executor;

pub use executor::{QueryExecutor, QueryOutcome};
