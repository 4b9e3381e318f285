//! The catalog, user registry, and loan ledger, plus their error taxonomy
//! and aggregate statistics.

pub mod error;
pub mod repository;
pub mod stats;

pub use error::*;
pub use repository::*;
pub use stats::*;
