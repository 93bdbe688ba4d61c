//! ca - Career Advisor CLI
//!
//! Store professional profiles in memory, attach skills with proficiency
//! levels, and score compatibility against a built-in catalog of careers.

pub mod app;
pub mod cli;
pub mod error;
pub mod model;
pub mod scoring;
pub mod shell;

pub use error::{CaError, Result};
