pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod plan;
pub mod session;
#[cfg(test)]
pub mod test_helpers;

pub use error::{PlanError, Result};
