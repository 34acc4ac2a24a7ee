pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use error::{CommitverError, Result};
