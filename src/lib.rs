pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod executor;
pub mod git;
pub mod logging;
pub mod preflight;
pub mod runner;
pub mod ui;

pub use error::{BumpError, Result};
