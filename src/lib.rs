// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod guide;
pub mod heroes;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;

pub use error::{Result, ScrapeError};
