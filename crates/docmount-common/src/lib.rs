//! Docmount Common - Shared configuration and errors
//!
//! This crate provides the file-based configuration and the error
//! type shared by the docmount server and its UI mounts.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
