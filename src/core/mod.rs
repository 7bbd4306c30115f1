//! Core plumbing: configuration, errors, version arithmetic

pub mod config;
pub mod error;
pub mod version;
